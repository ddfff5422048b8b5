//! Minimal HTTP/1.1 server on 127.0.0.1 for exercising the blocking clients.
//!
//! One request per connection (`Connection: close`); the handler sees the
//! parsed request and returns a canned response. Every request is recorded.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Request {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Response {
    pub fn html(body: impl Into<String>) -> Self {
        Self::with_type(200, "text/html; charset=utf-8", body)
    }

    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self::with_type(status, "application/json", body)
    }

    pub fn status(status: u16) -> Self {
        Self::with_type(status, "text/plain", "")
    }

    fn with_type(status: u16, content_type: &str, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_string(), content_type.to_string())],
            body: body.into(),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

pub struct FakeServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl FakeServer {
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&Request) -> Response + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
        let addr = listener.local_addr().expect("addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let Some(request) = read_request(&mut stream) else {
                    continue;
                };
                recorded.lock().unwrap().push(request.clone());
                write_response(&mut stream, handler(&request));
            }
        });
        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_request(stream: &mut TcpStream) -> Option<Request> {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            return None;
        }
        raw.extend_from_slice(&buf[..n]);
        if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();
    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = raw[header_end..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&buf[..n]);
    }

    Some(Request {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&body).to_string(),
    })
}

fn write_response(stream: &mut TcpStream, response: Response) {
    let mut out = format!("HTTP/1.1 {} X\r\n", response.status);
    for (k, v) in &response.headers {
        out.push_str(&format!("{}: {}\r\n", k, v));
    }
    out.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n",
        response.body.len()
    ));
    out.push_str(&response.body);
    let _ = stream.write_all(out.as_bytes());
    let _ = stream.flush();
}

/// Course page as served to a visitor without a session.
pub fn guest_form_page(action: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><body>
<div role="main">
  <h2>Guest access</h2>
  <form autocomplete="off" action="{action}" method="post" accept-charset="utf-8" id="mform1" class="mform">
    <div style="display: none;">
      <input name="id" type="hidden" value="42" />
      <input name="instance" type="hidden" value="7" />
      <input name="sesskey" type="hidden" value="Xy12Ab" />
      <input name="_qf__4_enrol_guest_enrol_form" type="hidden" value="1" />
    </div>
    <input type="password" name="guestpassword" id="id_guestpassword" value="" />
    <input type="submit" name="submitbutton" id="id_submitbutton" value="Submit" />
  </form>
</div>
</body></html>"#
    )
}

/// Course page with the given activity names, as a logged-in guest sees it.
pub fn course_page(names: &[&str]) -> String {
    let items: String = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(
                r#"<li class="activity resource modtype_resource" id="module-{i}">
  <div class="activityinstance">
    <a href="/mod/resource/view.php?id={i}"><img src="/icon.svg" alt="" />
      <span class="instancename">{name}<span class="accesshide "> File</span></span>
    </a>
  </div>
</li>
"#
            )
        })
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html><body>
<ul class="topics">
  <li class="section main" id="section-0">
    <ul class="section img-text">
{items}    </ul>
  </li>
</ul>
</body></html>"#
    )
}
