use coursewatch_remote::extract::{activity_names, find_login_form, GUEST_PASSWORD_FIELD};

const BOOST_COURSE_PAGE: &str = r#"<!DOCTYPE html>
<html dir="ltr" lang="en">
<body id="page-course-view-topics">
<ul class="topics">
  <li id="section-0" class="section course-section main clearfix" role="region">
    <ul class="section m-0 p-0 img-text" data-for="cmlist">
      <li class="activity activity-wrapper forum modtype_forum hasinfo" id="module-101">
        <div class="activity-item focus-control">
          <div class="activityname">
            <a href="https://moodle.example.edu/mod/forum/view.php?id=101" class="aalink stretched-link">
              <span class="instancename">Announcements <span class="accesshide "> Forum</span></span>
            </a>
          </div>
        </div>
      </li>
      <li class="activity activity-wrapper label modtype_label" id="module-102">
        <div class="activity-item"><div class="no-overflow"><p>Welcome to the course!</p></div></div>
      </li>
      <li class="activity activity-wrapper resource modtype_resource" id="module-103">
        <div class="activityname">
          <a href="https://moodle.example.edu/mod/resource/view.php?id=103">
            <span class="instancename">
              Slides week 1
              <span class="accesshide "> File</span>
            </span>
          </a>
        </div>
      </li>
    </ul>
  </li>
  <li id="section-1" class="section course-section main clearfix">
    <ul class="section img-text">
      <li class="activity-wrapper quiz modtype_quiz" id="module-104">
        <span class="instancename">Quiz 1 &amp; feedback</span>
      </li>
      <li class="resource" id="module-105">
        <span class="instancename">Übungsblatt 2</span>
      </li>
      <li class="activity assign modtype_assign" id="module-106">
        <span class="instancename">Slides week 1<span class="accesshide "> Assignment</span></span>
      </li>
    </ul>
  </li>
</ul>
</body>
</html>"#;

#[test]
fn test_activity_names_in_page_order() {
    let names = activity_names(BOOST_COURSE_PAGE).unwrap();

    assert_eq!(
        names,
        vec![
            "Announcements",
            "Slides week 1",
            "Quiz 1 & feedback",
            "Übungsblatt 2",
            "Slides week 1",
        ]
    );
}

#[test]
fn test_labels_without_name_are_skipped() {
    let names = activity_names(BOOST_COURSE_PAGE).unwrap();
    assert!(!names.iter().any(|n| n.contains("Welcome")));
}

#[test]
fn test_page_without_activities_is_empty() {
    assert!(activity_names("<html><body><p>nothing</p></body></html>")
        .unwrap()
        .is_empty());
    assert!(activity_names("").unwrap().is_empty());
}

#[test]
fn test_name_outside_activity_item_is_ignored() {
    let html = r#"<div><span class="instancename">Stray</span></div>
<ul><li class="modtype_resource"><span class="instancename">Kept</span></li></ul>"#;
    assert_eq!(activity_names(html).unwrap(), vec!["Kept"]);
}

#[test]
fn test_find_guest_login_form() {
    let html = r#"<html><body>
<form action="/login/logout.php" method="get" class="mform"><input name="sesskey" value="zz"></form>
<form autocomplete="off" action="https://moodle.example.edu/enrol/index.php" method="POST" class="mform" id="mform1">
  <input name="id" type="hidden" value="42">
  <input name="instance" type="hidden" value="7">
  <input name="sesskey" type="hidden" value="Xy12Ab">
  <input type="password" name="guestpassword" id="id_guestpassword">
  <input type="submit" value="Submit">
</form>
</body></html>"#;

    let mut form = find_login_form(html).unwrap().expect("guest form");

    assert_eq!(form.action, "https://moodle.example.edu/enrol/index.php");
    assert_eq!(
        form.fields,
        vec![
            ("id".to_string(), "42".to_string()),
            ("instance".to_string(), "7".to_string()),
            ("sesskey".to_string(), "Xy12Ab".to_string()),
            ("guestpassword".to_string(), String::new()),
        ]
    );

    form.set_field(GUEST_PASSWORD_FIELD, "hunter2");
    assert_eq!(form.fields[3].1, "hunter2");
}

#[test]
fn test_no_login_form() {
    assert_eq!(find_login_form("<html><body>Course</body></html>").unwrap(), None);
    // a search form is not the guest form
    let html = r#"<form action="/course/search.php" method="post" class="search"><input name="q"></form>"#;
    assert_eq!(find_login_form(html).unwrap(), None);
}
