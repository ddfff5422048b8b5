use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure a watch cycle can hit is classified into one of these kinds.
/// The kind decides whether the run aborts, which stable code is reported,
/// and which exit status the process returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExErrorKind {
    /// Caller supplied a value the operation cannot work with
    InvalidInput,
    /// Missing or malformed configuration (fatal, before any network activity)
    Config,
    /// Course page could not be fetched, logged into, or parsed
    Fetch,
    /// Prior snapshot exists but could not be read (recoverable: treated as empty)
    SnapshotRead,
    /// Notification could not be delivered (fatal, snapshot not written)
    Delivery,
    /// Snapshot could not be persisted after a successful delivery
    SnapshotWrite,
    /// Local filesystem failure outside the snapshot contract
    Io,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Fetch => "ERR_FETCH",
            ExErrorKind::SnapshotRead => "ERR_SNAPSHOT_READ",
            ExErrorKind::Delivery => "ERR_DELIVERY",
            ExErrorKind::SnapshotWrite => "ERR_SNAPSHOT_WRITE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Process exit status for a run that ends with this kind
    pub fn exit_code(&self) -> i32 {
        match self {
            ExErrorKind::Config => 2,
            ExErrorKind::Fetch => 3,
            ExErrorKind::Delivery => 4,
            ExErrorKind::SnapshotWrite => 5,
            ExErrorKind::InvalidInput
            | ExErrorKind::SnapshotRead
            | ExErrorKind::Io
            | ExErrorKind::Internal => 1,
        }
    }

    /// Whether a run may continue after an error of this kind
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ExErrorKind::SnapshotRead)
    }
}

/// Canonical structured error type
///
/// Carries the classification plus whatever context the failing operation
/// knew about: the operation name, the course being watched, the file involved.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    course_id: Option<String>,
    path: Option<PathBuf>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            course_id: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the course being watched
    pub fn with_course_id(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
    }

    /// Add the file the operation touched
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn exit_code(&self) -> i32 {
        self.kind.exit_code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn course_id(&self) -> Option<&str> {
        self.course_id.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(course_id) = &self.course_id {
            write!(f, " (course_id: {})", course_id)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures of a watch cycle
///
/// Collaborators raise these; they are folded into [`ExError`] at the
/// boundary so the orchestrator and the CLI only ever deal with kinds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WatchError {
    // ===== Configuration =====
    #[error("Required {key} config variable")]
    MissingSetting { key: String },

    #[error("Invalid value for {key}: {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("Cannot read config file {path}: {reason}")]
    ConfigUnreadable { path: PathBuf, reason: String },

    #[error("Malformed config file {path}: {reason}")]
    ConfigMalformed { path: PathBuf, reason: String },

    // ===== Fetch =====
    #[error("Guest login form not found on {url}")]
    LoginFormMissing { url: String },

    #[error("Guest password rejected by {url}")]
    GuestAccessDenied { url: String },

    #[error("{url} answered with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    // ===== Delivery =====
    #[error("Message rejected by channel {channel}: {description}")]
    DeliveryRejected {
        channel: String,
        description: String,
    },

    #[error("Delivery to channel {channel} failed: {reason}")]
    DeliveryFailed { channel: String, reason: String },

    // ===== Snapshot =====
    #[error("Snapshot {path} is unreadable: {reason}")]
    SnapshotUnreadable { path: PathBuf, reason: String },

    #[error("Snapshot {path} could not be written: {reason}")]
    SnapshotWriteFailed { path: PathBuf, reason: String },
}

impl From<WatchError> for ExError {
    fn from(err: WatchError) -> Self {
        let message = err.to_string();
        match err {
            WatchError::MissingSetting { .. } | WatchError::InvalidSetting { .. } => {
                ExError::new(ExErrorKind::Config)
                    .with_op("load_config")
                    .with_message(message)
            }
            WatchError::ConfigUnreadable { path, .. } | WatchError::ConfigMalformed { path, .. } => {
                ExError::new(ExErrorKind::Config)
                    .with_op("load_config")
                    .with_path(path)
                    .with_message(message)
            }
            WatchError::LoginFormMissing { .. }
            | WatchError::GuestAccessDenied { .. }
            | WatchError::HttpStatus { .. }
            | WatchError::Transport { .. } => ExError::new(ExErrorKind::Fetch)
                .with_op("fetch_activities")
                .with_message(message),
            WatchError::DeliveryRejected { .. } | WatchError::DeliveryFailed { .. } => {
                ExError::new(ExErrorKind::Delivery)
                    .with_op("deliver_report")
                    .with_message(message)
            }
            WatchError::SnapshotUnreadable { path, .. } => ExError::new(ExErrorKind::SnapshotRead)
                .with_op("load_snapshot")
                .with_path(path)
                .with_message(message),
            WatchError::SnapshotWriteFailed { path, .. } => {
                ExError::new(ExErrorKind::SnapshotWrite)
                    .with_op("save_snapshot")
                    .with_path(path)
                    .with_message(message)
            }
        }
    }
}
