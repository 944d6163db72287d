//! Unified error type definition

use std::fmt;

use thiserror::Error;

/// Error category shown to the operator.
///
/// Every [`CoreError`] maps onto exactly one kind; the console renders the
/// kind as the error screen title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotConnected,
    ConnectionFailed,
    TopicNotFound,
    InvalidInput,
    ConfigPersistFailed,
    Timeout,
    Internal,
}

impl ErrorKind {
    /// Human readable title
    pub fn title(self) -> &'static str {
        match self {
            Self::NotConnected => "Not Connected",
            Self::ConnectionFailed => "Connection Failed",
            Self::TopicNotFound => "Topic Not Found",
            Self::InvalidInput => "Invalid Input",
            Self::ConfigPersistFailed => "Configuration Error",
            Self::Timeout => "Timeout",
            Self::Internal => "Internal Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No live cluster connection
    #[error("not connected to any cluster")]
    NotConnected,

    /// Connecting to a cluster failed (or the profile does not exist)
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Topic does not exist on the connected cluster
    #[error("topic {0} not found")]
    TopicNotFound(String),

    /// Rejected input (form validation, illegal partition change, ...)
    #[error("{0}")]
    InvalidInput(String),

    /// Reading or writing the configuration file failed
    #[error("configuration error: {0}")]
    ConfigPersistFailed(String),

    /// The operation did not finish in time
    #[error("{operation} timed out after {seconds}s")]
    Timeout { operation: String, seconds: u64 },

    /// Anything else (worker panics, broken invariants)
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Error category of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotConnected => ErrorKind::NotConnected,
            Self::ConnectionFailed(_) => ErrorKind::ConnectionFailed,
            Self::TopicNotFound(_) => ErrorKind::TopicNotFound,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::ConfigPersistFailed(_) => ErrorKind::ConfigPersistFailed,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotConnected | Self::TopicNotFound(_) | Self::InvalidInput(_) => true,
            Self::ConnectionFailed(_)
            | Self::ConfigPersistFailed(_)
            | Self::Timeout { .. }
            | Self::Internal(_) => false,
        }
    }

    /// Shorthand for a timeout of `operation`
    pub fn timeout(operation: impl Into<String>, duration: std::time::Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            seconds: duration.as_secs(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::ConfigPersistFailed(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(CoreError::NotConnected.kind(), ErrorKind::NotConnected);
        assert_eq!(
            CoreError::TopicNotFound("orders".into()).kind(),
            ErrorKind::TopicNotFound
        );
        assert_eq!(
            CoreError::timeout("list topics", Duration::from_secs(10)).kind(),
            ErrorKind::Timeout
        );
    }

    #[test]
    fn timeout_message_names_operation() {
        let err = CoreError::timeout("list topics", Duration::from_secs(10));
        assert_eq!(err.to_string(), "list topics timed out after 10s");
    }

    #[test]
    fn expected_errors_are_user_facing() {
        assert!(CoreError::InvalidInput("bad".into()).is_expected());
        assert!(!CoreError::ConnectionFailed("refused".into()).is_expected());
    }
}
