//! Error types for the icsplit crates.

use thiserror::Error;

/// Errors that can occur while splitting a calendar.
///
/// Each variant maps to one pipeline stage, so the top-level message
/// identifies where a run failed.
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("ICS parse error: {0}")]
    Parse(String),

    #[error("Event {0} has no usable start date")]
    MalformedEvent(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for split operations.
pub type SplitResult<T> = Result<T, SplitError>;
