use thiserror::Error;

/// Errors raised by a control-plane client.
///
/// Inside a task these are turned into a failed outcome; they only surface
/// as errors during fixture discovery and teardown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),
}
