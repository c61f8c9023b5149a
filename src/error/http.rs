use thiserror::Error;

/// Failure reported by a [`Transport`](crate::http::Transport) before any response arrived.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Request was sent but no response was received.
    #[error("no response received: {0}")]
    Network(String),
    /// Request was aborted after the configured client timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u64),
    /// Request could not be constructed.
    #[error("failed to build request: {0}")]
    Setup(String),
}

/// Errors surfaced to callers of the API client.
#[derive(Error, Debug)]
pub enum HttpError {
    /// No response was received, including client-side timeouts.
    #[error("{method} {url} failed without a response: {reason}")]
    Network {
        method: String,
        url: String,
        reason: String,
    },
    /// A response was received with a non-2xx status.
    #[error("{method} {url} failed with status {status}: {message}")]
    Server {
        method: String,
        url: String,
        status: u16,
        message: String,
    },
    /// Request could not be constructed.
    #[error("Failed to set up request: {0}")]
    Setup(String),
    /// A 2xx response body did not match the expected shape.
    #[error("Failed to parse response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl HttpError {
    /// HTTP status of a server rejection, `None` for every other failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
