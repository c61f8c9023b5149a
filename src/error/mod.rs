//! Error types for the NGO Connect client.
//!
//! Each concern has its own `thiserror` enum (configuration, session storage, HTTP transport,
//! authentication). They are aggregated into [`Error`] so service functions can use `?` across
//! layers while views still match on the specific variant they want to present.

pub mod auth;
pub mod config;
pub mod http;
pub mod storage;

use thiserror::Error;

pub use self::{
    auth::AuthError,
    config::ConfigError,
    http::{HttpError, TransportError},
    storage::StorageError,
};

/// Main error type for the NGO Connect client.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment values).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Persisted session storage could not be read or written.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Request to the backend failed (network, server rejection, request setup).
    #[error(transparent)]
    HttpError(#[from] HttpError),
    /// Login, registration or session establishment failed.
    #[error(transparent)]
    AuthError(#[from] AuthError),
}

impl Error {
    /// Message suitable for showing to the user in an alert or inline error.
    ///
    /// Server rejections carry the backend's own message verbatim, everything else uses the
    /// error's display text.
    pub fn user_message(&self) -> String {
        match self {
            Self::HttpError(HttpError::Server { message, .. }) => message.clone(),
            Self::HttpError(HttpError::Network { .. }) => {
                "Unable to reach the server, please check your connection and try again."
                    .to_string()
            }
            err => err.to_string(),
        }
    }
}
