use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// The key-value storage backend cannot be reached (e.g. browser storage disabled).
    #[error("Session storage is unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to write {key:?} to session storage: {reason}")]
    Write { key: String, reason: String },
    #[error("Failed to serialize session data: {0}")]
    Serialize(#[from] serde_json::Error),
}
