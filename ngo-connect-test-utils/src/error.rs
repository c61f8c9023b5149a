use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Mock endpoint setup failed: {0}")]
    Setup(String),
}
