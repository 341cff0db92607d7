use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Prompt not found: {0}")]
    NotFound(String),

    #[error("Failed to convert JSON: {0:?}")]
    JsonError(#[from] serde_json::Error),
}
