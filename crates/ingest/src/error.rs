use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed script: {0}")]
    Script(String),
}

pub type IngestResult<T> = std::result::Result<T, IngestError>;
