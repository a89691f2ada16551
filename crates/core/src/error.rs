use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocnavError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown tree: {0}")]
    TreeNotFound(String),
    #[error("malformed tree at {at}: {reason}")]
    MalformedTree { at: String, reason: String },
    #[error("script ingestion error: {0}")]
    Ingest(#[from] docnav_ingest::IngestError),
}

pub type Result<T> = std::result::Result<T, DocnavError>;
