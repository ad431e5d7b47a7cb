use thiserror::Error;

#[derive(Error, Debug)]
pub enum NexusError {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data error: {0}")]
    Data(String),
}

pub type Result<T> = std::result::Result<T, NexusError>;
