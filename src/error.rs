use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("shortcut is not configured, run setup first")]
    NotConfigured,
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("invalid depth: {0}")]
    InvalidDepth(String),
    #[error("failed to write store key {key}: {reason}")]
    StoreWrite { key: String, reason: String },
    #[error("failed to read store: {0}")]
    StoreRead(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
