use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistError {
    #[error("Knowledge base unavailable: corpus is empty or not loaded")]
    EngineUnavailable,
    #[error("Malformed entry #{index}: {reason}")]
    MalformedEntry { index: usize, reason: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AssistError>;
