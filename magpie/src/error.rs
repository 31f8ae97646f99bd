use thiserror::Error;

#[derive(Error, Debug)]
pub enum MagpieError {
    #[error("Document error: {0}")]
    Document(String),

    #[error("Insufficient text: {0}")]
    InsufficientText(String),

    #[error("Timed out after {0} seconds")]
    Timeout(u64),

    #[error("Task error: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MagpieError>;
