use thiserror::Error;

#[derive(Error, Debug)]
pub enum UrlshError {
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    #[error("Invalid code: {0}")]
    InvalidCode(String),

    #[error("Code '{0}' already taken")]
    CodeTaken(String),

    #[error("Code '{0}' not found")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Randomness source failed: {0}")]
    Entropy(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, UrlshError>;
