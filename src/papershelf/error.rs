use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Papers data not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown sort key: {0}")]
    InvalidSortKey(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
