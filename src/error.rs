use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloakError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A step is structurally invalid for its kind
    #[error("Invalid transformation: {0}")]
    Configuration(String),

    #[error("Unknown transformation type: {0}")]
    UnknownKind(String),

    #[error("{0}")]
    Usage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CloakError>;
