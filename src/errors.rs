use thiserror::Error;

/// Error type that captures common loan-book failures.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Crédito no encontrado (id {0})")]
    NotFound(i64),
}
