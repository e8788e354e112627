use thiserror::Error;

/// Errors raised while reading or writing the persisted stroke list
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to parse stored strokes: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Stored stroke {index} has no points")]
    EmptyStroke { index: usize },
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors raised while saving an exported drawing
#[derive(Debug, Error)]
pub enum ExportError {
    /// Something the browser refused (blob creation, object URL, DOM access).
    #[error("Browser rejected the download: {0}")]
    Browser(String),

    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;
