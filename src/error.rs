use thiserror::Error;

/// Errors surfaced by analysis and config synthesis.
#[derive(Debug, Error)]
pub enum Error {
    /// Analysis was handed blank or whitespace-only text.
    #[error("Empty content provided")]
    EmptyInput,

    /// A required business field is missing or empty.
    #[error("Missing required field: {field}")]
    Validation { field: &'static str },

    /// Default tables could not be loaded.
    #[error("Invalid default tables: {0}")]
    Defaults(String),

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(String),
}

pub type Result<T> = std::result::Result<T, Error>;
