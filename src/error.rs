use thiserror::Error;

/// Main error type for Isnad
#[derive(Error, Debug)]
pub enum IsnadError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input (missing or blank identifiers, empty names)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A referenced person does not exist
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    /// No chain of transmission connects the two persons
    #[error("No chain of transmission between {from} and {to}")]
    ChainNotFound { from: String, to: String },

    /// A blocking database task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(String),
}

/// Convenient Result type using IsnadError
pub type Result<T> = std::result::Result<T, IsnadError>;
