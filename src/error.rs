use thiserror::Error;

/// Custom error types for formfill
#[derive(Debug, Error)]
pub enum FormfillError {
    #[error("Invalid form template: {0}")]
    InvalidTemplate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
