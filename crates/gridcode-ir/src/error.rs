//! IR construction error types

use thiserror::Error;

/// Result type for IR construction
pub type IrResult<T> = std::result::Result<T, IrError>;

/// Errors raised while constructing IR values
#[derive(Debug, Error)]
pub enum IrError {
    /// Invalid argument (empty name, empty sequence, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Expressions disagree on type where agreement is required
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
}
