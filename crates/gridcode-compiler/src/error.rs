//! Conversion error types

use thiserror::Error;

/// Result type for conversion operations
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Errors that abort a conversion.
///
/// Every variant is fatal to the whole top-level conversion, including any
/// in-flight recursive sub-conversion; there is no partial-result recovery.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A token sequence that cannot be a well-formed RPN formula
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    /// A call token naming a function absent from the built-in registry
    #[error("Unknown built-in function: {0}")]
    UnknownBuiltin(String),

    /// A defined-name or cell lookup found no match
    #[error("Unresolved name: {0}")]
    UnresolvedName(String),

    /// Empty or otherwise unusable argument at a public entry point
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid IR construction
    #[error(transparent)]
    Ir(#[from] gridcode_ir::IrError),
}
