//! Prelude module - common imports for gridcode users
//!
//! ```rust
//! use gridcode::prelude::*;
//! ```

pub use crate::{
    // Collaborator interfaces
    CellValues,
    // IR types
    CellType,
    // Error types
    ConvertError,
    ConvertResult,
    Expr,
    // Conversion
    FormulaConverter,
    Function,
    // Code generation
    FunctionFormatter,
    JsFormatter,
    Param,
    // Test generation
    TestCase,
    TestGenerator,
    Token,
    TokenSource,
};

pub use crate::formatter_for;
