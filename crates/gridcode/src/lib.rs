//! # gridcode
//!
//! Convert named spreadsheet formulas into source code.
//!
//! Gridcode re-expresses a workbook's named formula cells as functions in a
//! target programming language. A formula's RPN token sequence (supplied by
//! the workbook/parsing layer through the [`TokenSource`] trait) is compiled
//! into a typed intermediate representation; references to other formula
//! cells become calls to recursively generated helper functions; a
//! code-generation backend then serializes the whole function list.
//!
//! ## Example
//!
//! ```rust,ignore
//! use gridcode::prelude::*;
//!
//! // `workbook` implements TokenSource
//! let mut converter = FormulaConverter::new(&workbook);
//! let functions = converter.convert_many(&["mult", "times2"])?;
//!
//! let formatter = formatter_for("js").expect("known backend");
//! println!("{}", formatter.format_all(&functions, "\n\n"));
//! ```

pub mod prelude;

// Re-export IR types
pub use gridcode_ir::{
    builder, BinOp, BinaryOp, Binding, Branch, Call, CellType, Expr, Function, IrError, IrResult,
    Literal, Param, Sequence, Var,
};

// Re-export compiler types
pub use gridcode_compiler::{
    registry, Builtin, BuiltinRegistry, CellValues, ConvertError, ConvertResult, FormulaConverter,
    TestCase, TestGenerator, Token, TokenSource,
};

// Re-export code-generation types
pub use gridcode_codegen::{formatter_for, FunctionFormatter, JsFormatter};
