//! # gridcode-ir
//!
//! Typed intermediate representation for converted spreadsheet formulas.
//!
//! This crate provides:
//! - [`CellType`] - The closed set of spreadsheet cell data types
//! - [`Expr`] - Immutable, structurally-equal expression trees
//! - [`Function`] and [`Param`] - Generated function definitions
//! - [`builder`] - Convenience constructors for IR values
//!
//! IR values are created once by the compiler (or the builder API) and never
//! mutated; they are plain data and can be shared freely between consumers,
//! e.g. several code-generation backends formatting the same function list.
//!
//! ## Example
//!
//! ```rust
//! use gridcode_ir::builder::{bin_op, binding, sequence, var};
//! use gridcode_ir::{BinaryOp, CellType, Function};
//!
//! let b3 = var("B3", CellType::Numeric);
//! let product = bin_op(b3.clone().into(), BinaryOp::Mult, b3.into());
//! let body = sequence(vec![binding(var("_0", CellType::Numeric), product)]).unwrap();
//! let square = Function::new("square", vec![], body, CellType::Numeric);
//! assert_eq!(square.return_type, square.body.cell_type());
//! ```

pub mod builder;
pub mod cell_type;
pub mod error;
pub mod expr;
pub mod function;

pub use cell_type::CellType;
pub use error::{IrError, IrResult};
pub use expr::{BinOp, BinaryOp, Binding, Branch, Call, Expr, Literal, Sequence, Var};
pub use function::{Function, Param};
