//! Function definitions

use crate::cell_type::CellType;
use crate::expr::Expr;

/// A named, typed function parameter. Equal when both name and type match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    pub name: String,
    pub cell_type: CellType,
}

impl Param {
    pub fn new(name: impl Into<String>, cell_type: CellType) -> Self {
        Self {
            name: name.into(),
            cell_type,
        }
    }
}

/// A generated function: name, ordered parameters, body and declared return
/// type.
///
/// Functions constructed by the compiler satisfy
/// `return_type == body.cell_type()`; the return type is still stored
/// independently so it survives restructuring of the body.
///
/// Equality is structural: same name, same return type, parameter lists
/// equal element-wise in order, bodies deep-equal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Expr,
    pub return_type: CellType,
}

impl Function {
    pub fn new(
        name: impl Into<String>,
        params: Vec<Param>,
        body: Expr,
        return_type: CellType,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            body,
            return_type,
        }
    }
}
