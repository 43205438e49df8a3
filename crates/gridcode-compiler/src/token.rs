//! RPN token model
//!
//! The formula-parsing layer hands the converter one token sequence per
//! formula, in strict reverse-Polish order. Cell-reference tokens arrive
//! annotated with the referenced cell's resolved type and whether that cell
//! itself holds a formula.

use gridcode_ir::{BinaryOp, CellType};

/// One formula token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A scalar constant, carrying its raw formula text
    Literal { value: String, cell_type: CellType },
    /// A reference to another cell
    CellRef {
        address: String,
        cell_type: CellType,
        is_formula: bool,
    },
    /// A binary operator
    BinaryOp(BinaryOp),
    /// A call to a built-in function
    Call { name: String },
}

impl Token {
    /// A literal constant token
    pub fn literal(value: impl Into<String>, cell_type: CellType) -> Self {
        Token::Literal {
            value: value.into(),
            cell_type,
        }
    }

    /// A reference to a plain value cell
    pub fn cell_ref(address: impl Into<String>, cell_type: CellType) -> Self {
        Token::CellRef {
            address: address.into(),
            cell_type,
            is_formula: false,
        }
    }

    /// A reference to a cell that itself holds a formula
    pub fn formula_ref(address: impl Into<String>) -> Self {
        Token::CellRef {
            address: address.into(),
            cell_type: CellType::Formula,
            is_formula: true,
        }
    }

    /// A built-in function call token
    pub fn call(name: impl Into<String>) -> Self {
        Token::Call { name: name.into() }
    }
}
