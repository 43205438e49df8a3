//! Convenience constructors for IR values
//!
//! Free functions for assembling expression trees the way the compiler does,
//! used by the compiler itself and by tests that state expected IR
//! explicitly. Constructors that enforce an invariant ([`sequence`],
//! [`branch`]) return a result; the rest are plain value constructors.

use crate::cell_type::CellType;
use crate::error::{IrError, IrResult};
use crate::expr::{BinOp, BinaryOp, Binding, Branch, Call, Expr, Literal, Sequence, Var};
use crate::function::Function;
use std::fmt;

/// A named reference of the given type.
pub fn var(name: impl Into<String>, cell_type: CellType) -> Var {
    Var::new(name, cell_type)
}

/// A constant of the given type, from its raw formula text.
pub fn literal(value: impl Into<String>, cell_type: CellType) -> Expr {
    Expr::Literal(Literal::new(value, cell_type))
}

/// Shorthand for a numeric constant.
pub fn numeric_literal(value: impl fmt::Display) -> Expr {
    literal(value.to_string(), CellType::Numeric)
}

/// Shorthand for a boolean constant.
pub fn boolean_literal(value: bool) -> Expr {
    literal(value.to_string(), CellType::Boolean)
}

/// A binary operation; the descriptor fixes symbol and result type.
pub fn bin_op(lhs: Expr, op: BinaryOp, rhs: Expr) -> Expr {
    Expr::BinOp(BinOp {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    })
}

/// A call to `callee`, recording its name and return type.
pub fn call_to(callee: &Function, args: Vec<Expr>) -> Expr {
    Expr::Call(Call {
        name: callee.name.clone(),
        args,
        return_type: callee.return_type,
    })
}

/// Declare a fresh local bound to the value of `expr`.
pub fn binding(var: Var, expr: Expr) -> Expr {
    Expr::Binding(Binding::new(var, expr))
}

/// An ordered statement list; rejects an empty list.
pub fn sequence(items: Vec<Expr>) -> IrResult<Expr> {
    Ok(Expr::Sequence(Sequence::new(items)?))
}

/// A conditional. The test must be boolean and both arms must agree on
/// their type.
pub fn branch(test: Expr, when_true: Expr, when_false: Expr) -> IrResult<Expr> {
    if test.cell_type() != CellType::Boolean {
        return Err(IrError::TypeMismatch(format!(
            "branch test must be boolean, got {}",
            test.cell_type()
        )));
    }
    if when_true.cell_type() != when_false.cell_type() {
        return Err(IrError::TypeMismatch(format!(
            "branch arms must have the same type, got {} and {}",
            when_true.cell_type(),
            when_false.cell_type()
        )));
    }
    Ok(Expr::Branch(Branch {
        test: Box::new(test),
        when_true: Box::new(when_true),
        when_false: Box::new(when_false),
    }))
}
