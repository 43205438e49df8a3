//! Typed expression trees
//!
//! [`Expr`] is a closed sum of expression variants. Every node carries
//! exactly one [`CellType`], reported by [`Expr::cell_type`]; nodes are
//! immutable once constructed and compare by deep structural equality.

use crate::cell_type::CellType;

/// Binary operator descriptors.
///
/// Each operator fixes both its rendered symbol and the type of the
/// expression it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    /// Multiplication (`*`), numeric result
    Mult,
    /// Equality test (`=`), boolean result
    Eql,
}

impl BinaryOp {
    /// The operator symbol as written in a formula
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Mult => "*",
            BinaryOp::Eql => "=",
        }
    }

    /// The type of an expression built from this operator
    pub fn result_type(&self) -> CellType {
        match self {
            BinaryOp::Mult => CellType::Numeric,
            BinaryOp::Eql => CellType::Boolean,
        }
    }
}

/// A typed expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// A constant
    Literal(Literal),
    /// A named reference (parameter, local, or cell-derived symbol)
    Var(Var),
    /// A binary operation over exactly two operands
    BinOp(BinOp),
    /// A call to a built-in or generated function
    Call(Call),
    /// Declaration of a fresh local bound to the value of an expression
    Binding(Binding),
    /// An ordered statement list; never empty
    Sequence(Sequence),
    /// A conditional with type-agreeing arms
    Branch(Branch),
}

impl Expr {
    /// The static type of this expression.
    pub fn cell_type(&self) -> CellType {
        match self {
            Expr::Literal(lit) => lit.cell_type,
            Expr::Var(var) => var.cell_type,
            Expr::BinOp(op) => op.op.result_type(),
            Expr::Call(call) => call.return_type,
            Expr::Binding(binding) => binding.expr.cell_type(),
            Expr::Sequence(seq) => seq.last().cell_type(),
            Expr::Branch(branch) => branch.when_true.cell_type(),
        }
    }

    /// The value view of this node: a binding used as a value reads as its
    /// bound variable; every other node is its own value.
    pub fn as_value(&self) -> Expr {
        match self {
            Expr::Binding(binding) => Expr::Var(binding.var.clone()),
            other => other.clone(),
        }
    }
}

impl From<Var> for Expr {
    fn from(var: Var) -> Self {
        Expr::Var(var)
    }
}

impl From<Literal> for Expr {
    fn from(lit: Literal) -> Self {
        Expr::Literal(lit)
    }
}

/// A constant with its raw formula text.
#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    /// The raw text of the constant, exactly as tokenized
    pub value: String,
    pub cell_type: CellType,
}

impl Literal {
    pub fn new(value: impl Into<String>, cell_type: CellType) -> Self {
        Self {
            value: value.into(),
            cell_type,
        }
    }
}

/// Type-aware equality: boolean literals compare case-insensitively
/// (`TRUE` and `true` are the same constant), all others compare the raw
/// text.
impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        if self.cell_type != other.cell_type {
            return false;
        }
        match self.cell_type {
            CellType::Boolean => self.value.eq_ignore_ascii_case(&other.value),
            _ => self.value == other.value,
        }
    }
}

/// A named reference.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Var {
    pub name: String,
    pub cell_type: CellType,
}

impl Var {
    pub fn new(name: impl Into<String>, cell_type: CellType) -> Self {
        Self {
            name: name.into(),
            cell_type,
        }
    }
}

/// A binary operation. The operator descriptor fixes the result type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinOp {
    pub op: BinaryOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

/// A function call. The return type is recorded from the callee (built-in
/// or generated) when the call is constructed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Call {
    pub name: String,
    pub args: Vec<Expr>,
    pub return_type: CellType,
}

/// Declares a fresh local variable bound to the value of `expr`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Binding {
    pub var: Var,
    pub expr: Box<Expr>,
}

impl Binding {
    pub fn new(var: Var, expr: Expr) -> Self {
        Self {
            var,
            expr: Box::new(expr),
        }
    }
}

/// An ordered statement list. Construction through [`Sequence::new`]
/// guarantees at least one item, so the sequence always has a type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence {
    items: Vec<Expr>,
}

impl Sequence {
    /// Create a sequence; rejects an empty item list.
    pub fn new(items: Vec<Expr>) -> crate::error::IrResult<Self> {
        if items.is_empty() {
            return Err(crate::error::IrError::InvalidArgument(
                "sequence can't be empty".into(),
            ));
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Expr] {
        &self.items
    }

    /// The terminal item, whose type is the sequence's type.
    pub fn last(&self) -> &Expr {
        self.items.last().expect("sequence is never empty")
    }
}

/// A conditional expression. Both arms carry the same type; the test is
/// boolean. [`crate::builder::branch`] enforces both.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Branch {
    pub test: Box<Expr>,
    pub when_true: Box<Expr>,
    pub when_false: Box<Expr>,
}
