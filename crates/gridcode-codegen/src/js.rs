//! JavaScript backend
//!
//! Serializes IR functions as plain JavaScript. Built-in spreadsheet
//! functions are translated to their runtime equivalents (`SQRT` to
//! `Math.sqrt`, `MOD` to the remainder operator, `IF` to a conditional
//! expression); generated functions are called by name.

use crate::FunctionFormatter;
use gridcode_compiler::registry;
use gridcode_ir::{BinaryOp, Call, CellType, Expr, Function, Literal, Sequence};

/// Formats IR functions as JavaScript source.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsFormatter;

impl JsFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl FunctionFormatter for JsFormatter {
    fn format(&self, function: &Function) -> String {
        let params = function
            .params
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "function {}({}) {}",
            function.name,
            params,
            serialize(&function.body)
        )
    }
}

fn serialize(expr: &Expr) -> String {
    match expr {
        Expr::Literal(lit) => serialize_literal(lit),
        Expr::Var(var) => var.name.clone(),
        Expr::BinOp(op) => format!(
            "{} {} {}",
            serialize(&op.lhs),
            operator(op.op),
            serialize(&op.rhs)
        ),
        Expr::Call(call) => serialize_call(call),
        Expr::Binding(binding) => {
            format!("var {} = {}", binding.var.name, serialize(&binding.expr))
        }
        Expr::Sequence(seq) => serialize_sequence(seq),
        Expr::Branch(branch) => format!(
            "({} ? {} : {})",
            serialize(&branch.test),
            serialize(&branch.when_true),
            serialize(&branch.when_false)
        ),
    }
}

/// Operator symbols translated for the target: spreadsheet equality is a
/// comparison, not an assignment.
fn operator(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Mult => "*",
        BinaryOp::Eql => "===",
    }
}

fn serialize_literal(lit: &Literal) -> String {
    match lit.cell_type {
        CellType::String => format!("'{}'", lit.value),
        // TRUE/FALSE formula constants become JS keywords
        CellType::Boolean => lit.value.to_ascii_lowercase(),
        _ => lit.value.clone(),
    }
}

fn serialize_call(call: &Call) -> String {
    match (registry().get(&call.name).map(|b| b.name), call.args.as_slice()) {
        (Some("SQRT"), [x]) => format!("Math.sqrt({})", serialize(x)),
        (Some("MOD"), [x, divisor]) => {
            format!("({} % {})", serialize(x), serialize(divisor))
        }
        (Some("IF"), [test, when_true, when_false]) => format!(
            "({} ? {} : {})",
            serialize(test),
            serialize(when_true),
            serialize(when_false)
        ),
        _ => {
            let args = call
                .args
                .iter()
                .map(serialize)
                .collect::<Vec<_>>()
                .join(",");
            format!("{}({})", call.name, args)
        }
    }
}

/// A sequence becomes a block: every item but the last is a statement, the
/// last is returned by value. A binding in terminal position is declared
/// and then returned by its bound variable name.
fn serialize_sequence(seq: &Sequence) -> String {
    let mut out = String::from("{");
    let Some((terminal, statements)) = seq.items().split_last() else {
        return "{\n}".into();
    };
    for statement in statements {
        out.push('\n');
        out.push_str(&serialize(statement));
        out.push(';');
    }
    if matches!(terminal, Expr::Binding(_)) {
        out.push('\n');
        out.push_str(&serialize(terminal));
        out.push(';');
    }
    out.push_str("\nreturn ");
    out.push_str(&serialize(&terminal.as_value()));
    out.push_str(";\n}");
    out
}
