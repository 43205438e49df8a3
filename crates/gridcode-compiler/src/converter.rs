//! The formula-to-IR compiler engine
//!
//! Drives an operand stack over a formula's RPN token sequence, growing a
//! statement list of local bindings, and resolves references to other
//! formula cells by recursively converting them into functions of their
//! own.
//!
//! All stack handling happens in [`FormulaConverter::process`]; everything a
//! token produces is either pushed there or appended to the frame body
//! there.

use crate::builtins::registry;
use crate::error::{ConvertError, ConvertResult};
use crate::source::TokenSource;
use crate::token::Token;
use gridcode_ir::builder::sequence;
use gridcode_ir::{BinOp, Binding, Call, CellType, Expr, Function, Literal, Param, Var};

/// Converts named spreadsheet formulas into IR functions.
///
/// One converter drives one logical (possibly recursive) conversion at a
/// time. The synthetic local-name counter is shared by every conversion the
/// instance runs, so generated local names stay unique across a whole
/// [`convert_many`](FormulaConverter::convert_many) run; the
/// unresolved-symbol table is cleared between independent named
/// conversions. The converter is not meant to be shared across threads.
pub struct FormulaConverter<'s, S: TokenSource> {
    source: &'s S,
    /// Monotonic counter behind `_0`, `_1`, ... local names; never reset.
    next_local: u32,
    symbols: SymbolTable,
}

/// Per-conversion-call mutable state. Each recursion into a referenced
/// formula cell gets a frame of its own, so an inner conversion can never
/// disturb the operand stack or body of the conversion that spawned it.
#[derive(Default)]
struct Frame {
    stack: Vec<Expr>,
    body: Vec<Expr>,
    /// Dependency functions discovered while converting this frame's
    /// formula, in discovery order, not yet deduplicated.
    discovered: Vec<Function>,
}

/// Unresolved cell references - the candidate parameters - in first-seen
/// order.
#[derive(Default)]
struct SymbolTable {
    refs: Vec<(String, CellType)>,
}

impl SymbolTable {
    fn record(&mut self, address: &str, cell_type: CellType) {
        if !self.refs.iter().any(|(a, _)| a == address) {
            self.refs.push((address.to_string(), cell_type));
        }
    }

    /// The parameter list implied by the recorded references: deduplicated
    /// by address, formula-typed references excluded.
    fn params(&self) -> Vec<Param> {
        self.refs
            .iter()
            .filter(|(_, cell_type)| *cell_type != CellType::Formula)
            .map(|(address, cell_type)| Param::new(address.clone(), *cell_type))
            .collect()
    }

    fn clear(&mut self) {
        self.refs.clear();
    }
}

impl<'s, S: TokenSource> FormulaConverter<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self {
            source,
            next_local: 0,
            symbols: SymbolTable::default(),
        }
    }

    /// Convert the formula in the cell the defined name `name` points to.
    ///
    /// Returns the converted functions with every recursively discovered
    /// dependency before its dependent; the function for `name` is last.
    pub fn convert(&mut self, name: &str) -> ConvertResult<Vec<Function>> {
        if name.trim().is_empty() {
            return Err(ConvertError::InvalidArgument(
                "formula name can't be empty".into(),
            ));
        }
        self.symbols.clear();
        let address = self
            .source
            .address_of(name)
            .ok_or_else(|| ConvertError::UnresolvedName(name.to_string()))?;
        let formula = self.source.formula_text(&address).ok_or_else(|| {
            ConvertError::UnresolvedName(format!("no formula in cell {address} (named '{name}')"))
        })?;
        log::debug!("converting '{name}' at {address}: {formula}");
        self.convert_formula(name, &formula)
    }

    /// Convert several independent names in input order.
    ///
    /// The unresolved-symbol table is reset between names; the local-name
    /// counter is not, so locals stay unique across the whole run. Exact
    /// structural duplicates are removed, keeping the first occurrence.
    pub fn convert_many(&mut self, names: &[&str]) -> ConvertResult<Vec<Function>> {
        let mut all: Vec<Function> = Vec::new();
        for name in names {
            all.extend(self.convert(name)?);
        }
        let mut unique: Vec<Function> = Vec::with_capacity(all.len());
        for function in all {
            if !unique.contains(&function) {
                unique.push(function);
            }
        }
        Ok(unique)
    }

    fn convert_formula(&mut self, name: &str, formula: &str) -> ConvertResult<Vec<Function>> {
        let tokens = self.source.tokenize(formula)?;
        let mut frame = Frame::default();
        for token in tokens {
            self.process(token, &mut frame)?;
        }
        self.finish(name, frame)
    }

    fn process(&mut self, token: Token, frame: &mut Frame) -> ConvertResult<()> {
        match token {
            Token::Literal { value, cell_type } => {
                self.bind_local(Expr::Literal(Literal::new(value, cell_type)), frame);
            }
            Token::BinaryOp(op) => {
                // RPN: the top of the stack is the second operand
                let (Some(rhs), Some(lhs)) = (frame.stack.pop(), frame.stack.pop()) else {
                    return Err(ConvertError::MalformedExpression(format!(
                        "binary operator '{}' needs two operands",
                        op.symbol()
                    )));
                };
                self.bind_local(
                    Expr::BinOp(BinOp {
                        op,
                        lhs: Box::new(lhs),
                        rhs: Box::new(rhs),
                    }),
                    frame,
                );
            }
            Token::Call { name } => {
                let builtin = registry()
                    .get(&name)
                    .ok_or_else(|| ConvertError::UnknownBuiltin(name.clone()))?;
                let mut args = Vec::with_capacity(builtin.arity());
                for _ in 0..builtin.arity() {
                    match frame.stack.pop() {
                        Some(arg) => args.push(arg),
                        None => {
                            return Err(ConvertError::MalformedExpression(format!(
                                "{} expects {} arguments",
                                builtin.name,
                                builtin.arity()
                            )))
                        }
                    }
                }
                // popped in reverse syntactic order
                args.reverse();
                self.bind_local(
                    Expr::Call(Call {
                        name: builtin.name.to_string(),
                        args,
                        return_type: builtin.return_type,
                    }),
                    frame,
                );
            }
            Token::CellRef {
                address,
                cell_type,
                is_formula: false,
            } => {
                // Pure references are candidate parameters, not statements.
                self.symbols.record(&address, cell_type);
                frame.stack.push(Expr::Var(Var::new(address, cell_type)));
            }
            Token::CellRef {
                address,
                is_formula: true,
                ..
            } => {
                self.reference_formula_cell(&address, frame)?;
            }
        }
        Ok(())
    }

    /// Recursively convert the formula stored at `address` into a function
    /// (plus its own dependencies), then bind a call to it.
    ///
    /// The call's arguments are rebuilt positionally from the generated
    /// function's declared parameter list; the algorithm assumes those
    /// parameters resolve in the calling function's scope, which holds
    /// because unresolved references accumulate across the whole recursive
    /// conversion.
    fn reference_formula_cell(&mut self, address: &str, frame: &mut Frame) -> ConvertResult<()> {
        let name = self
            .source
            .name_bound_to(address)
            .unwrap_or_else(|| address.to_string());
        let formula = self.source.formula_text(address).ok_or_else(|| {
            ConvertError::UnresolvedName(format!("no formula in referenced cell {address}"))
        })?;
        log::debug!("recursing into formula cell {address} as '{name}'");
        let functions = self.convert_formula(&name, &formula)?;

        // The reference's target is the last function converted; its own
        // dependencies precede it.
        let callee = functions.last().cloned().ok_or_else(|| {
            ConvertError::MalformedExpression(format!(
                "referenced cell {address} produced no function"
            ))
        })?;
        frame.discovered.extend(functions);

        let args: Vec<Expr> = callee
            .params
            .iter()
            .map(|p| Expr::Var(Var::new(p.name.clone(), p.cell_type)))
            .collect();
        let result = Var::new(address, callee.return_type);
        frame.body.push(Expr::Binding(Binding::new(
            result.clone(),
            Expr::Call(Call {
                name: callee.name.clone(),
                args,
                return_type: callee.return_type,
            }),
        )));
        frame.stack.push(Expr::Var(result));
        Ok(())
    }

    /// Close the frame: assemble the body sequence, infer parameters from
    /// the symbol table and order the result list as dependencies first,
    /// the finished function last.
    fn finish(&mut self, name: &str, frame: Frame) -> ConvertResult<Vec<Function>> {
        let Frame {
            mut stack,
            mut body,
            discovered,
        } = frame;

        // A pure reference left on top of the stack never became a
        // statement; keep it as the sequence's terminal value.
        if let Some(top) = stack.pop() {
            let already_last = matches!(
                (&top, body.last()),
                (Expr::Var(v), Some(Expr::Binding(b))) if *v == b.var
            );
            if !already_last {
                body.push(top);
            }
        }
        if !stack.is_empty() {
            log::trace!("'{name}' left {} unconsumed operands", stack.len());
        }
        if body.is_empty() {
            return Err(ConvertError::MalformedExpression(format!(
                "formula '{name}' produced no expressions"
            )));
        }

        let body = sequence(body)?;
        let return_type = body.cell_type();
        let function = Function::new(name, self.symbols.params(), body, return_type);
        log::debug!(
            "finished '{}' with {} parameter(s), {} dependency function(s)",
            function.name,
            function.params.len(),
            discovered.len()
        );

        let mut result = discovered;
        result.push(function);
        Ok(result)
    }

    /// Bind `expr` to a fresh synthetic local, append the binding to the
    /// frame body and push the bound variable.
    fn bind_local(&mut self, expr: Expr, frame: &mut Frame) {
        let var = Var::new(self.fresh_local(), expr.cell_type());
        frame.body.push(Expr::Binding(Binding::new(var.clone(), expr)));
        frame.stack.push(Expr::Var(var));
    }

    fn fresh_local(&mut self) -> String {
        let n = self.next_local;
        self.next_local += 1;
        format!("_{n}")
    }
}
