//! Worksheet-backed test generation
//!
//! Re-expresses sample data from the worksheet as IR test functions: call a
//! generated function with literals sampled from the input cells, compare
//! the result against the expected cell's value. The produced functions go
//! through the same code-generation backends as everything else.

use crate::error::{ConvertError, ConvertResult};
use crate::source::CellValues;
use gridcode_ir::builder::{bin_op, binding, literal, sequence, var};
use gridcode_ir::{BinaryOp, Call, CellType, Expr, Function};

/// One sampled test case: input cell addresses, positionally matching the
/// target function's parameter list, and the cell holding the expected
/// output.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub inputs: Vec<String>,
    pub expected_cell: String,
}

impl TestCase {
    pub fn new<I, T>(inputs: I, expected_cell: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            expected_cell: expected_cell.into(),
        }
    }
}

/// Generates IR test functions from worksheet sample values.
pub struct TestGenerator<'s, V: CellValues> {
    values: &'s V,
}

impl<'s, V: CellValues> TestGenerator<'s, V> {
    pub fn new(values: &'s V) -> Self {
        Self { values }
    }

    /// Build a parameterless boolean test function named
    /// `test_<target>_<expected cell>`: bind `result` to a call of the
    /// target with the sampled input literals, then compare it against the
    /// expected cell's value.
    pub fn test_function(&self, target: &Function, case: &TestCase) -> ConvertResult<Function> {
        if case.inputs.len() != target.params.len() {
            return Err(ConvertError::InvalidArgument(format!(
                "input cell count {} must match the parameter count {} of '{}'",
                case.inputs.len(),
                target.params.len(),
                target.name
            )));
        }
        let expected = self.cell_value(&case.expected_cell)?;

        // The i-th input cell feeds the i-th parameter.
        let args = target
            .params
            .iter()
            .zip(&case.inputs)
            .map(|(param, cell)| Ok(literal(self.cell_value(cell)?, param.cell_type)))
            .collect::<ConvertResult<Vec<Expr>>>()?;

        let result = var("result", target.return_type);
        let call = binding(
            result.clone(),
            Expr::Call(Call {
                name: target.name.clone(),
                args,
                return_type: target.return_type,
            }),
        );
        let comparison = bin_op(
            Expr::Var(result),
            BinaryOp::Eql,
            literal(expected, target.return_type),
        );

        let body = sequence(vec![call, comparison])?;
        Ok(Function::new(
            format!("test_{}_{}", target.name, case.expected_cell),
            vec![],
            body,
            CellType::Boolean,
        ))
    }

    /// Build one test function per case.
    pub fn test_functions(
        &self,
        target: &Function,
        cases: &[TestCase],
    ) -> ConvertResult<Vec<Function>> {
        cases
            .iter()
            .map(|case| self.test_function(target, case))
            .collect()
    }

    fn cell_value(&self, address: &str) -> ConvertResult<String> {
        self.values
            .raw_value(address)
            .ok_or_else(|| ConvertError::UnresolvedName(format!("no value in cell {address}")))
    }
}
