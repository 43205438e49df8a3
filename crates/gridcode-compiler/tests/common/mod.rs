//! Common fixture for converter tests: an in-memory worksheet.
//!
//! Stands in for the workbook and formula-parsing layers: formulas are
//! stored pre-tokenized per cell, alongside defined names and raw values.

use gridcode_compiler::{CellValues, ConvertError, ConvertResult, Token, TokenSource};
use gridcode_ir::{BinaryOp, CellType};
use std::collections::HashMap;

#[derive(Default)]
pub struct TestSheet {
    /// defined name -> cell address
    names: HashMap<String, String>,
    /// cell address -> formula text
    formulas: HashMap<String, String>,
    /// formula text -> RPN token sequence
    tokens: HashMap<String, Vec<Token>>,
    /// cell address -> raw value
    values: HashMap<String, String>,
}

impl TestSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define_name(&mut self, name: &str, address: &str) {
        self.names.insert(name.to_string(), address.to_string());
    }

    pub fn set_formula(&mut self, address: &str, text: &str, tokens: Vec<Token>) {
        self.formulas.insert(address.to_string(), text.to_string());
        self.tokens.insert(text.to_string(), tokens);
    }

    pub fn set_value(&mut self, address: &str, value: &str) {
        self.values.insert(address.to_string(), value.to_string());
    }

    /// The worksheet the converter scenarios share. `B3` and `C3` hold
    /// numbers; the formula cells reference them (and each other):
    ///
    /// - `mult` (A1): `B3*C3`
    /// - `times2` (A2): `B3*2`
    /// - `square` (D3): `B3*B3`
    /// - `cube` (E3): `D3*B3` - multiplies the square by the base
    /// - `cube_sqrt` (F3): `SQRT(E3)`
    /// - `isEven` (A3): `IF(MOD(B3,2)=0,TRUE,FALSE)`
    /// - `bad` (A4): a trailing `*` with one operand
    /// - `mystery` (A6): `G3*2`, where G3 holds an unnamed `B3*B3`
    /// - `half` (A7): plain `B3`
    /// - `left` (A8) and `right` (A9): both reference the unnamed
    ///   pass-through cell H3 (`B3`)
    pub fn fixture() -> Self {
        let mut sheet = Self::new();
        sheet.set_value("B3", "3");
        sheet.set_value("C3", "4");

        sheet.define_name("mult", "A1");
        sheet.set_formula(
            "A1",
            "B3*C3",
            vec![
                Token::cell_ref("B3", CellType::Numeric),
                Token::cell_ref("C3", CellType::Numeric),
                Token::BinaryOp(BinaryOp::Mult),
            ],
        );

        sheet.define_name("times2", "A2");
        sheet.set_formula(
            "A2",
            "B3*2",
            vec![
                Token::cell_ref("B3", CellType::Numeric),
                Token::literal("2", CellType::Numeric),
                Token::BinaryOp(BinaryOp::Mult),
            ],
        );

        sheet.define_name("square", "D3");
        sheet.set_formula(
            "D3",
            "B3*B3",
            vec![
                Token::cell_ref("B3", CellType::Numeric),
                Token::cell_ref("B3", CellType::Numeric),
                Token::BinaryOp(BinaryOp::Mult),
            ],
        );

        sheet.define_name("cube", "E3");
        sheet.set_formula(
            "E3",
            "D3*B3",
            vec![
                Token::formula_ref("D3"),
                Token::cell_ref("B3", CellType::Numeric),
                Token::BinaryOp(BinaryOp::Mult),
            ],
        );

        sheet.define_name("cube_sqrt", "F3");
        sheet.set_formula(
            "F3",
            "SQRT(E3)",
            vec![Token::formula_ref("E3"), Token::call("SQRT")],
        );

        sheet.define_name("isEven", "A3");
        sheet.set_formula(
            "A3",
            "IF(MOD(B3,2)=0,TRUE,FALSE)",
            vec![
                Token::cell_ref("B3", CellType::Numeric),
                Token::literal("2", CellType::Numeric),
                Token::call("MOD"),
                Token::literal("0", CellType::Numeric),
                Token::BinaryOp(BinaryOp::Eql),
                Token::literal("TRUE", CellType::Boolean),
                Token::literal("FALSE", CellType::Boolean),
                Token::call("IF"),
            ],
        );

        sheet.define_name("bad", "A4");
        sheet.set_formula(
            "A4",
            "B3*",
            vec![
                Token::cell_ref("B3", CellType::Numeric),
                Token::BinaryOp(BinaryOp::Mult),
            ],
        );

        sheet.define_name("nonsense", "A5");
        sheet.set_formula(
            "A5",
            "FOO(B3)",
            vec![Token::cell_ref("B3", CellType::Numeric), Token::call("FOO")],
        );

        // G3 holds a formula but no defined name points at it
        sheet.set_formula(
            "G3",
            "B3*B3 (anonymous)",
            vec![
                Token::cell_ref("B3", CellType::Numeric),
                Token::cell_ref("B3", CellType::Numeric),
                Token::BinaryOp(BinaryOp::Mult),
            ],
        );
        sheet.define_name("mystery", "A6");
        sheet.set_formula(
            "A6",
            "G3*2",
            vec![
                Token::formula_ref("G3"),
                Token::literal("2", CellType::Numeric),
                Token::BinaryOp(BinaryOp::Mult),
            ],
        );

        sheet.define_name("half", "A7");
        sheet.set_formula(
            "A7",
            "B3",
            vec![Token::cell_ref("B3", CellType::Numeric)],
        );

        // H3 is an unnamed pass-through formula shared by `left` and `right`
        sheet.set_formula("H3", "B3 (pass-through)", vec![Token::cell_ref("B3", CellType::Numeric)]);
        sheet.define_name("left", "A8");
        sheet.set_formula(
            "A8",
            "H3*2",
            vec![
                Token::formula_ref("H3"),
                Token::literal("2", CellType::Numeric),
                Token::BinaryOp(BinaryOp::Mult),
            ],
        );
        sheet.define_name("right", "A9");
        sheet.set_formula(
            "A9",
            "H3*3",
            vec![
                Token::formula_ref("H3"),
                Token::literal("3", CellType::Numeric),
                Token::BinaryOp(BinaryOp::Mult),
            ],
        );

        sheet
    }
}

impl TokenSource for TestSheet {
    fn address_of(&self, name: &str) -> Option<String> {
        self.names.get(name).cloned()
    }

    fn formula_text(&self, address: &str) -> Option<String> {
        self.formulas.get(address).cloned()
    }

    fn tokenize(&self, formula: &str) -> ConvertResult<Vec<Token>> {
        self.tokens.get(formula).cloned().ok_or_else(|| {
            ConvertError::MalformedExpression(format!("no tokens for formula '{formula}'"))
        })
    }

    fn name_bound_to(&self, address: &str) -> Option<String> {
        self.names
            .iter()
            .find(|(_, a)| a.as_str() == address)
            .map(|(name, _)| name.clone())
    }
}

impl CellValues for TestSheet {
    fn raw_value(&self, address: &str) -> Option<String> {
        self.values.get(address).cloned()
    }
}
