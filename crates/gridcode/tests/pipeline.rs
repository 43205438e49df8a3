//! End-to-end pipeline: tokens -> converter -> IR -> JavaScript.

use gridcode::prelude::*;
use gridcode::BinaryOp;
use pretty_assertions::assert_eq;
use std::collections::HashMap;

/// Minimal in-memory workbook: three named formulas over the value cells
/// B3 and C3, with `cube` (E3) calling into `square` (D3).
#[derive(Default)]
struct Workbook {
    names: HashMap<&'static str, &'static str>,
    formulas: HashMap<&'static str, (&'static str, Vec<Token>)>,
    values: HashMap<&'static str, &'static str>,
}

impl Workbook {
    fn fixture() -> Self {
        let mut wb = Self::default();
        wb.values.insert("B3", "3");
        wb.values.insert("C3", "4");
        wb.values.insert("D4", "12");

        wb.names.insert("mult", "A1");
        wb.formulas.insert(
            "A1",
            (
                "B3*C3",
                vec![
                    Token::cell_ref("B3", CellType::Numeric),
                    Token::cell_ref("C3", CellType::Numeric),
                    Token::BinaryOp(BinaryOp::Mult),
                ],
            ),
        );

        wb.names.insert("square", "D3");
        wb.formulas.insert(
            "D3",
            (
                "B3*B3",
                vec![
                    Token::cell_ref("B3", CellType::Numeric),
                    Token::cell_ref("B3", CellType::Numeric),
                    Token::BinaryOp(BinaryOp::Mult),
                ],
            ),
        );

        wb.names.insert("cube", "E3");
        wb.formulas.insert(
            "E3",
            (
                "D3*B3",
                vec![
                    Token::formula_ref("D3"),
                    Token::cell_ref("B3", CellType::Numeric),
                    Token::BinaryOp(BinaryOp::Mult),
                ],
            ),
        );

        wb
    }
}

impl TokenSource for Workbook {
    fn address_of(&self, name: &str) -> Option<String> {
        self.names.get(name).map(|a| a.to_string())
    }

    fn formula_text(&self, address: &str) -> Option<String> {
        self.formulas.get(address).map(|(text, _)| text.to_string())
    }

    fn tokenize(&self, formula: &str) -> ConvertResult<Vec<Token>> {
        self.formulas
            .values()
            .find(|entry| entry.0 == formula)
            .map(|entry| entry.1.clone())
            .ok_or_else(|| {
                ConvertError::MalformedExpression(format!("no tokens for formula '{formula}'"))
            })
    }

    fn name_bound_to(&self, address: &str) -> Option<String> {
        self.names
            .iter()
            .find(|&(_, &a)| a == address)
            .map(|(name, _)| name.to_string())
    }
}

impl CellValues for Workbook {
    fn raw_value(&self, address: &str) -> Option<String> {
        self.values.get(address).map(|v| v.to_string())
    }
}

#[test]
fn test_convert_and_emit_javascript() {
    let workbook = Workbook::fixture();
    let mut converter = FormulaConverter::new(&workbook);

    let functions = converter.convert("cube").unwrap();
    let formatter = formatter_for("js").unwrap();
    let output = formatter.format_all(&functions, "\n\n");

    let expected = "function square(B3) {\n\
                    var _0 = B3 * B3;\n\
                    return _0;\n\
                    }\n\
                    \n\
                    function cube(B3) {\n\
                    var D3 = square(B3);\n\
                    var _1 = D3 * B3;\n\
                    return _1;\n\
                    }";
    assert_eq!(output, expected);
}

#[test]
fn test_convert_many_and_emit() {
    let workbook = Workbook::fixture();
    let mut converter = FormulaConverter::new(&workbook);

    let functions = converter.convert_many(&["square", "mult"]).unwrap();
    let names: Vec<&str> = functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["square", "mult"]);

    let output = JsFormatter::new().format_all(&functions, "\n\n");
    assert!(output.starts_with("function square(B3)"));
    assert!(output.contains("function mult(B3,C3)"));
}

#[test]
fn test_generated_test_functions_emit_like_everything_else() {
    let workbook = Workbook::fixture();
    let mut converter = FormulaConverter::new(&workbook);

    let functions = converter.convert("mult").unwrap();
    let mult = functions.last().unwrap();

    let generator = TestGenerator::new(&workbook);
    let test = generator
        .test_function(mult, &TestCase::new(["B3", "C3"], "D4"))
        .unwrap();

    let output = JsFormatter::new().format(&test);
    let expected = "function test_mult_D4() {\n\
                    var result = mult(3,4);\n\
                    return result === 12;\n\
                    }";
    assert_eq!(output, expected);
}
