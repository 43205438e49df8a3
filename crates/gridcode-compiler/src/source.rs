//! Collaborator interfaces to the workbook layer
//!
//! Reading the spreadsheet container, tokenizing formula text and
//! enumerating defined names all live outside this crate; the converter
//! consumes them through these traits.

use crate::error::ConvertResult;
use crate::token::Token;

/// Access to formulas and defined names in a workbook.
pub trait TokenSource {
    /// The address of the cell a defined name refers to.
    fn address_of(&self, name: &str) -> Option<String>;

    /// The formula text stored in the cell at `address`, if that cell holds
    /// a formula.
    fn formula_text(&self, address: &str) -> Option<String>;

    /// Parse formula text into its RPN token sequence.
    fn tokenize(&self, formula: &str) -> ConvertResult<Vec<Token>>;

    /// A defined name bound to exactly the cell at `address`, if one
    /// exists. Used to prefer a readable name over a raw address when
    /// naming a dependency function.
    fn name_bound_to(&self, address: &str) -> Option<String>;
}

/// Raw cell values, for sampling worksheet data into generated test
/// functions.
pub trait CellValues {
    /// The raw displayed value of the cell at `address`.
    fn raw_value(&self, address: &str) -> Option<String>;
}
