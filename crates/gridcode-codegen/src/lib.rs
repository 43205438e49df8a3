//! # gridcode-codegen
//!
//! Code-generation backends for the gridcode IR.
//!
//! A backend implements [`FunctionFormatter`]: it walks converted
//! [`Function`] values and emits source text for one target language.
//! Backends are looked up through the static [`formatter_for`] registry;
//! the conversion engine never depends on a concrete backend.

pub mod js;

pub use js::JsFormatter;

use gridcode_ir::Function;

/// Serializes IR functions into source text for one target language.
pub trait FunctionFormatter {
    /// Emit one function.
    fn format(&self, function: &Function) -> String;

    /// Emit several functions joined by `delimiter`, preserving their
    /// conversion order.
    fn format_all(&self, functions: &[Function], delimiter: &str) -> String {
        functions
            .iter()
            .map(|f| self.format(f))
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

/// Look up a backend by language tag.
pub fn formatter_for(language: &str) -> Option<Box<dyn FunctionFormatter>> {
    match language.to_ascii_lowercase().as_str() {
        "js" | "javascript" => Some(Box::new(JsFormatter::new())),
        _ => None,
    }
}
