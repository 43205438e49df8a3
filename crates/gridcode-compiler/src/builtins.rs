//! Built-in spreadsheet functions
//!
//! A closed, statically enumerable table of the intrinsics the converter
//! understands. Lookup is case-insensitive; there is no dynamic
//! registration. Built-ins carry only a signature - they have no body.

use ahash::AHashMap;
use gridcode_ir::{CellType, Param};
use std::sync::OnceLock;

/// Definition of one built-in function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builtin {
    /// Function name (uppercase, as written in formulas)
    pub name: &'static str,
    /// Parameter signature, in declaration order
    pub params: &'static [(&'static str, CellType)],
    /// Return type
    pub return_type: CellType,
}

impl Builtin {
    /// Number of arguments the function takes
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The signature as a parameter list
    pub fn param_list(&self) -> Vec<Param> {
        self.params
            .iter()
            .map(|(name, cell_type)| Param::new(*name, *cell_type))
            .collect()
    }
}

const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "SQRT",
        params: &[("X", CellType::Numeric)],
        return_type: CellType::Numeric,
    },
    Builtin {
        name: "MOD",
        params: &[("X", CellType::Numeric), ("DIVISOR", CellType::Numeric)],
        return_type: CellType::Numeric,
    },
    // IF arrives from the tokenizer as an ordinary function call; its value
    // arms keep the placeholder formula type.
    Builtin {
        name: "IF",
        params: &[
            ("TEST", CellType::Boolean),
            ("THEN", CellType::Formula),
            ("ELSE", CellType::Formula),
        ],
        return_type: CellType::Formula,
    },
];

/// Registry of built-in functions.
pub struct BuiltinRegistry {
    functions: AHashMap<String, &'static Builtin>,
}

impl BuiltinRegistry {
    fn new() -> Self {
        let mut functions = AHashMap::with_capacity(BUILTINS.len());
        for builtin in BUILTINS {
            functions.insert(builtin.name.to_uppercase(), builtin);
        }
        Self { functions }
    }

    /// Look up a function by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&'static Builtin> {
        self.functions.get(&name.to_uppercase()).copied()
    }

    /// Whether `name` names a built-in function
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Global built-in registry (lazily initialized)
static REGISTRY: OnceLock<BuiltinRegistry> = OnceLock::new();

pub fn registry() -> &'static BuiltinRegistry {
    REGISTRY.get_or_init(BuiltinRegistry::new)
}
