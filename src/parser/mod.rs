// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Constants, Document, Value};
use crate::error::{QuillError, Result};
use crate::lexer::{Lexer, Token};

mod document;
mod line;
mod reference;
mod value;

/// What happens to the constant table when `parse` is called again on the
/// same parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConstantPolicy {
    /// Constants from earlier parses stay visible to later ones.
    #[default]
    Accumulate,
    /// The table is cleared at the start of every parse.
    ResetPerParse,
}

/// Line-oriented Quill parser.
///
/// ```
/// use quill_cfg::parser::Parser;
/// use quill_cfg::Value;
///
/// let mut parser = Parser::new();
/// let doc = parser.parse("name := 'TestName'\noutput : #[name]").unwrap();
/// assert_eq!(doc.get("output"), Some(&Value::from("TestName")));
/// assert_eq!(parser.constant("name"), Some(&Value::from("TestName")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    constants: Constants,
    policy: ConstantPolicy,
}

impl Parser {
    /// A parser that keeps constants across `parse` calls.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ConstantPolicy) -> Self {
        Self { constants: Constants::new(), policy }
    }

    pub fn policy(&self) -> ConstantPolicy {
        self.policy
    }

    /// Parse `text` into a fresh document.
    ///
    /// Stops at the first bad line; nothing is returned for the lines before
    /// it. Constants declared before the bad line stay in the table.
    pub fn parse(&mut self, text: &str) -> Result<Document> {
        document::parse_document(self, text)
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn constant(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }

    pub fn reset_constants(&mut self) {
        self.constants.clear();
    }

    pub fn into_constants(self) -> Constants {
        self.constants
    }
}

/// Parse a single literal fragment such as `'text'`, `-7`, `3.14` or `{ 1 . 2 }`.
pub fn parse_value(text: &str) -> Result<Value> {
    value::parse_literal(text.trim()).map_err(|e| e.at_line(1))
}
