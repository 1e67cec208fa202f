// Author: Dustin Pilgrim
// License: MIT

use super::*;

/// Name inside a `#[name]` reference, or `None` if `text` is not a reference.
pub(super) fn reference_name(text: &str) -> Option<&str> {
    text.strip_prefix("#[")
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}

/// Copy of the constant's current value. Redeclaring the constant later does
/// not touch entries that were already bound.
pub(super) fn resolve_reference(parser: &Parser, name: &str, line: usize) -> Result<Value> {
    parser
        .constants
        .get(name)
        .cloned()
        .ok_or_else(|| QuillError::UndefinedConstant {
            name: name.to_string(),
            line,
        })
}
