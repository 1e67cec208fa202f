// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use crate::ast::{Constants, Document};
use crate::error::{QuillError, Result};
use crate::parser::Parser;

/// Convert a document to a JSON object, keys in insertion order.
///
/// Rendering goes through the `Serialize` impls on the AST:
/// - Strings → JSON strings
/// - Integers stay integers, floats stay floats (`2.0` renders as `2.0`)
/// - Arrays → JSON arrays, recursively
pub fn document_to_json(doc: &Document) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(doc)?)
}

/// Render a document as JSON text, indented when `pretty` is set.
///
/// # Examples
/// ```
/// use quill_cfg::{export, parser::Parser};
///
/// let mut parser = Parser::new();
/// let doc = parser.parse("port : 8080\nratio : 0.5").unwrap();
/// assert_eq!(export::to_json_string(&doc, false).unwrap(), r#"{"port":8080,"ratio":0.5}"#);
/// ```
pub fn to_json_string(doc: &Document, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    Ok(json)
}

/// Render the document with the constant table merged on top of it.
pub fn to_json_with_constants(doc: &Document, constants: &Constants, pretty: bool) -> Result<String> {
    to_json_string(&doc.merged_with(constants), pretty)
}

/// Read, parse and export a Quill file in one call.
///
/// With `merge_constants` the declared constants are added to the output next
/// to the entries, which is what the `quill` command does by default.
///
/// # Errors
/// Returns error if the file can't be read or contains invalid Quill syntax.
pub fn export_file<P: AsRef<Path>>(path: P, merge_constants: bool, pretty: bool) -> Result<String> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| QuillError::FileError {
        path: path.to_path_buf(),
        source,
    })?;

    let mut parser = Parser::new();
    let doc = parser.parse(&input)?;

    if merge_constants {
        to_json_with_constants(&doc, parser.constants(), pretty)
    } else {
        to_json_string(&doc, pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_export_preserves_integer_float_distinction() {
        let mut parser = Parser::new();
        let doc = parser.parse("a : 2\nb : 2.0\nc : -7").unwrap();

        let json_output = to_json_string(&doc, false).unwrap();
        assert_eq!(json_output, r#"{"a":2,"b":2.0,"c":-7}"#);
    }

    #[test]
    fn test_export_nested_arrays_and_strings() {
        let mut parser = Parser::new();
        let doc = parser
            .parse("grid : { { 1 . 2 } . { 3 } }\nname : 'x \"y\"'")
            .unwrap();

        let v = document_to_json(&doc).unwrap();
        assert_eq!(v["grid"], json!([[1, 2], [3]]));
        assert_eq!(v["name"], "x \"y\"");
    }

    #[test]
    fn test_export_keeps_insertion_order() {
        let mut parser = Parser::new();
        let doc = parser.parse("zeta : 1\nalpha : 2\nmid : 3").unwrap();

        let json_output = to_json_string(&doc, false).unwrap();
        assert_eq!(json_output, r#"{"zeta":1,"alpha":2,"mid":3}"#);
    }

    #[test]
    fn test_document_to_json_shape() {
        let mut parser = Parser::new();
        let doc = parser.parse("a : { 1 . 'two' }\nb : 1.25").unwrap();

        assert_eq!(
            document_to_json(&doc).unwrap(),
            json!({ "a": [1, "two"], "b": 1.25 })
        );
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let mut parser = Parser::new();
        let doc = parser.parse("port : 8080").unwrap();

        let json_output = to_json_string(&doc, true).unwrap();
        assert_eq!(json_output, "{\n  \"port\": 8080\n}");
    }

    #[test]
    fn test_export_with_constants_merges_after_entries() {
        let mut parser = Parser::new();
        let doc = parser
            .parse("name := 'TestName'\noutput : #[name]")
            .unwrap();

        let json_output = to_json_with_constants(&doc, parser.constants(), false).unwrap();
        assert_eq!(json_output, r#"{"output":"TestName","name":"TestName"}"#);
    }

    #[test]
    fn test_export_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "=begin\nheader\n=cut\nlimit := 10\nmax : #[limit]").unwrap();

        let with = export_file(file.path(), true, false).unwrap();
        assert_eq!(with, r#"{"max":10,"limit":10}"#);

        let without = export_file(file.path(), false, false).unwrap();
        assert_eq!(without, r#"{"max":10}"#);
    }

    #[test]
    fn test_export_missing_file() {
        let err = export_file("/definitely/not/here.qcfg", true, true).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::FileError);
    }
}
