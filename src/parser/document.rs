use super::*;
use super::line::{LineKind, classify, split_declaration, split_entry};
use super::reference::{reference_name, resolve_reference};
use crate::lexer::logical_lines;

pub(super) fn parse_document(parser: &mut Parser, text: &str) -> Result<Document> {
    if parser.policy == ConstantPolicy::ResetPerParse {
        parser.constants.clear();
    }

    let mut doc = Document::new();

    for source in logical_lines(text) {
        let trimmed = source.text.trim();
        match classify(trimmed) {
            None => continue,
            Some(LineKind::Declaration) => {
                parse_declaration(parser, trimmed, source.number)?;
            }
            Some(LineKind::Entry) => {
                parse_entry(parser, &mut doc, trimmed, source.number)?;
            }
        }
    }

    tracing::debug!(
        entries = doc.len(),
        constants = parser.constants.len(),
        "parsed document"
    );
    Ok(doc)
}

fn parse_declaration(parser: &mut Parser, text: &str, line: usize) -> Result<()> {
    let (name, value_text) = split_declaration(text, line)?;
    let value = value::parse_literal(value_text).map_err(|e| e.at_line(line))?;

    if parser.constants.contains_key(&name) {
        tracing::debug!(%name, line, "constant redeclared");
    }
    parser.constants.insert(name, value);
    Ok(())
}

fn parse_entry(parser: &Parser, doc: &mut Document, text: &str, line: usize) -> Result<()> {
    let (key, value_text) = split_entry(text, line)?;

    let value = match reference_name(value_text) {
        Some(name) => resolve_reference(parser, name, line)?,
        None => value::parse_literal(value_text).map_err(|e| e.at_line(line))?,
    };

    doc.insert(key, value);
    Ok(())
}
