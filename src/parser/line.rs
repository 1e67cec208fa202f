use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LineKind {
    Declaration,
    Entry,
}

/// Classify a trimmed line. Blank lines have no kind.
pub(super) fn classify(line: &str) -> Option<LineKind> {
    if line.is_empty() {
        None
    } else if line.contains(":=") {
        Some(LineKind::Declaration)
    } else {
        Some(LineKind::Entry)
    }
}

/// Split `name := value` into the name and the raw value text.
pub(super) fn split_declaration(text: &str, line: usize) -> Result<(String, &str)> {
    split_binding(text, Token::Define).ok_or_else(|| QuillError::MalformedDeclaration {
        text: text.to_string(),
        line,
    })
}

/// Split `key : value` into the key and the raw value text.
pub(super) fn split_entry(text: &str, line: usize) -> Result<(String, &str)> {
    split_binding(text, Token::Colon).ok_or_else(|| QuillError::MalformedEntry {
        text: text.to_string(),
        line,
    })
}

fn split_binding(text: &str, operator: Token) -> Option<(String, &str)> {
    let mut lexer = Lexer::new(text);

    let name = match lexer.next_token() {
        Token::Ident(name) => name,
        other => {
            tracing::trace!(column = lexer.column(), token = ?other, "expected identifier");
            return None;
        }
    };

    let found = lexer.next_token();
    if found != operator {
        tracing::trace!(column = lexer.column(), token = ?found, expected = ?operator, "bad operator");
        return None;
    }

    let value_text = lexer.rest();
    if value_text.is_empty() {
        return None;
    }

    Some((name, value_text))
}
