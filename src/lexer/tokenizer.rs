use super::*;
use super::scanner::{bump, skip_whitespace};

pub(super) fn next_token(lexer: &mut Lexer) -> Token {
    skip_whitespace(lexer);

    match lexer.peek {
        Some(':') => tokenize_colon(lexer),
        Some(c) if c.is_ascii_alphabetic() => tokenize_identifier(lexer),
        Some(ch) => {
            bump(lexer);
            Token::Unexpected(ch)
        }
        None => Token::Eof,
    }
}

fn tokenize_colon(lexer: &mut Lexer) -> Token {
    bump(lexer);
    if lexer.peek == Some('=') {
        bump(lexer);
        Token::Define
    } else {
        Token::Colon
    }
}

/// Identifiers are an ASCII letter followed by ASCII letters or digits.
/// `_` and `-` end the identifier, so `foo_bar` lexes as `foo` then `_`.
fn tokenize_identifier(lexer: &mut Lexer) -> Token {
    let mut ident = String::new();

    while let Some(ch) = lexer.peek {
        if ch.is_ascii_alphanumeric() {
            ident.push(ch);
            bump(lexer);
        } else {
            break;
        }
    }

    Token::Ident(ident)
}

