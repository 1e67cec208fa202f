// Author: Dustin Pilgrim
// License: MIT

use std::str::Chars;

pub mod comments;
mod scanner;
mod tokenizer;

pub use comments::{SourceLine, logical_lines, strip_comments};

/// Tokens of a declaration or entry head. Everything after the operator is
/// value text and is taken raw with [`Lexer::rest`].
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Ident(String),

    // --- operators ---
    Define, // :=
    Colon,

    // --- anything else, reported by the parser ---
    Unexpected(char),
    Eof,
}

/// Character cursor over a single logical line.
pub struct Lexer<'a> {
    src: &'a str,
    input: Chars<'a>,
    peek: Option<char>,
    offset: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        let mut lexer = Lexer {
            src,
            input: src.chars(),
            peek: None,
            offset: 0,
            column: 1,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    /// 1-based column of the next unread character.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn next_token(&mut self) -> Token {
        tokenizer::next_token(self)
    }

    /// The unread remainder of the line, trimmed. Consumes it.
    pub fn rest(&mut self) -> &'a str {
        let rest = &self.src[self.offset..];
        while scanner::bump(self).is_some() {}
        rest.trim()
    }
}
