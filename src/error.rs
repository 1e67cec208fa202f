// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Quill parsing and config access.
///
/// The first four variants are the only ones `Parser::parse` produces. Each
/// carries the 1-based line number of the offending line in the original
/// source, comment blocks included.
#[derive(Debug, Error)]
pub enum QuillError {
    /// A `:=` line that is not `<identifier> := <value>`.
    #[error("[QUILL] Malformed declaration at line {line}: '{text}' Hint: expected `name := value`")]
    MalformedDeclaration { text: String, line: usize },

    /// A `:` line that is not `<identifier> : <value>`.
    #[error("[QUILL] Malformed entry at line {line}: '{text}' Hint: expected `key : value`")]
    MalformedEntry { text: String, line: usize },

    #[error("[QUILL] Undefined constant '{name}' at line {line} Hint: declare it with `{name} := ...` before using #[{name}]")]
    UndefinedConstant { name: String, line: usize },

    /// A value fragment that is neither a string, a number nor an array.
    #[error("[QUILL] Invalid literal '{fragment}' at line {line}")]
    InvalidLiteral { fragment: String, line: usize },

    #[error("[QUILL] Type Error: {message}")]
    TypeError { message: String },

    #[error("[QUILL] No value at '{path}'")]
    NotFound { path: String },

    #[error("[QUILL] File Error '{}': {source}", .path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[QUILL] JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fieldless tag of a [`QuillError`], for branching without matching fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedDeclaration,
    MalformedEntry,
    UndefinedConstant,
    InvalidLiteral,
    TypeError,
    NotFound,
    FileError,
    Json,
}

impl QuillError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuillError::MalformedDeclaration { .. } => ErrorKind::MalformedDeclaration,
            QuillError::MalformedEntry { .. } => ErrorKind::MalformedEntry,
            QuillError::UndefinedConstant { .. } => ErrorKind::UndefinedConstant,
            QuillError::InvalidLiteral { .. } => ErrorKind::InvalidLiteral,
            QuillError::TypeError { .. } => ErrorKind::TypeError,
            QuillError::NotFound { .. } => ErrorKind::NotFound,
            QuillError::FileError { .. } => ErrorKind::FileError,
            QuillError::Json(_) => ErrorKind::Json,
        }
    }

    /// Source line of a parse error.
    pub fn line(&self) -> Option<usize> {
        match self {
            QuillError::MalformedDeclaration { line, .. }
            | QuillError::MalformedEntry { line, .. }
            | QuillError::UndefinedConstant { line, .. }
            | QuillError::InvalidLiteral { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Moves a parse error to `line`. Literal parsing runs without knowing
    /// which source line it is looking at.
    pub(crate) fn at_line(mut self, at: usize) -> Self {
        match &mut self {
            QuillError::MalformedDeclaration { line, .. }
            | QuillError::MalformedEntry { line, .. }
            | QuillError::UndefinedConstant { line, .. }
            | QuillError::InvalidLiteral { line, .. } => *line = at,
            _ => {}
        }
        self
    }
}

pub type Result<T> = std::result::Result<T, QuillError>;
