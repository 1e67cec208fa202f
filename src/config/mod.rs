// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::ast::{Constants, Document, Value};
use crate::error::{QuillError, Result};
use crate::parser::Parser;

mod access;
mod conversion;

/// A parsed Quill file: its document, its constants, and typed lookups over them.
#[derive(Debug, Clone)]
pub struct QuillConfig {
    document: Document,
    constants: Constants,
}

impl QuillConfig {
    /// Load a Quill config file.
    ///
    /// A leading `~/` is expanded to the current user's home directory.
    ///
    /// # Example
    /// ```ignore
    /// let config = QuillConfig::from_file("~/.config/app.quill")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = expand_home(path.as_ref());
        tracing::debug!(path = %path.display(), "loading config");

        let content = fs::read_to_string(&path).map_err(|source| QuillError::FileError {
            path: path.clone(),
            source,
        })?;

        Self::from_str(&content)
    }

    /// Parse a Quill config from a string (no file I/O)
    pub fn from_str(content: &str) -> Result<Self> {
        let mut parser = Parser::new();
        let document = parser.parse(content)?;

        Ok(Self {
            document,
            constants: parser.into_constants(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn constant(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }

    /// Entries with the constants merged on top, as the `quill` command prints them.
    pub fn merged(&self) -> Document {
        self.document.merged_with(&self.constants)
    }
}

impl FromStr for QuillConfig {
    type Err = QuillError;

    fn from_str(content: &str) -> Result<Self> {
        QuillConfig::from_str(content)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
