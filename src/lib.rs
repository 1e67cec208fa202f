pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;

pub use ast::{Constants, Document, Number, Value};
pub use config::QuillConfig;
pub use error::{ErrorKind, QuillError};
pub use parser::{ConstantPolicy, Parser};
