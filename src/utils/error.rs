//! Error handling for gengarc

use crate::utils::Position;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Compiler error
///
/// Every variant is fatal: the pipeline stops at the first error and the
/// message surfaces at the CLI boundary unchanged.
#[derive(Error, Debug, Clone)]
pub enum Error {
    // ==================== Lexer Errors ====================

    #[error("unexpected character at {line}:{col} (offset {pos}) near {preview:?}")]
    Lex {
        pos: u32,
        line: u32,
        col: u32,
        preview: String,
    },

    // ==================== Parser Errors ====================

    #[error("unexpected token at {position}: expected {expected}, got {actual}")]
    UnexpectedToken {
        expected: String,
        actual: String,
        position: Position,
    },

    #[error("{message} at {position}")]
    Structural { message: String, position: Position },

    // ==================== Emitter Errors ====================

    #[error("cannot emit: {message} at {position}")]
    Emission { message: String, position: Position },

    // ==================== CLI Boundary ====================

    #[error("io error: {0}")]
    Io(String),
}
