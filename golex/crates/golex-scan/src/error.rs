//! Scan errors.
//!
//! Every error is fatal to the scan in progress: the scanner stops at the
//! first one and reports it to the caller.

use thiserror::Error;

use crate::position::Position;

/// Error type for scanning operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A character outside every dispatch class
    #[error("unknown character '{ch}' at offset {offset} ({line}:{col})")]
    UnknownCharacter {
        ch: char,
        offset: usize,
        line: u32,
        col: u32,
    },

    /// End of input inside a string or rune literal
    #[error("unterminated literal starting with {delimiter} at {}", .pos.line_col())]
    UnterminatedLiteral { delimiter: char, pos: Position },

    /// End of input inside a `/* */` comment
    #[error("unterminated comment starting at {}", .pos.line_col())]
    UnterminatedComment { pos: Position },

    /// A numeric literal that native parsing rejects
    #[error("malformed number literal '{literal}' at {}", .pos.line_col())]
    MalformedNumber { literal: String, pos: Position },
}

impl ScanError {
    /// Builds an [`UnknownCharacter`](ScanError::UnknownCharacter) error at `pos`.
    pub fn unknown_character(ch: char, pos: Position) -> Self {
        ScanError::UnknownCharacter {
            ch,
            offset: pos.offset,
            line: pos.line,
            col: pos.col,
        }
    }

    /// Character offset at which the failing lexeme starts.
    pub fn offset(&self) -> usize {
        match self {
            ScanError::UnknownCharacter { offset, .. } => *offset,
            ScanError::UnterminatedLiteral { pos, .. }
            | ScanError::UnterminatedComment { pos }
            | ScanError::MalformedNumber { pos, .. } => pos.offset,
        }
    }
}

/// Result type alias for scanning operations
pub type Result<T> = std::result::Result<T, ScanError>;
