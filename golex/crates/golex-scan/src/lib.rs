//! golex-scan - Lexical Scanner for Go-like Source Text
//!
//! This crate turns source text into an ordered sequence of typed tokens,
//! each carrying its value and the position where it starts. It is the
//! first stage for a parser, a formatter or a diagnostic printer: tokens
//! come out in source order, nothing is dropped (comments included), and
//! invalid input stops the scan with an error that says where.
//!
//! # Example Usage
//!
//! ```
//! use golex_scan::{Scanner, TokenKind, TokenValue};
//!
//! let source = "x := 12 + 2.5i // sum";
//!
//! // Scan everything at once
//! let tokens = Scanner::new(source).scan().unwrap();
//! assert_eq!(tokens.len(), 7);
//! assert_eq!(tokens[3].value, TokenValue::Int(12));
//! assert_eq!(tokens[5].value, TokenValue::Imag("2.5i".to_string()));
//! assert_eq!(tokens[6].kind(), TokenKind::Comment);
//!
//! // Or stream tokens one at a time
//! for token in Scanner::new(source) {
//!     let token = token.unwrap();
//!     println!("{} {} {}", token.pos.line_col(), token.kind(), token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, kind and payload definitions
//! - [`scanner`] - The scanner and its extraction routines
//! - [`cursor`] - Character cursor with offset/line/column tracking
//! - [`position`] - Source positions
//! - [`unicode`] - Character classification for dispatch
//! - [`error`] - Scan errors
//!
//! # Token Categories
//!
//! | Kind | Example | Value |
//! |---|---|---|
//! | `KEYWORD` | `func` | the keyword |
//! | `IDENT` | `main` | the text |
//! | `INT` | `0x1A` | parsed `u64` (26) |
//! | `FLOAT` | `3.14` | parsed `f64` |
//! | `IMAG` | `2i` | raw text `2i` |
//! | `STRING` | `"hi"`, `` `raw` `` | text with both delimiters |
//! | `BYTE` | `'a'` | text with both delimiters |
//! | `OP_SEP` | `<<=` | the operator |
//! | `COMMENT` | `// note` | the comment text |
//!
//! Numeric literals never include a sign: `-1` scans as `-` followed by
//! `1`.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod position;
pub mod scanner;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{Result, ScanError};
pub use position::Position;
pub use scanner::Scanner;
pub use token::{
    is_exported, is_identifier, is_keyword, lookup, Keyword, Punct, Token, TokenKind, TokenValue,
};
pub use unicode::{classify, CharClass};

/// Scans `source` into tokens.
///
/// Shorthand for `Scanner::new(source).scan()`.
pub fn scan(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).scan()
}
