//! Scanner module.
//!
//! The scanner implementation is split into focused components:
//! - `core` - Scanner struct, dispatch loop and streaming iterator
//! - `identifier` - Identifier and keyword extraction
//! - `number` - Numeric literal extraction
//! - `string` - String and rune literal extraction
//! - `operator` - Operator and punctuation extraction
//! - `comment` - Line and block comment extraction

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;
