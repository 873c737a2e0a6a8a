//! Source positions.
//!
//! A [`Position`] is a snapshot of the scanner cursor taken where a lexeme
//! begins. Offsets count characters, not bytes, so a position stays
//! meaningful for consumers that index the source by `chars()`.

use std::fmt;

/// A point in source text.
///
/// # Examples
///
/// ```
/// use golex_scan::Position;
///
/// let pos = Position::new(12, 2, 5);
/// assert_eq!(pos.to_string(), "12:2:5");
/// assert_eq!(pos.line_col(), "2:5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Characters consumed from the start of the input.
    pub offset: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub col: u32,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        col: 1,
    };

    /// Creates a position from its parts.
    #[inline]
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }

    /// Renders the position as `line:col`.
    pub fn line_col(&self) -> String {
        format!("{}:{}", self.line, self.col)
    }
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}
