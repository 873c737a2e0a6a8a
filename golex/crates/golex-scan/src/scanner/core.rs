//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, the character-class dispatch
//! loop, and the batch and streaming entry points.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{Result, ScanError};
use crate::position::Position;
use crate::token::{Token, TokenValue};
use crate::unicode::{classify, CharClass};

/// Scanner for Go-like source text.
///
/// A scanner is built for one input and consumed by one scan. Use
/// [`scan`](Scanner::scan) to collect every token at once, or iterate the
/// scanner to receive tokens as they are produced.
///
/// # Example
///
/// ```
/// use golex_scan::{Scanner, TokenKind};
///
/// let tokens = Scanner::new("x := 0x1A").scan().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Ident, TokenKind::OpSep, TokenKind::OpSep, TokenKind::Int]
/// );
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Set once an error has been yielded; the scan cannot continue.
    failed: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            failed: false,
        }
    }

    /// Scans the whole input.
    ///
    /// Returns every token in source order, or the first error.
    ///
    /// The scanner never discards a token it has produced, but this
    /// convenience collects into a `Vec` that is only returned on success,
    /// so on error the collected prefix is dropped with it. Callers that
    /// need the tokens preceding an error should iterate the scanner
    /// instead: each token is handed over as soon as it is produced and the
    /// error arrives as the final item.
    ///
    /// # Example
    ///
    /// ```
    /// use golex_scan::{ScanError, Scanner};
    ///
    /// assert!(Scanner::new("a b $").scan().is_err());
    ///
    /// let results: Vec<_> = Scanner::new("a b $").collect();
    /// assert_eq!(results.len(), 3);
    /// assert!(matches!(results[2], Err(ScanError::UnknownCharacter { .. })));
    /// ```
    pub fn scan(mut self) -> Result<Vec<Token>> {
        debug!(bytes = self.cursor.source().len(), "scan started");

        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }

        debug!(tokens = tokens.len(), "scan finished");
        Ok(tokens)
    }

    /// Produces the next token, `Ok(None)` at end of input.
    ///
    /// Whitespace is skipped; every other character starts exactly one
    /// token or fails the scan.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        if self.failed {
            return Ok(None);
        }

        let result = self.dispatch();
        match &result {
            Ok(Some(token)) => trace!(
                kind = %token.kind(),
                pos = %token.pos,
                value = %token,
                "token"
            ),
            Ok(None) => {},
            Err(err) => {
                debug!(error = %err, "scan failed");
                self.failed = true;
            },
        }
        result
    }

    fn dispatch(&mut self) -> Result<Option<Token>> {
        while let Some(c) = self.cursor.current() {
            let token = match classify(c) {
                CharClass::Whitespace => {
                    self.cursor.advance();
                    continue;
                },
                CharClass::IdentStart => self.scan_identifier(),
                CharClass::DigitStart => self.scan_number()?,
                CharClass::QuoteStart => self.scan_literal(c)?,
                CharClass::PunctStart => self.scan_operator(c)?,
                CharClass::Other => {
                    return Err(ScanError::unknown_character(c, self.cursor.position()))
                },
            };
            return Ok(Some(token));
        }
        Ok(None)
    }

    /// Builds a token that started at `start` and ends at the cursor.
    pub(super) fn token(&self, value: TokenValue, start: Position) -> Token {
        Token::new(value, start, self.cursor.position())
    }

    /// Returns the current cursor position.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
