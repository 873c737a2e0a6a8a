//! Comment extraction.
//!
//! Comments are emitted as `COMMENT` tokens rather than skipped. Both forms
//! are entered from operator extraction once the initial `/` has been
//! consumed; `start` and `mark` point at that `/`. A line comment's second
//! `/` is consumed too, while a block comment's `*` is left under the
//! cursor, so `/*/` is a complete comment.

use crate::error::{Result, ScanError};
use crate::position::Position;
use crate::token::{Token, TokenValue};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Extracts a `//` comment up to, but not including, the end of line.
    pub(crate) fn scan_line_comment(&mut self, start: Position, mark: usize) -> Token {
        self.cursor.eat_while(|c| c != '\n');

        let text = self.cursor.slice_from(mark).trim().to_string();
        self.token(TokenValue::Comment(text), start)
    }

    /// Extracts a `/* */` comment, including the closing `*/`.
    ///
    /// The search for `*/` starts on the opener's `*`. Block comments do
    /// not nest. Raw `\n` and `\r` inside the comment are rewritten as
    /// two-character escapes so the value stays on one line.
    ///
    /// # Errors
    ///
    /// [`ScanError::UnterminatedComment`] if the input ends before `*/`.
    pub(crate) fn scan_block_comment(&mut self, start: Position, mark: usize) -> Result<Token> {
        loop {
            match self.cursor.current() {
                None => return Err(ScanError::UnterminatedComment { pos: start }),
                Some('*') if self.cursor.peek(1) == Some('/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    break;
                },
                Some(_) => self.cursor.advance(),
            }
        }

        let text = self
            .cursor
            .slice_from(mark)
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .trim()
            .to_string();
        Ok(self.token(TokenValue::Comment(text), start))
    }
}
