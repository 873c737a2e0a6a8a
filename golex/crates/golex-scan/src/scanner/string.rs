//! String and rune literal extraction.
//!
//! Double-quoted and backtick strings produce `STRING` tokens; single-quoted
//! runes produce `BYTE` tokens. Escapes are kept in their source form.

use crate::error::{Result, ScanError};
use crate::token::{Token, TokenValue};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Extracts a literal delimited by `delimiter`.
    ///
    /// The stored value starts with the opening delimiter and ends with the
    /// closing one. A backslash escapes the following character, which is
    /// kept as `\` plus that character, so `"a\"b"` stays `"a\"b"`. Raw
    /// newlines become the two characters `\n` and surrounding whitespace
    /// is trimmed before the closing delimiter is appended.
    ///
    /// # Errors
    ///
    /// [`ScanError::UnterminatedLiteral`] if the input ends before an
    /// unescaped closing delimiter.
    pub(crate) fn scan_literal(&mut self, delimiter: char) -> Result<Token> {
        let start = self.cursor.position();
        self.cursor.advance();

        let mut content = String::from(delimiter);
        let mut escape = false;

        loop {
            let Some(c) = self.cursor.current() else {
                return Err(ScanError::UnterminatedLiteral {
                    delimiter,
                    pos: start,
                });
            };

            if escape {
                content.push('\\');
                content.push(c);
                escape = false;
            } else if c == delimiter {
                break;
            } else if c == '\\' {
                escape = true;
            } else {
                content.push(c);
            }
            self.cursor.advance();
        }

        // closing delimiter
        self.cursor.advance();

        let mut text = content.replace('\n', "\\n").trim().to_string();
        text.push(delimiter);

        let value = if delimiter == '\'' {
            TokenValue::Byte(text)
        } else {
            TokenValue::String(text)
        };
        Ok(self.token(value, start))
    }
}
