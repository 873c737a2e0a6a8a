//! Identifier and keyword extraction.

use crate::token::{Keyword, Token, TokenValue};
use crate::unicode::is_ident_continue;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Extracts an identifier or keyword.
    ///
    /// Consumes the run of letters, digits and underscores at the cursor.
    /// The text is a keyword if it is one of the reserved words, otherwise
    /// an identifier.
    pub(crate) fn scan_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        let mark = self.cursor.byte_pos();

        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(mark);
        let value = match Keyword::from_ident(text) {
            Some(keyword) => TokenValue::Keyword(keyword),
            None => TokenValue::Ident(text.to_string()),
        };
        self.token(value, start)
    }
}
