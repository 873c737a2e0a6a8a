//! Operator and punctuation extraction.
//!
//! The first character is consumed, then a per-character lookahead table
//! greedily extends it to the longest known operator. A `/` followed by
//! `/` or `*` hands over to comment extraction instead.

use crate::error::{Result, ScanError};
use crate::token::{Punct, Token, TokenValue};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Extracts an operator, separator or comment starting with `first`.
    ///
    /// Handles: `+ ++ +=`, `- -- -=`, `* *=`, `/ /=`, `% %=`, `& &^ &=`,
    /// `| |=`, `^ ^=`, `< << <<= <=`, `> >> >>= >=`, and the single
    /// characters `= ( ) [ ] { } ! . : ; , \`.
    pub(crate) fn scan_operator(&mut self, first: char) -> Result<Token> {
        let start = self.cursor.position();
        let mark = self.cursor.byte_pos();
        self.cursor.advance();

        let punct = match first {
            '+' => self.extend(Punct::Add, &[('+', Punct::Inc), ('=', Punct::AddAssign)]),
            '-' => self.extend(Punct::Sub, &[('-', Punct::Dec), ('=', Punct::SubAssign)]),
            '*' => self.extend(Punct::Mul, &[('=', Punct::MulAssign)]),
            '/' => {
                if self.cursor.match_char('/') {
                    return Ok(self.scan_line_comment(start, mark));
                }
                if self.cursor.current() == Some('*') {
                    return self.scan_block_comment(start, mark);
                }
                self.extend(Punct::Quo, &[('=', Punct::QuoAssign)])
            },
            '%' => self.extend(Punct::Rem, &[('=', Punct::RemAssign)]),
            '&' => self.extend(Punct::And, &[('^', Punct::AndNot), ('=', Punct::AndAssign)]),
            '|' => self.extend(Punct::Or, &[('=', Punct::OrAssign)]),
            '^' => self.extend(Punct::Xor, &[('=', Punct::XorAssign)]),
            '<' => {
                if self.cursor.match_char('<') {
                    self.extend(Punct::Shl, &[('=', Punct::ShlAssign)])
                } else {
                    self.extend(Punct::Lss, &[('=', Punct::Leq)])
                }
            },
            '>' => {
                if self.cursor.match_char('>') {
                    self.extend(Punct::Shr, &[('=', Punct::ShrAssign)])
                } else {
                    self.extend(Punct::Gtr, &[('=', Punct::Geq)])
                }
            },
            c => match Punct::from_char(c) {
                Some(punct) => punct,
                None => return Err(ScanError::unknown_character(c, start)),
            },
        };

        Ok(self.token(TokenValue::OpSep(punct), start))
    }

    /// Consumes the first matching extension in `table`, falling back to
    /// `base` when none follows.
    fn extend(&mut self, base: Punct, table: &[(char, Punct)]) -> Punct {
        for &(next, punct) in table {
            if self.cursor.match_char(next) {
                return punct;
            }
        }
        base
    }
}
