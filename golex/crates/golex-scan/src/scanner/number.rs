//! Numeric literal extraction.
//!
//! Handles decimal, hexadecimal (`0x`), octal (`0o`) and binary (`0b`)
//! integers, floating-point literals with fraction and exponent, and the
//! imaginary suffix `i`.

use crate::error::{Result, ScanError};
use crate::token::{Token, TokenValue};
use crate::unicode::is_digit_in_base;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Extracts a numeric literal.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `42`, `0`
    /// - Hexadecimal: `0x1A`, `0XFF`
    /// - Octal: `0o17`
    /// - Binary: `0b1010`
    /// - Float: `3.14`, `1e10`, `2.5E-3`, `7.`
    /// - Imaginary: `2i`, `1.5e3i`, `0x10i`
    ///
    /// # Returns
    ///
    /// `Int` or `Float` carrying the parsed value, or `Imag` carrying the
    /// raw source text including the `i`.
    ///
    /// # Errors
    ///
    /// [`ScanError::MalformedNumber`] when the consumed text does not parse,
    /// e.g. `0b12`, a bare `0x`, `1e` or an integer above `u64::MAX`.
    pub(crate) fn scan_number(&mut self) -> Result<Token> {
        let start = self.cursor.position();
        let mark = self.cursor.byte_pos();

        let radix = self.scan_radix_prefix();
        match radix {
            Some(16) => self.cursor.eat_while(|c| is_digit_in_base(c, 16)),
            Some(_) => self.cursor.eat_while(|c| c.is_ascii_digit()),
            None => {
                self.cursor.eat_while(|c| c.is_ascii_digit());
                self.scan_fraction();
                self.scan_exponent();
            },
        }

        let literal = self.cursor.slice_from(mark);
        let value = parse_literal(literal, radix).ok_or_else(|| ScanError::MalformedNumber {
            literal: literal.to_string(),
            pos: start,
        })?;

        if self.cursor.match_char('i') {
            let raw = self.cursor.slice_from(mark);
            return Ok(self.token(TokenValue::Imag(raw.to_string()), start));
        }

        Ok(self.token(value, start))
    }

    /// Consumes a `0x`, `0o` or `0b` prefix and returns its radix.
    fn scan_radix_prefix(&mut self) -> Option<u32> {
        if self.cursor.current() != Some('0') {
            return None;
        }
        let radix = match self.cursor.peek(1)? {
            'x' | 'X' => 16,
            'o' | 'O' => 8,
            'b' | 'B' => 2,
            _ => return None,
        };
        self.cursor.advance();
        self.cursor.advance();
        Some(radix)
    }

    /// Consumes `.` and the digits after it.
    fn scan_fraction(&mut self) {
        if self.cursor.match_char('.') {
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }
    }

    /// Consumes `e`/`E`, an optional sign, and the exponent digits.
    fn scan_exponent(&mut self) {
        if self.cursor.match_char('e') || self.cursor.match_char('E') {
            if !self.cursor.match_char('+') {
                self.cursor.match_char('-');
            }
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }
    }
}

/// Parses the consumed literal text.
///
/// Prefixed literals are integers in their radix. Otherwise a `.` or an
/// exponent marker makes the literal a float, and anything else is a
/// decimal integer.
fn parse_literal(literal: &str, radix: Option<u32>) -> Option<TokenValue> {
    match radix {
        Some(radix) => u64::from_str_radix(&literal[2..], radix)
            .ok()
            .map(TokenValue::Int),
        None if literal.contains(['.', 'e', 'E']) => {
            literal.parse::<f64>().ok().map(TokenValue::Float)
        },
        None => literal.parse::<u64>().ok().map(TokenValue::Int),
    }
}
