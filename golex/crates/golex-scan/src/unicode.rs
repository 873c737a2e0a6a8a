//! Character classification.
//!
//! The scanner decides which extraction routine to run from the class of
//! the first unconsumed character. Letter and whitespace tests use the
//! Unicode-aware `char` predicates; digits are ASCII only.

/// The accepted operator and punctuation characters.
pub const PUNCTUATION: &str = "+-*%=()&|^<>!.:;/{}[]\\,";

/// Dispatch class of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Skipped without producing a token.
    Whitespace,
    /// Letter or underscore: identifier or keyword.
    IdentStart,
    /// ASCII digit: numeric literal.
    DigitStart,
    /// `"`, `` ` `` or `'`: string or rune literal.
    QuoteStart,
    /// One of [`PUNCTUATION`]: operator, separator or comment.
    PunctStart,
    /// Anything else.
    Other,
}

/// Classifies `c`, testing the classes in dispatch order.
///
/// # Example
///
/// ```
/// use golex_scan::unicode::{classify, CharClass};
///
/// assert_eq!(classify('\t'), CharClass::Whitespace);
/// assert_eq!(classify('_'), CharClass::IdentStart);
/// assert_eq!(classify('ж'), CharClass::IdentStart);
/// assert_eq!(classify('7'), CharClass::DigitStart);
/// assert_eq!(classify('`'), CharClass::QuoteStart);
/// assert_eq!(classify('{'), CharClass::PunctStart);
/// assert_eq!(classify('$'), CharClass::Other);
/// ```
pub fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if is_ident_start(c) {
        CharClass::IdentStart
    } else if c.is_ascii_digit() {
        CharClass::DigitStart
    } else if is_quote(c) {
        CharClass::QuoteStart
    } else if is_punct(c) {
        CharClass::PunctStart
    } else {
        CharClass::Other
    }
}

/// Letters (any script) and underscore.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Letters, digits (any script) and underscore.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// String and rune delimiters.
#[inline]
pub fn is_quote(c: char) -> bool {
    matches!(c, '"' | '`' | '\'')
}

/// Members of [`PUNCTUATION`].
#[inline]
pub fn is_punct(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Checks if a character is a valid digit in the given base.
///
/// # Example
///
/// ```
/// use golex_scan::unicode::is_digit_in_base;
///
/// assert!(is_digit_in_base('f', 16));
/// assert!(is_digit_in_base('F', 16));
/// assert!(!is_digit_in_base('g', 16));
/// assert!(is_digit_in_base('9', 10));
/// ```
#[inline]
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    c.is_digit(base)
}
