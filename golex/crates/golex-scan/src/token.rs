//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenValue`] with the position where its lexeme
//! starts and the position just past its end. The value is a tagged union:
//! each kind carries exactly the payload it needs, and [`Token::kind`]
//! derives the fieldless [`TokenKind`] from it.

use std::fmt;

use crate::position::Position;

/// Reserved words of the language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

impl Keyword {
    /// Every keyword, in alphabetical order.
    pub const ALL: [Keyword; 25] = [
        Keyword::Break,
        Keyword::Case,
        Keyword::Chan,
        Keyword::Const,
        Keyword::Continue,
        Keyword::Default,
        Keyword::Defer,
        Keyword::Else,
        Keyword::Fallthrough,
        Keyword::For,
        Keyword::Func,
        Keyword::Go,
        Keyword::Goto,
        Keyword::If,
        Keyword::Import,
        Keyword::Interface,
        Keyword::Map,
        Keyword::Package,
        Keyword::Range,
        Keyword::Return,
        Keyword::Select,
        Keyword::Struct,
        Keyword::Switch,
        Keyword::Type,
        Keyword::Var,
    ];

    /// Maps an identifier to its keyword, if it is one.
    ///
    /// # Example
    ///
    /// ```
    /// use golex_scan::Keyword;
    ///
    /// assert_eq!(Keyword::from_ident("func"), Some(Keyword::Func));
    /// assert_eq!(Keyword::from_ident("main"), None);
    /// ```
    pub fn from_ident(ident: &str) -> Option<Keyword> {
        let kw = match ident {
            "break" => Keyword::Break,
            "case" => Keyword::Case,
            "chan" => Keyword::Chan,
            "const" => Keyword::Const,
            "continue" => Keyword::Continue,
            "default" => Keyword::Default,
            "defer" => Keyword::Defer,
            "else" => Keyword::Else,
            "fallthrough" => Keyword::Fallthrough,
            "for" => Keyword::For,
            "func" => Keyword::Func,
            "go" => Keyword::Go,
            "goto" => Keyword::Goto,
            "if" => Keyword::If,
            "import" => Keyword::Import,
            "interface" => Keyword::Interface,
            "map" => Keyword::Map,
            "package" => Keyword::Package,
            "range" => Keyword::Range,
            "return" => Keyword::Return,
            "select" => Keyword::Select,
            "struct" => Keyword::Struct,
            "switch" => Keyword::Switch,
            "type" => Keyword::Type,
            "var" => Keyword::Var,
            _ => return None,
        };
        Some(kw)
    }

    /// Returns the source spelling of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Chan => "chan",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Default => "default",
            Keyword::Defer => "defer",
            Keyword::Else => "else",
            Keyword::Fallthrough => "fallthrough",
            Keyword::For => "for",
            Keyword::Func => "func",
            Keyword::Go => "go",
            Keyword::Goto => "goto",
            Keyword::If => "if",
            Keyword::Import => "import",
            Keyword::Interface => "interface",
            Keyword::Map => "map",
            Keyword::Package => "package",
            Keyword::Range => "range",
            Keyword::Return => "return",
            Keyword::Select => "select",
            Keyword::Struct => "struct",
            Keyword::Switch => "switch",
            Keyword::Type => "type",
            Keyword::Var => "var",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operators and separators.
///
/// Only the forms the scanner can actually produce are listed: the
/// single-character punctuation set plus the greedy multi-character
/// extensions of `+ - * / % & | ^ < >`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Punct {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Quo,
    /// `%`
    Rem,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `&^`
    AndNot,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    QuoAssign,
    /// `%=`
    RemAssign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,
    /// `^=`
    XorAssign,
    /// `<<=`
    ShlAssign,
    /// `>>=`
    ShrAssign,
    /// `++`
    Inc,
    /// `--`
    Dec,
    /// `<`
    Lss,
    /// `>`
    Gtr,
    /// `=`
    Assign,
    /// `!`
    Not,
    /// `<=`
    Leq,
    /// `>=`
    Geq,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBrack,
    /// `]`
    RBrack,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Period,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `\`
    Backslash,
}

impl Punct {
    /// Returns the source spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Punct::Add => "+",
            Punct::Sub => "-",
            Punct::Mul => "*",
            Punct::Quo => "/",
            Punct::Rem => "%",
            Punct::And => "&",
            Punct::Or => "|",
            Punct::Xor => "^",
            Punct::Shl => "<<",
            Punct::Shr => ">>",
            Punct::AndNot => "&^",
            Punct::AddAssign => "+=",
            Punct::SubAssign => "-=",
            Punct::MulAssign => "*=",
            Punct::QuoAssign => "/=",
            Punct::RemAssign => "%=",
            Punct::AndAssign => "&=",
            Punct::OrAssign => "|=",
            Punct::XorAssign => "^=",
            Punct::ShlAssign => "<<=",
            Punct::ShrAssign => ">>=",
            Punct::Inc => "++",
            Punct::Dec => "--",
            Punct::Lss => "<",
            Punct::Gtr => ">",
            Punct::Assign => "=",
            Punct::Not => "!",
            Punct::Leq => "<=",
            Punct::Geq => ">=",
            Punct::LParen => "(",
            Punct::RParen => ")",
            Punct::LBrack => "[",
            Punct::RBrack => "]",
            Punct::LBrace => "{",
            Punct::RBrace => "}",
            Punct::Comma => ",",
            Punct::Period => ".",
            Punct::Semicolon => ";",
            Punct::Colon => ":",
            Punct::Backslash => "\\",
        }
    }

    /// Maps a single punctuation character to its operator.
    pub fn from_char(c: char) -> Option<Punct> {
        let punct = match c {
            '+' => Punct::Add,
            '-' => Punct::Sub,
            '*' => Punct::Mul,
            '/' => Punct::Quo,
            '%' => Punct::Rem,
            '&' => Punct::And,
            '|' => Punct::Or,
            '^' => Punct::Xor,
            '<' => Punct::Lss,
            '>' => Punct::Gtr,
            '=' => Punct::Assign,
            '!' => Punct::Not,
            '(' => Punct::LParen,
            ')' => Punct::RParen,
            '[' => Punct::LBrack,
            ']' => Punct::RBrack,
            '{' => Punct::LBrace,
            '}' => Punct::RBrace,
            ',' => Punct::Comma,
            '.' => Punct::Period,
            ';' => Punct::Semicolon,
            ':' => Punct::Colon,
            '\\' => Punct::Backslash,
            _ => return None,
        };
        Some(punct)
    }
}

impl fmt::Display for Punct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category of a token, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Ident,
    Int,
    Float,
    Imag,
    String,
    Byte,
    OpSep,
    Comment,
}

impl TokenKind {
    /// Returns the upper-case name used in token tables.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Imag => "IMAG",
            TokenKind::String => "STRING",
            TokenKind::Byte => "BYTE",
            TokenKind::OpSep => "OP_SEP",
            TokenKind::Comment => "COMMENT",
        }
    }

    /// Identifiers and basic literals.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::Imag
                | TokenKind::String
                | TokenKind::Byte
        )
    }

    /// Operators and separators.
    pub fn is_operator(self) -> bool {
        self == TokenKind::OpSep
    }

    /// Reserved words.
    pub fn is_keyword(self) -> bool {
        self == TokenKind::Keyword
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The payload of a token, keyed by kind.
///
/// `Int` and `Float` hold parsed values; `Imag` keeps the raw source text
/// including the trailing `i`. `String` and `Byte` keep both delimiters.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    Keyword(Keyword),
    Ident(String),
    Int(u64),
    Float(f64),
    Imag(String),
    String(String),
    Byte(String),
    OpSep(Punct),
    Comment(String),
}

impl TokenValue {
    /// Returns the kind this payload belongs to.
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::Keyword(_) => TokenKind::Keyword,
            TokenValue::Ident(_) => TokenKind::Ident,
            TokenValue::Int(_) => TokenKind::Int,
            TokenValue::Float(_) => TokenKind::Float,
            TokenValue::Imag(_) => TokenKind::Imag,
            TokenValue::String(_) => TokenKind::String,
            TokenValue::Byte(_) => TokenKind::Byte,
            TokenValue::OpSep(_) => TokenKind::OpSep,
            TokenValue::Comment(_) => TokenKind::Comment,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Keyword(kw) => f.write_str(kw.as_str()),
            TokenValue::OpSep(punct) => f.write_str(punct.as_str()),
            TokenValue::Int(n) => write!(f, "{}", n),
            TokenValue::Float(x) => write!(f, "{}", x),
            TokenValue::Ident(s)
            | TokenValue::Imag(s)
            | TokenValue::String(s)
            | TokenValue::Byte(s)
            | TokenValue::Comment(s) => f.write_str(s),
        }
    }
}

/// A scanned token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Kind and payload.
    pub value: TokenValue,
    /// Where the lexeme starts.
    pub pos: Position,
    /// The cursor just past the lexeme.
    pub end: Position,
}

impl Token {
    /// Creates a token.
    pub fn new(value: TokenValue, pos: Position, end: Position) -> Self {
        Self { value, pos, end }
    }

    /// Returns the token's kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.value.kind()
    }

    /// Number of source characters the lexeme spans.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.offset - self.pos.offset
    }

    /// Whether the lexeme is empty. Scanned tokens never are.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Maps an identifier to [`TokenKind::Keyword`] or [`TokenKind::Ident`].
pub fn lookup(ident: &str) -> TokenKind {
    if Keyword::from_ident(ident).is_some() {
        TokenKind::Keyword
    } else {
        TokenKind::Ident
    }
}

/// Reports whether `name` is a reserved word such as `func` or `return`.
pub fn is_keyword(name: &str) -> bool {
    Keyword::from_ident(name).is_some()
}

/// Reports whether `name` starts with an upper-case letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Reports whether `name` is an identifier: a non-empty run of letters,
/// digits and underscores whose first character is not a digit. Keywords
/// are not identifiers.
pub fn is_identifier(name: &str) -> bool {
    if name.is_empty() || is_keyword(name) {
        return false;
    }
    name.chars().enumerate().all(|(i, c)| {
        c.is_alphabetic() || c == '_' || (i > 0 && c.is_numeric())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::from_ident(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_keyword_case_sensitive() {
        assert_eq!(Keyword::from_ident("Func"), None);
        assert_eq!(Keyword::from_ident("IF"), None);
    }

    #[test]
    fn test_punct_from_char() {
        assert_eq!(Punct::from_char('\\'), Some(Punct::Backslash));
        assert_eq!(Punct::from_char(';'), Some(Punct::Semicolon));
        assert_eq!(Punct::from_char('$'), None);
        assert_eq!(Punct::from_char('~'), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::OpSep.to_string(), "OP_SEP");
        assert_eq!(TokenKind::Byte.to_string(), "BYTE");
        assert_eq!(TokenKind::Keyword.name(), "KEYWORD");
    }

    #[test]
    fn test_kind_classification() {
        assert!(TokenKind::Ident.is_literal());
        assert!(TokenKind::Imag.is_literal());
        assert!(!TokenKind::Comment.is_literal());
        assert!(!TokenKind::Keyword.is_literal());
        assert!(TokenKind::OpSep.is_operator());
        assert!(TokenKind::Keyword.is_keyword());
        assert!(!TokenKind::Ident.is_keyword());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(TokenValue::Int(26).to_string(), "26");
        assert_eq!(TokenValue::Float(2.75).to_string(), "2.75");
        assert_eq!(TokenValue::OpSep(Punct::ShlAssign).to_string(), "<<=");
        assert_eq!(TokenValue::Keyword(Keyword::Var).to_string(), "var");
        assert_eq!(TokenValue::Imag("2i".to_string()).to_string(), "2i");
    }

    #[test]
    fn test_token_len() {
        let token = Token::new(
            TokenValue::Ident("main".to_string()),
            Position::new(5, 1, 6),
            Position::new(9, 1, 10),
        );
        assert_eq!(token.kind(), TokenKind::Ident);
        assert_eq!(token.len(), 4);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("range"), TokenKind::Keyword);
        assert_eq!(lookup("ranger"), TokenKind::Ident);
    }

    #[test]
    fn test_is_exported() {
        assert!(is_exported("Println"));
        assert!(!is_exported("println"));
        assert!(!is_exported("_X"));
        assert!(!is_exported(""));
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_tmp1"));
        assert!(is_identifier("größe"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("struct"));
    }
}
