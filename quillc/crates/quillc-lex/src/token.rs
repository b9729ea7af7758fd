//! Token definitions.
//!
//! [`TokenKind`] is the closed set of lexeme classifications and [`Item`] is
//! what the scanner hands to its caller: a kind, the position of the
//! lexeme's first character, and the literal text for `Int`, `Name` and
//! `String` tokens.

use std::fmt;

use quillc_util::Position;

/// The classification of a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Stop tokens
    /// Attached to every lexical error
    Illegal,
    /// No more tokens
    EndOfInput,

    // Single-character tokens
    /// `=`
    Assign,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `/`
    Divide,
    /// `.`
    Dot,
    /// `>`
    Gt,
    /// `{`
    LBrace,
    /// `[`
    LBracket,
    /// `(`
    LParen,
    /// `<`
    Lt,
    /// `-`
    Minus,
    /// `%`
    Modulo,
    /// `+`
    Plus,
    /// `}`
    RBrace,
    /// `]`
    RBracket,
    /// `)`
    RParen,
    /// `*`
    Times,

    // Two-character tokens
    /// `==`
    Equal,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `!=`
    NotEqual,

    // Three-character tokens
    /// `...`
    Ellipsis,

    // Keywords
    /// `and`
    And,
    /// `else`
    Else,
    /// `false`
    False,
    /// `for`
    For,
    /// `func`
    Func,
    /// `if`
    If,
    /// `in`
    In,
    /// `nil`
    Nil,
    /// `not`
    Not,
    /// `or`
    Or,
    /// `return`
    Return,
    /// `true`
    True,
    /// `while`
    While,

    // Literals and identifiers
    /// Unsigned decimal integer literal
    Int,
    /// Identifier
    Name,
    /// Double-quoted string literal
    String,
}

/// Every reserved word and the kind it lexes to.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("func", TokenKind::Func),
    ("if", TokenKind::If),
    ("in", TokenKind::In),
    ("nil", TokenKind::Nil),
    ("not", TokenKind::Not),
    ("or", TokenKind::Or),
    ("return", TokenKind::Return),
    ("true", TokenKind::True),
    ("while", TokenKind::While),
];

/// Look up a reserved word.
///
/// Returns `None` for anything that is not exactly a keyword, including
/// different casing.
///
/// ```
/// use quillc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// assert_eq!(keyword_from_ident("whilex"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "and" => TokenKind::And,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "func" => TokenKind::Func,
        "if" => TokenKind::If,
        "in" => TokenKind::In,
        "nil" => TokenKind::Nil,
        "not" => TokenKind::Not,
        "or" => TokenKind::Or,
        "return" => TokenKind::Return,
        "true" => TokenKind::True,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

impl TokenKind {
    /// Canonical short name.
    ///
    /// Punctuation and keywords return their exact spelling; the remaining
    /// kinds return a descriptive name.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "Illegal",
            TokenKind::EndOfInput => "EOF",

            TokenKind::Assign => "=",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Divide => "/",
            TokenKind::Dot => ".",
            TokenKind::Gt => ">",
            TokenKind::LBrace => "{",
            TokenKind::LBracket => "[",
            TokenKind::LParen => "(",
            TokenKind::Lt => "<",
            TokenKind::Minus => "-",
            TokenKind::Modulo => "%",
            TokenKind::Plus => "+",
            TokenKind::RBrace => "}",
            TokenKind::RBracket => "]",
            TokenKind::RParen => ")",
            TokenKind::Times => "*",

            TokenKind::Equal => "==",
            TokenKind::Gte => ">=",
            TokenKind::Lte => "<=",
            TokenKind::NotEqual => "!=",

            TokenKind::Ellipsis => "...",

            TokenKind::And => "and",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::Func => "func",
            TokenKind::If => "if",
            TokenKind::In => "in",
            TokenKind::Nil => "nil",
            TokenKind::Not => "not",
            TokenKind::Or => "or",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::While => "while",

            TokenKind::Int => "int",
            TokenKind::Name => "name",
            TokenKind::String => "string",
        }
    }

    /// Returns true for `Illegal` and `EndOfInput`.
    pub const fn is_stop(self) -> bool {
        matches!(self, TokenKind::Illegal | TokenKind::EndOfInput)
    }

    /// Returns true for single- and multi-character punctuation.
    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Colon
                | TokenKind::Comma
                | TokenKind::Divide
                | TokenKind::Dot
                | TokenKind::Gt
                | TokenKind::LBrace
                | TokenKind::LBracket
                | TokenKind::LParen
                | TokenKind::Lt
                | TokenKind::Minus
                | TokenKind::Modulo
                | TokenKind::Plus
                | TokenKind::RBrace
                | TokenKind::RBracket
                | TokenKind::RParen
                | TokenKind::Times
                | TokenKind::Equal
                | TokenKind::Gte
                | TokenKind::Lte
                | TokenKind::NotEqual
                | TokenKind::Ellipsis
        )
    }

    /// Returns true for reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Func
                | TokenKind::If
                | TokenKind::In
                | TokenKind::Nil
                | TokenKind::Not
                | TokenKind::Or
                | TokenKind::Return
                | TokenKind::True
                | TokenKind::While
        )
    }

    /// Returns true for the kinds that carry a value.
    pub const fn is_literal(self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Name | TokenKind::String)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scanned lexeme.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// What was recognized
    pub kind: TokenKind,
    /// Position of the first character of the lexeme
    pub position: Position,
    /// Literal text; empty unless `kind` is `Int`, `Name` or `String`
    pub value: String,
}

impl Item {
    /// An item without a value.
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Self {
            kind,
            position,
            value: String::new(),
        }
    }

    /// An item carrying literal text.
    pub fn with_value(kind: TokenKind, position: Position, value: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            value: value.into(),
        }
    }

    /// The source spelling of this item.
    ///
    /// ```
    /// use quillc_lex::{Item, TokenKind};
    /// use quillc_util::Position;
    ///
    /// let string = Item::with_value(TokenKind::String, Position::START, "hi");
    /// assert_eq!(string.text(), "\"hi\"");
    /// assert_eq!(Item::new(TokenKind::Lte, Position::START).text(), "<=");
    /// ```
    pub fn text(&self) -> String {
        match self.kind {
            TokenKind::String => format!("\"{}\"", self.value),
            TokenKind::Int | TokenKind::Name => self.value.clone(),
            TokenKind::Illegal | TokenKind::EndOfInput => String::new(),
            kind => kind.as_str().to_string(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}@{}", self.kind, self.position)
        } else {
            write!(f, "{}({})@{}", self.kind, self.value, self.position)
        }
    }
}
