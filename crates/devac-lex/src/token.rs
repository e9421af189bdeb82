//! Token types produced by the [`crate::scanner::Scanner`].
//!
//! Tokens are a closed tagged union rather than the reference compiler's
//! integer-enum-plus-union representation: payload (a keyword variant, a
//! decoded number, an operator) lives directly on the [`TokenKind`] variant,
//! so a walker matching on `TokenKind` gets exhaustiveness checking instead
//! of having to remember which union field goes with which tag.

use devac_util::Span;

/// The twelve reserved words of the language, spelled in Devanagari in
/// source text. `do`, `break`, and `continue` are recognized here so the
/// scanner can tokenize them, but the parser's grammar never accepts them in
/// statement position (see `devac-par`'s handling of unreached keywords).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    Int,
    Float,
    Char,
    Void,
    If,
    Else,
    For,
    While,
    Do,
    Break,
    Continue,
    Return,
}

impl Keyword {
    /// True for the four keywords that denote a primitive type.
    pub fn is_type(self) -> bool {
        matches!(self, Keyword::Int | Keyword::Float | Keyword::Char | Keyword::Void)
    }

    /// Looks up a keyword by its exact Devanagari spelling. Matching is
    /// byte-wise equality on the whole identifier slice, not a prefix or
    /// normalized comparison.
    pub fn lookup(ident: &str) -> Option<Keyword> {
        match ident {
            "पूर्णांक" => Some(Keyword::Int),
            "दशमलव" => Some(Keyword::Float),
            "वर्ण" => Some(Keyword::Char),
            "शून्य" => Some(Keyword::Void),
            "अगर" => Some(Keyword::If),
            "वरना" => Some(Keyword::Else),
            "दौर" => Some(Keyword::For),
            "जबतक" => Some(Keyword::While),
            "करो" => Some(Keyword::Do),
            "रुको" => Some(Keyword::Break),
            "जारी" => Some(Keyword::Continue),
            "वापस" => Some(Keyword::Return),
            _ => None,
        }
    }
}

/// Punctuation and operator tokens. Compound forms (`==`, `!=`, `<=`, `>=`,
/// `&&`, `||`) are their own variants rather than two single-char tokens
/// glued together by the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Punct {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    AndAnd,
    OrOr,
    Not,
    Eq,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
}

/// A decoded `NUMBER` token's value. The scanner picks `Int` or `Float`
/// based solely on whether a `.` appeared in the lexeme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberLiteral {
    Int(i64),
    Float(f64),
}

/// The kind of a token, carrying whatever payload that kind needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    Eof,
    Keyword(Keyword),
    Ident,
    Number(NumberLiteral),
    /// A string literal; the token's `lexeme` is the interior bytes with the
    /// surrounding quotes already stripped (there is no escape processing).
    Str,
    Punct(Punct),
    /// A lexical error. `lexeme` holds the diagnostic message rather than a
    /// slice of the source, since there is no well-formed token text to
    /// report.
    Error,
}

/// A single lexical token: its kind, the exact source slice it matched (or,
/// for `Error`, the diagnostic message), and the position of its first
/// byte.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl<'src> Token<'src> {
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.lexeme.len(), self.line, self.column)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}
