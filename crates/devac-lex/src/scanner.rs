//! The scanner: source bytes in, one token at a time out.
//!
//! `Scanner` never reports to a diagnostic handler and never aborts - a
//! lexical problem (an unterminated string, a stray byte) becomes an
//! `Error` token and scanning continues right after it. It's the parser's
//! job, not the scanner's, to turn that into a reported diagnostic; see
//! `devac-par`'s handling of `TokenKind::Error`.

use devac_util::Span;

use crate::token::{Keyword, NumberLiteral, Punct, Token, TokenKind};
use crate::unicode::{is_ascii_digit_byte, is_ident_continue_byte, is_ident_start_byte};

/// Produces tokens lazily from a UTF-8 source buffer.
///
/// `next_token` is idempotent once the input is exhausted: every call after
/// the first EOF returns another EOF token, since the cursor simply stops
/// advancing.
pub struct Scanner<'src> {
    source: &'src str,
    bytes: &'src [u8],
    pos: usize,
    line: u32,
    column: u32,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    /// Consumes one byte, updating line/column bookkeeping. Every consumed
    /// byte advances the column by one - including continuation bytes of a
    /// multi-byte sequence, so a Devanagari character spans several columns.
    fn bump(&mut self) -> u8 {
        let b = self.bytes[self.pos];
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        b
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {
                    self.bump();
                }
                Some(b'/') if self.peek_at(1) == Some(b'/') => {
                    while !self.at_end() && self.peek() != Some(b'\n') {
                        self.bump();
                    }
                }
                _ => break,
            }
        }
    }

    fn make(&self, start: usize, start_line: u32, start_col: u32, kind: TokenKind) -> Token<'src> {
        Token {
            kind,
            lexeme: &self.source[start..self.pos],
            offset: start,
            line: start_line,
            column: start_col,
        }
    }

    fn error(&self, start: usize, start_line: u32, start_col: u32, message: &'static str) -> Token<'src> {
        Token {
            kind: TokenKind::Error,
            lexeme: message,
            offset: start,
            line: start_line,
            column: start_col,
        }
    }

    /// Returns the next token, skipping leading whitespace and comments.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_trivia();

        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        let Some(b) = self.peek() else {
            return self.make(start, start_line, start_col, TokenKind::Eof);
        };

        if is_ident_start_byte(b) {
            return self.scan_identifier(start, start_line, start_col);
        }
        if is_ascii_digit_byte(b) {
            return self.scan_number(start, start_line, start_col);
        }
        if b == b'"' {
            return self.scan_string(start, start_line, start_col);
        }
        self.scan_operator(start, start_line, start_col)
    }

    fn scan_identifier(&mut self, start: usize, start_line: u32, start_col: u32) -> Token<'src> {
        self.bump();
        while let Some(b) = self.peek() {
            if is_ident_continue_byte(b) {
                self.bump();
            } else {
                break;
            }
        }
        let text = &self.source[start..self.pos];
        let kind = match Keyword::lookup(text) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident,
        };
        self.make(start, start_line, start_col, kind)
    }

    fn scan_number(&mut self, start: usize, start_line: u32, start_col: u32) -> Token<'src> {
        while self.peek().is_some_and(is_ascii_digit_byte) {
            self.bump();
        }

        let is_float = self.peek() == Some(b'.') && self.peek_at(1).is_some_and(is_ascii_digit_byte);
        if is_float {
            self.bump(); // consume '.'
            while self.peek().is_some_and(is_ascii_digit_byte) {
                self.bump();
            }
        }

        let text = &self.source[start..self.pos];
        let value = if is_float {
            NumberLiteral::Float(text.parse().unwrap_or_default())
        } else {
            NumberLiteral::Int(text.parse().unwrap_or_default())
        };
        self.make(start, start_line, start_col, TokenKind::Number(value))
    }

    fn scan_string(&mut self, start: usize, start_line: u32, start_col: u32) -> Token<'src> {
        self.bump(); // opening quote
        let interior_start = self.pos;

        loop {
            match self.peek() {
                None => return self.error(start, start_line, start_col, "Unterminated string."),
                Some(b'"') => break,
                Some(_) => {
                    self.bump();
                }
            }
        }

        let interior = &self.source[interior_start..self.pos];
        self.bump(); // closing quote

        Token {
            kind: TokenKind::Str,
            lexeme: interior,
            offset: start,
            line: start_line,
            column: start_col,
        }
    }

    fn scan_operator(&mut self, start: usize, start_line: u32, start_col: u32) -> Token<'src> {
        let first = self.bump();
        let punct = match first {
            b'+' => Some(Punct::Plus),
            b'-' => Some(Punct::Minus),
            b'*' => Some(Punct::Star),
            b'/' => Some(Punct::Slash),
            b'%' => Some(Punct::Percent),
            b'(' => Some(Punct::LParen),
            b')' => Some(Punct::RParen),
            b'{' => Some(Punct::LBrace),
            b'}' => Some(Punct::RBrace),
            b',' => Some(Punct::Comma),
            b';' => Some(Punct::Semicolon),
            b'=' => {
                if self.peek() == Some(b'=') {
                    self.bump();
                    Some(Punct::EqEq)
                } else {
                    Some(Punct::Eq)
                }
            }
            b'!' => {
                if self.peek() == Some(b'=') {
                    self.bump();
                    Some(Punct::NotEq)
                } else {
                    Some(Punct::Not)
                }
            }
            b'<' => {
                if self.peek() == Some(b'=') {
                    self.bump();
                    Some(Punct::LtEq)
                } else {
                    Some(Punct::Lt)
                }
            }
            b'>' => {
                if self.peek() == Some(b'=') {
                    self.bump();
                    Some(Punct::GtEq)
                } else {
                    Some(Punct::Gt)
                }
            }
            b'&' => {
                if self.peek() == Some(b'&') {
                    self.bump();
                    Some(Punct::AndAnd)
                } else {
                    None
                }
            }
            b'|' => {
                if self.peek() == Some(b'|') {
                    self.bump();
                    Some(Punct::OrOr)
                } else {
                    None
                }
            }
            _ => None,
        };

        match punct {
            Some(p) => self.make(start, start_line, start_col, TokenKind::Punct(p)),
            None => self.error(start, start_line, start_col, "Unexpected character."),
        }
    }

    /// Byte offset the scanner is currently positioned at. Exposed for
    /// diagnostics that want to report "at end of file" positions.
    pub fn position(&self) -> Span {
        Span::new(self.pos, 0, self.line, self.column)
    }
}
