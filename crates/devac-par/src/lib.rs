//! devac-par - Recursive-descent parser turning a token stream into an
//! [`ast::Program`].
//!
//! The grammar, roughly:
//!
//! ```text
//! program     ::= declaration* EOF
//! declaration ::= funcDecl | varDecl | statement
//! funcDecl    ::= type IDENT '(' params? ')' block
//! varDecl     ::= type IDENT ('=' expression)? ';'
//! params      ::= param (',' param)*
//! param       ::= type IDENT
//! statement   ::= ifStmt | whileStmt | forStmt | returnStmt | block | exprStmt
//! ```
//!
//! Distinguishing `funcDecl` from `varDecl` needs one token of lookahead past
//! the identifier (is the next punctuation a `(`?), so [`Parser`] buffers one
//! extra token rather than committing to either production as soon as it
//! sees a type keyword. Syntax errors are recovered from in panic mode:
//! [`Parser::synchronize`] discards tokens until it finds a plausible
//! declaration boundary, so one malformed statement doesn't prevent the rest
//! of the file from being checked.

mod ast;
mod expr;
mod items;
mod stmt;

#[cfg(test)]
mod edge_cases;

pub use ast::*;

use devac_lex::{Keyword, Punct, Scanner, Token, TokenKind};
use devac_util::{Handler, Span};

pub struct Parser<'src, 'h> {
    scanner: Scanner<'src>,
    current: Token<'src>,
    peeked: Option<Token<'src>>,
    previous: Option<Token<'src>>,
    handler: &'h Handler,
    had_error: bool,
    panic_mode: bool,
}

impl<'src, 'h> Parser<'src, 'h> {
    pub fn new(source: &'src str, handler: &'h Handler) -> Self {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token();
        Self {
            scanner,
            current,
            peeked: None,
            previous: None,
            handler,
            had_error: false,
            panic_mode: false,
        }
    }

    /// Parses the whole token stream into a [`Program`]. Always returns a
    /// tree, even when errors were reported; callers should check
    /// [`Parser::had_error`] (or the handler) before trusting it further.
    pub fn parse(&mut self) -> Program<'src> {
        let mut items = Vec::new();
        while !self.current.is_eof() {
            if let Some(item) = self.declaration() {
                items.push(item);
            }
        }
        Program { items }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    // --- token stream plumbing -------------------------------------------

    pub(crate) fn current(&self) -> Token<'src> {
        self.current
    }

    pub(crate) fn previous(&self) -> Token<'src> {
        self.previous.expect("previous() called before any token was consumed")
    }

    /// The token after `current`, scanning it (and caching it) if it hasn't
    /// been looked at yet. Used only for the funcDecl/varDecl disambiguation.
    pub(crate) fn peek_next(&mut self) -> Token<'src> {
        if self.peeked.is_none() {
            self.peeked = Some(self.scanner.next_token());
        }
        self.peeked.unwrap()
    }

    /// Consumes `current`, returning it, and pulls the next token (from the
    /// lookahead buffer if primed, from the scanner otherwise) into its
    /// place.
    pub(crate) fn advance(&mut self) -> Token<'src> {
        let next = self.peeked.take().unwrap_or_else(|| self.scanner.next_token());
        let consumed = std::mem::replace(&mut self.current, next);
        self.previous = Some(consumed);

        if let TokenKind::Error = consumed.kind {
            self.error_at_token(&consumed, consumed.lexeme);
        }

        consumed
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn check_punct(&self, p: Punct) -> bool {
        self.check(TokenKind::Punct(p))
    }

    pub(crate) fn check_keyword(&self, kw: Keyword) -> bool {
        self.check(TokenKind::Keyword(kw))
    }

    pub(crate) fn current_punct(&self) -> Option<Punct> {
        match self.current.kind {
            TokenKind::Punct(p) => Some(p),
            _ => None,
        }
    }

    pub(crate) fn current_keyword(&self) -> Option<Keyword> {
        match self.current.kind {
            TokenKind::Keyword(k) => Some(k),
            _ => None,
        }
    }

    /// The current token is a type keyword (`int`/`float`/`char`/`void`).
    pub(crate) fn check_type(&self) -> bool {
        self.current_keyword().map(Keyword::is_type).unwrap_or(false)
    }

    pub(crate) fn match_punct(&mut self, p: Punct) -> bool {
        if self.check_punct(p) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn match_keyword(&mut self, kw: Keyword) -> bool {
        if self.check_keyword(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `current` if it is `kind`, else reports `message` at
    /// `current`'s position and returns `None` without advancing.
    pub(crate) fn consume_punct(&mut self, p: Punct, message: &str) -> Option<Token<'src>> {
        if self.check_punct(p) {
            Some(self.advance())
        } else {
            self.error(message);
            None
        }
    }

    pub(crate) fn consume_ident(&mut self, message: &str) -> Option<Token<'src>> {
        if self.check(TokenKind::Ident) {
            Some(self.advance())
        } else {
            self.error(message);
            None
        }
    }

    pub(crate) fn consume_type(&mut self, message: &str) -> Option<Keyword> {
        if let Some(kw) = self.current_keyword() {
            if kw.is_type() {
                self.advance();
                return Some(kw);
            }
        }
        self.error(message);
        None
    }

    // --- error reporting ---------------------------------------------------

    /// Reports `message` at the current token, then enters panic mode.
    /// Further errors are swallowed until [`Parser::synchronize`] runs.
    pub(crate) fn error(&mut self, message: &str) {
        let tok = self.current;
        self.error_at_token(&tok, message);
    }

    pub(crate) fn error_at_token(&mut self, token: &Token<'src>, message: &str) {
        if self.panic_mode {
            return;
        }
        self.panic_mode = true;
        self.had_error = true;
        self.handler.error_at(token.span(), message);
    }

    pub(crate) fn span_here(&self) -> Span {
        self.current.span()
    }

    /// Discards tokens until it finds a plausible declaration boundary: the
    /// token just consumed was a `;`, or the current token starts a new
    /// declaration or statement. Leaves panic mode so subsequent errors are
    /// reported again.
    pub(crate) fn synchronize(&mut self) {
        self.panic_mode = false;

        while !self.current.is_eof() {
            if let Some(prev) = self.previous {
                if prev.kind == TokenKind::Punct(Punct::Semicolon) {
                    return;
                }
            }

            match self.current.kind {
                TokenKind::Keyword(Keyword::Int)
                | TokenKind::Keyword(Keyword::Float)
                | TokenKind::Keyword(Keyword::Char)
                | TokenKind::Keyword(Keyword::Void)
                | TokenKind::Keyword(Keyword::If)
                | TokenKind::Keyword(Keyword::While)
                | TokenKind::Keyword(Keyword::For)
                | TokenKind::Keyword(Keyword::Return) => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(source: &str) -> (Program<'_>, Handler) {
        let handler = Handler::new();
        let program = {
            let mut parser = Parser::new(source, &handler);
            parser.parse()
        };
        (program, handler)
    }

    #[test]
    fn empty_program_parses_to_no_items() {
        let (program, handler) = parse_ok("");
        assert!(program.items.is_empty());
        assert!(!handler.has_errors());
    }

    #[test]
    fn distinguishes_function_from_variable_by_paren_lookahead() {
        let (program, handler) = parse_ok("पूर्णांक x;\nपूर्णांक f() { वापस 1; }");
        assert!(!handler.has_errors(), "{:?}", handler.diagnostics());
        assert_eq!(program.items.len(), 2);
        assert!(matches!(program.items[0], Item::Var(_)));
        assert!(matches!(program.items[1], Item::Function(_)));
    }

    #[test]
    fn binary_operators_left_associate() {
        let (program, handler) = parse_ok("पूर्णांक x = 1 - 2 - 3;");
        assert!(!handler.has_errors());
        let Item::Var(decl) = &program.items[0] else {
            panic!("expected var decl");
        };
        let Some(Expr::Binary(outer)) = &decl.init else {
            panic!("expected binary expr");
        };
        // (1 - 2) - 3: the left child is itself a binary subtraction.
        assert!(matches!(*outer.left, Expr::Binary(_)));
        assert!(matches!(*outer.right, Expr::Literal(_)));
    }

    #[test]
    fn assignment_is_right_associative() {
        let (program, handler) = parse_ok("पूर्णांक f() { x = y = 1; }");
        assert!(!handler.has_errors(), "{:?}", handler.diagnostics());
        let Item::Function(func) = &program.items[0] else {
            panic!("expected function");
        };
        let Item::Stmt(Stmt::Expr(stmt)) = &func.body.items[0] else {
            panic!("expected expr stmt");
        };
        let Expr::Assignment(outer) = &stmt.expr else {
            panic!("expected assignment");
        };
        assert!(matches!(*outer.value, Expr::Assignment(_)));
    }

    #[test]
    fn invalid_assignment_target_is_reported() {
        let (_program, handler) = parse_ok("पूर्णांक f() { 1 = 2; }");
        assert!(handler.has_errors());
    }

    #[test]
    fn missing_semicolon_recovers_at_next_declaration() {
        let (program, handler) = parse_ok("पूर्णांक x = 1\nपूर्णांक y = 2;");
        assert!(handler.has_errors());
        // The second declaration should still be recovered and parsed.
        assert!(program.items.iter().any(|i| matches!(i, Item::Var(v) if v.name.lexeme == "y")));
    }

    #[test]
    fn call_on_non_identifier_is_an_error() {
        let (_program, handler) = parse_ok("पूर्णांक f() { (1 + 2)(3); }");
        assert!(handler.has_errors());
    }

    #[test]
    fn too_many_parameters_is_an_error() {
        let source = "पूर्णांक f(पूर्णांक a, पूर्णांक b, पूर्णांक c, पूर्णांक d, पूर्णांक e, पूर्णांक g, पूर्णांक h, पूर्णांक i, पूर्णांक j) { }";
        let (_program, handler) = parse_ok(source);
        assert!(handler.has_errors());
    }
}
