//! Statement parsing: everything that can appear inside a [`crate::Block`]
//! other than a declaration.
//!
//! `do`, `break`, and `continue` tokenize (see `devac-lex`) but have no
//! production here: the grammar this parser implements never reaches them in
//! statement position, so encountering one is reported as an error rather
//! than silently accepted or panicking the parser itself.

use devac_lex::{Keyword, Punct};

use crate::ast::{ExprStmt, ForInit, ForStmt, IfStmt, ReturnStmt, Stmt, VarDecl, WhileStmt};
use crate::Parser;

impl<'src, 'h> Parser<'src, 'h> {
    /// `statement ::= ifStmt | whileStmt | forStmt | returnStmt | block | exprStmt`
    pub(crate) fn statement(&mut self) -> Option<Stmt<'src>> {
        if self.check_keyword(Keyword::If) {
            return self.if_statement();
        }
        if self.check_keyword(Keyword::While) {
            return self.while_statement();
        }
        if self.check_keyword(Keyword::For) {
            return self.for_statement();
        }
        if self.check_keyword(Keyword::Return) {
            return self.return_statement();
        }
        if self.check_punct(Punct::LBrace) {
            return self.block().map(Stmt::Block);
        }
        if let Some(kw) = self.current_keyword() {
            if matches!(kw, Keyword::Do | Keyword::Break | Keyword::Continue) {
                let tok = self.current();
                self.error_at_token(&tok, "This statement is not supported.");
                self.advance();
                return None;
            }
        }
        self.expr_statement().map(Stmt::Expr)
    }

    /// `ifStmt ::= 'if' '(' expression ')' statement ('else' statement)?`
    fn if_statement(&mut self) -> Option<Stmt<'src>> {
        let start = self.advance();
        self.consume_punct(Punct::LParen, "Expected '(' after 'if'.")?;
        let cond = self.parse_expression()?;
        self.consume_punct(Punct::RParen, "Expected ')' after condition.")?;
        let then_branch = Box::new(self.statement()?);

        let (else_branch, end_span) = if self.match_keyword(Keyword::Else) {
            let branch = self.statement()?;
            let span = branch.span();
            (Some(Box::new(branch)), span)
        } else {
            (None, then_branch.span())
        };

        let span = start.span().to(end_span);
        Some(Stmt::If(IfStmt {
            cond,
            then_branch,
            else_branch,
            span,
        }))
    }

    /// `whileStmt ::= 'while' '(' expression ')' statement`
    fn while_statement(&mut self) -> Option<Stmt<'src>> {
        let start = self.advance();
        self.consume_punct(Punct::LParen, "Expected '(' after 'while'.")?;
        let cond = self.parse_expression()?;
        self.consume_punct(Punct::RParen, "Expected ')' after condition.")?;
        let body = Box::new(self.statement()?);
        let span = start.span().to(body.span());
        Some(Stmt::While(WhileStmt { cond, body, span }))
    }

    /// `forStmt ::= 'for' '(' forInit ';' expression? ';' expression? ')' statement`
    ///
    /// `forInit` is itself `';' | varDecl | exprStmt` - a variable
    /// declaration or bare expression, each already terminated by the `;'
    /// that separates it from the condition clause, or nothing at all.
    fn for_statement(&mut self) -> Option<Stmt<'src>> {
        let start = self.advance();
        self.consume_punct(Punct::LParen, "Expected '(' after 'for'.")?;

        let init = if self.match_punct(Punct::Semicolon) {
            ForInit::Empty
        } else if self.check_type() {
            ForInit::Var(self.for_var_decl()?)
        } else {
            ForInit::Expr(self.expr_statement()?)
        };

        let cond = if self.check_punct(Punct::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.consume_punct(Punct::Semicolon, "Expected ';' after loop condition.")?;

        let incr = if self.check_punct(Punct::RParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.consume_punct(Punct::RParen, "Expected ')' after for clauses.")?;

        let body = Box::new(self.statement()?);
        let span = start.span().to(body.span());
        Some(Stmt::For(ForStmt {
            init,
            cond,
            incr,
            body,
            span,
        }))
    }

    /// A variable declaration used only inside a `for` initializer: the type
    /// keyword is already known to be present (checked by the caller), so
    /// this just consumes type, name, optional initializer, and `;'.
    fn for_var_decl(&mut self) -> Option<VarDecl<'src>> {
        let start = self.span_here();
        let ty = self.consume_type("Expected a type.")?;
        let name = self.consume_ident("Expected an identifier.")?;
        let init = if self.match_punct(Punct::Eq) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        let semi = self.consume_punct(Punct::Semicolon, "Expected ';' after loop initializer.")?;
        let span = start.to(semi.span());
        Some(VarDecl { ty, name, init, span })
    }

    /// `returnStmt ::= 'return' expression? ';'`
    fn return_statement(&mut self) -> Option<Stmt<'src>> {
        let start = self.advance();
        let value = if self.check_punct(Punct::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        let semi = self.consume_punct(Punct::Semicolon, "Expected ';' after return value.")?;
        let span = start.span().to(semi.span());
        Some(Stmt::Return(ReturnStmt { value, span }))
    }

    /// `exprStmt ::= expression ';'`
    fn expr_statement(&mut self) -> Option<ExprStmt<'src>> {
        let expr = self.parse_expression()?;
        let semi = self.consume_punct(Punct::Semicolon, "Expected ';' after expression.")?;
        let span = expr.span().to(semi.span());
        Some(ExprStmt { expr, span })
    }
}
