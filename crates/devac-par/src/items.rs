//! Top-level and block-level declaration parsing: `declaration`, the
//! function/variable split, parameter lists, and the synchronizing wrapper
//! every caller of `declaration` goes through.

use devac_lex::{Punct, TokenKind};

use crate::ast::{Block, FunctionDecl, Item, Param, VarDecl};
use crate::Parser;

/// Function parameter lists are capped at this many entries; a `funcTail`
/// that collects more reports an error but keeps parsing so the rest of the
/// file is still checked.
const MAX_PARAMS: usize = 8;

impl<'src, 'h> Parser<'src, 'h> {
    /// `declaration ::= funcDecl | varDecl | statement`, with panic-mode
    /// recovery wrapped around the whole thing: a malformed declaration
    /// synchronizes to the next plausible boundary and yields no item
    /// instead of aborting the file.
    pub(crate) fn declaration(&mut self) -> Option<Item<'src>> {
        let item = if self.check_type() {
            self.type_led_declaration()
        } else {
            self.statement().map(Item::Stmt)
        };

        if self.panic_mode {
            self.synchronize();
        }

        item
    }

    /// Entered once `current` is known to be a type keyword. Consumes the
    /// type and name, then uses one token of lookahead to decide between a
    /// function and a variable declaration.
    fn type_led_declaration(&mut self) -> Option<Item<'src>> {
        let start = self.span_here();
        let ty = self.consume_type("Expected a type.")?;
        let name = self.consume_ident("Expected an identifier.")?;

        if self.peek_next().kind == TokenKind::Punct(Punct::LParen) {
            self.func_tail(start, ty, name).map(Item::Function)
        } else {
            self.var_tail(start, ty, name).map(Item::Var)
        }
    }

    /// `funcTail ::= '(' params? ')' block`, called after type and name have
    /// already been consumed.
    fn func_tail(
        &mut self,
        start: devac_util::Span,
        ret_ty: devac_lex::Keyword,
        name: devac_lex::Token<'src>,
    ) -> Option<FunctionDecl<'src>> {
        self.consume_punct(Punct::LParen, "Expected '(' after function name.")?;
        let params = self.params()?;
        self.consume_punct(Punct::RParen, "Expected ')' after parameters.")?;
        let body = self.block()?;
        let span = start.to(body.span);
        Some(FunctionDecl {
            ret_ty,
            name,
            params,
            body,
            span,
        })
    }

    fn params(&mut self) -> Option<Vec<Param<'src>>> {
        let mut params = Vec::new();
        if self.check_punct(Punct::RParen) {
            return Some(params);
        }
        loop {
            let param = self.param()?;
            params.push(param);
            if params.len() > MAX_PARAMS {
                self.error("Can't have more than 8 parameters.");
            }
            if self.check_punct(Punct::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        Some(params)
    }

    fn param(&mut self) -> Option<Param<'src>> {
        let ty = self.consume_type("Expected a parameter type.")?;
        let name = self.consume_ident("Expected a parameter name.")?;
        Some(Param { ty, name })
    }

    /// `varTail ::= ('=' expression)? ';'`, called after type and name have
    /// already been consumed.
    fn var_tail(
        &mut self,
        start: devac_util::Span,
        ty: devac_lex::Keyword,
        name: devac_lex::Token<'src>,
    ) -> Option<VarDecl<'src>> {
        let init = if self.match_punct(Punct::Eq) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        let semi = self.consume_punct(Punct::Semicolon, "Expected ';' after variable declaration.")?;
        let span = start.to(semi.span());
        Some(VarDecl { ty, name, init, span })
    }

    /// `block ::= '{' declaration* '}'`
    pub(crate) fn block(&mut self) -> Option<Block<'src>> {
        let open = self.consume_punct(Punct::LBrace, "Expected '{' before block.")?;
        let mut items = Vec::new();
        while !self.check_punct(Punct::RBrace) && !self.current().is_eof() {
            if let Some(item) = self.declaration() {
                items.push(item);
            }
        }
        let close = self.consume_punct(Punct::RBrace, "Expected '}' after block.")?;
        Some(Block {
            items,
            span: open.span().to(close.span()),
        })
    }
}
