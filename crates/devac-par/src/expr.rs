//! Expression parsing: one function per precedence level, lowest first,
//! mirroring the grammar in the module doc comment on [`crate::Parser`].
//!
//! ```text
//! expression  ::= assignment
//! assignment  ::= logicalOr ( '=' assignment )?
//! logicalOr   ::= logicalAnd ( '||' logicalAnd )*
//! logicalAnd  ::= equality   ( '&&' equality )*
//! equality    ::= comparison ( ('=='|'!=') comparison )*
//! comparison  ::= term       ( ('<'|'>'|'<='|'>=') term )*
//! term        ::= factor     ( ('+'|'-') factor )*
//! factor      ::= unary      ( ('*'|'/'|'%') unary )*
//! unary       ::= ('-'|'!') unary | call
//! call        ::= primary ( '(' args? ')' )?
//! primary     ::= NUMBER | STRING | IDENT | '(' expression ')'
//! ```
//!
//! All binary operators left-associate; building a left-deep tree out of a
//! `while` loop is what makes that so, the same trick every
//! precedence-climbing parser uses. Assignment is the one right-associating
//! production, so it recurses into itself instead of looping.

use devac_lex::{Punct, TokenKind};

use crate::ast::{AssignmentExpr, BinOp, BinaryExpr, CallExpr, Expr, LiteralExpr, UnOp, UnaryExpr};
use crate::Parser;

impl<'src, 'h> Parser<'src, 'h> {
    pub(crate) fn parse_expression(&mut self) -> Option<Expr<'src>> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Option<Expr<'src>> {
        let expr = self.parse_logical_or()?;

        if self.check_punct(Punct::Eq) {
            let eq = self.advance();
            let value = self.parse_assignment()?;
            return match expr {
                Expr::Variable(target) => {
                    let span = target.span().to(value.span());
                    Some(Expr::Assignment(AssignmentExpr {
                        target,
                        value: Box::new(value),
                        span,
                    }))
                }
                other => {
                    self.error_at_token(&eq, "Invalid assignment target.");
                    Some(other)
                }
            };
        }

        Some(expr)
    }

    fn parse_logical_or(&mut self) -> Option<Expr<'src>> {
        let mut left = self.parse_logical_and()?;
        while self.check_punct(Punct::OrOr) {
            self.advance();
            let right = self.parse_logical_and()?;
            left = self.make_binary(left, BinOp::Or, right);
        }
        Some(left)
    }

    fn parse_logical_and(&mut self) -> Option<Expr<'src>> {
        let mut left = self.parse_equality()?;
        while self.check_punct(Punct::AndAnd) {
            self.advance();
            let right = self.parse_equality()?;
            left = self.make_binary(left, BinOp::And, right);
        }
        Some(left)
    }

    fn parse_equality(&mut self) -> Option<Expr<'src>> {
        let mut left = self.parse_comparison()?;
        loop {
            let op = match self.current_punct() {
                Some(Punct::EqEq) => BinOp::EqEq,
                Some(Punct::NotEq) => BinOp::NotEq,
                _ => break,
            };
            self.advance();
            let right = self.parse_comparison()?;
            left = self.make_binary(left, op, right);
        }
        Some(left)
    }

    fn parse_comparison(&mut self) -> Option<Expr<'src>> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.current_punct() {
                Some(Punct::Lt) => BinOp::Lt,
                Some(Punct::Gt) => BinOp::Gt,
                Some(Punct::LtEq) => BinOp::LtEq,
                Some(Punct::GtEq) => BinOp::GtEq,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            left = self.make_binary(left, op, right);
        }
        Some(left)
    }

    fn parse_term(&mut self) -> Option<Expr<'src>> {
        let mut left = self.parse_factor()?;
        loop {
            let op = match self.current_punct() {
                Some(Punct::Plus) => BinOp::Add,
                Some(Punct::Minus) => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_factor()?;
            left = self.make_binary(left, op, right);
        }
        Some(left)
    }

    fn parse_factor(&mut self) -> Option<Expr<'src>> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.current_punct() {
                Some(Punct::Star) => BinOp::Mul,
                Some(Punct::Slash) => BinOp::Div,
                Some(Punct::Percent) => BinOp::Mod,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = self.make_binary(left, op, right);
        }
        Some(left)
    }

    fn parse_unary(&mut self) -> Option<Expr<'src>> {
        let op = match self.current_punct() {
            Some(Punct::Minus) => Some(UnOp::Neg),
            Some(Punct::Not) => Some(UnOp::Not),
            _ => None,
        };
        if let Some(op) = op {
            let start = self.advance();
            let operand = self.parse_unary()?;
            let span = start.span().to(operand.span());
            return Some(Expr::Unary(UnaryExpr {
                op,
                operand: Box::new(operand),
                span,
            }));
        }
        self.parse_call()
    }

    fn parse_call(&mut self) -> Option<Expr<'src>> {
        let primary = self.parse_primary()?;

        if self.check_punct(Punct::LParen) {
            let lparen = self.advance();
            let args = self.parse_args()?;
            let rparen = self.consume_punct(Punct::RParen, "Expected ')' after arguments.")?;

            return match primary {
                Expr::Variable(callee) => Some(Expr::Call(CallExpr {
                    span: callee.span().to(rparen.span()),
                    callee,
                    args,
                })),
                other => {
                    self.error_at_token(&lparen, "Can only call functions.");
                    Some(other)
                }
            };
        }

        Some(primary)
    }

    fn parse_args(&mut self) -> Option<Vec<Expr<'src>>> {
        let mut args = Vec::new();
        if self.check_punct(Punct::RParen) {
            return Some(args);
        }
        loop {
            args.push(self.parse_expression()?);
            if self.check_punct(Punct::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        Some(args)
    }

    fn parse_primary(&mut self) -> Option<Expr<'src>> {
        let tok = self.current();
        match tok.kind {
            TokenKind::Number(_) | TokenKind::Str => {
                self.advance();
                Some(Expr::Literal(LiteralExpr { token: tok }))
            }
            TokenKind::Ident => {
                self.advance();
                Some(Expr::Variable(tok))
            }
            TokenKind::Punct(Punct::LParen) => {
                self.advance();
                let inner = self.parse_expression()?;
                self.consume_punct(Punct::RParen, "Expected ')' after expression.")?;
                Some(inner)
            }
            TokenKind::Error => {
                // `advance` reports lexical-error tokens as it consumes them.
                self.advance();
                None
            }
            _ => {
                self.error_at_token(&tok, "Expected an expression.");
                None
            }
        }
    }

    fn make_binary(&self, left: Expr<'src>, op: BinOp, right: Expr<'src>) -> Expr<'src> {
        let span = left.span().to(right.span());
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            op,
            right: Box::new(right),
            span,
        })
    }
}
