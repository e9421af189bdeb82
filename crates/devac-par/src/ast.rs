//! AST node definitions.
//!
//! Every concrete node carries a `span` giving its {line, column} header
//! (and, via [`Span`], its byte extent). Declarations, statements, and
//! expressions are grouped the way the grammar in the parser groups them:
//! [`Item`] is what a `declaration` production in the grammar produces, and
//! both [`Program`] and [`Block`] hold an ordered `Vec<Item>` - a block's
//! contents really are "declarations-or-statements", not statements alone.
//!
//! Nodes own their children exclusively: there is no sharing and no cycles,
//! so dropping a `Program` drops everything reachable from it. `Variable`,
//! `Assignment`, and `Call` nodes hold a [`Token`] (the name token) rather
//! than a copied `String`, which means the AST borrows the source buffer for
//! as long as it exists - the source must outlive the tree.

use devac_lex::{Keyword, NumberLiteral, Punct, Token};
use devac_util::Span;

/// A complete source file: an ordered sequence of top-level items.
#[derive(Debug)]
pub struct Program<'src> {
    pub items: Vec<Item<'src>>,
}

/// A brace-delimited sequence of declarations-or-statements.
#[derive(Debug, Clone)]
pub struct Block<'src> {
    pub items: Vec<Item<'src>>,
    pub span: Span,
}

/// One element of a [`Program`] or [`Block`]: a declaration, or a bare
/// statement falling through the `declaration` grammar production.
#[derive(Debug, Clone)]
pub enum Item<'src> {
    Var(VarDecl<'src>),
    Function(FunctionDecl<'src>),
    Stmt(Stmt<'src>),
}

impl<'src> Item<'src> {
    pub fn span(&self) -> Span {
        match self {
            Item::Var(v) => v.span,
            Item::Function(f) => f.span,
            Item::Stmt(s) => s.span(),
        }
    }
}

/// `(int|float|char|void) IDENT ('=' expr)? ';'`
#[derive(Debug, Clone)]
pub struct VarDecl<'src> {
    pub ty: Keyword,
    pub name: Token<'src>,
    pub init: Option<Expr<'src>>,
    pub span: Span,
}

/// `(int|float|char|void) IDENT '(' params? ')' block`
#[derive(Debug, Clone)]
pub struct FunctionDecl<'src> {
    pub ret_ty: Keyword,
    pub name: Token<'src>,
    pub params: Vec<Param<'src>>,
    pub body: Block<'src>,
    pub span: Span,
}

/// `(int|float|char) IDENT`, one element of a function's parameter list.
#[derive(Debug, Clone)]
pub struct Param<'src> {
    pub ty: Keyword,
    pub name: Token<'src>,
}

#[derive(Debug, Clone)]
pub enum Stmt<'src> {
    If(IfStmt<'src>),
    While(WhileStmt<'src>),
    For(ForStmt<'src>),
    Return(ReturnStmt<'src>),
    Block(Block<'src>),
    Expr(ExprStmt<'src>),
}

impl<'src> Stmt<'src> {
    pub fn span(&self) -> Span {
        match self {
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::Return(s) => s.span,
            Stmt::Block(b) => b.span,
            Stmt::Expr(s) => s.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IfStmt<'src> {
    pub cond: Expr<'src>,
    pub then_branch: Box<Stmt<'src>>,
    pub else_branch: Option<Box<Stmt<'src>>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WhileStmt<'src> {
    pub cond: Expr<'src>,
    pub body: Box<Stmt<'src>>,
    pub span: Span,
}

/// The initializer clause of a `for` loop: empty, a variable declaration
/// (scoped to the loop), or a bare expression statement.
#[derive(Debug, Clone)]
pub enum ForInit<'src> {
    Empty,
    Var(VarDecl<'src>),
    Expr(ExprStmt<'src>),
}

#[derive(Debug, Clone)]
pub struct ForStmt<'src> {
    pub init: ForInit<'src>,
    pub cond: Option<Expr<'src>>,
    pub incr: Option<Expr<'src>>,
    pub body: Box<Stmt<'src>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt<'src> {
    pub value: Option<Expr<'src>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ExprStmt<'src> {
    pub expr: Expr<'src>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Expr<'src> {
    Literal(LiteralExpr<'src>),
    Variable(Token<'src>),
    Assignment(AssignmentExpr<'src>),
    Binary(BinaryExpr<'src>),
    Unary(UnaryExpr<'src>),
    Call(CallExpr<'src>),
}

impl<'src> Expr<'src> {
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(e) => e.token.span(),
            Expr::Variable(t) => t.span(),
            Expr::Assignment(e) => e.span,
            Expr::Binary(e) => e.span,
            Expr::Unary(e) => e.span,
            Expr::Call(e) => e.span,
        }
    }
}

/// A NUMBER or STRING token standing alone as an expression. The token is
/// kept verbatim (not pre-decoded into a separate value) so the emitter can
/// reproduce the original lexeme exactly.
#[derive(Debug, Clone)]
pub struct LiteralExpr<'src> {
    pub token: Token<'src>,
}

#[derive(Debug, Clone)]
pub struct AssignmentExpr<'src> {
    pub target: Token<'src>,
    pub value: Box<Expr<'src>>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    And,
    Or,
}

impl BinOp {
    pub fn from_punct(p: Punct) -> Option<BinOp> {
        Some(match p {
            Punct::Plus => BinOp::Add,
            Punct::Minus => BinOp::Sub,
            Punct::Star => BinOp::Mul,
            Punct::Slash => BinOp::Div,
            Punct::Percent => BinOp::Mod,
            Punct::EqEq => BinOp::EqEq,
            Punct::NotEq => BinOp::NotEq,
            Punct::Lt => BinOp::Lt,
            Punct::Gt => BinOp::Gt,
            Punct::LtEq => BinOp::LtEq,
            Punct::GtEq => BinOp::GtEq,
            Punct::AndAnd => BinOp::And,
            Punct::OrOr => BinOp::Or,
            _ => return None,
        })
    }

    pub fn as_c_str(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::EqEq => "==",
            BinOp::NotEq => "!=",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::LtEq => "<=",
            BinOp::GtEq => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(self, BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Mod)
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinOp::EqEq | BinOp::NotEq | BinOp::Lt | BinOp::Gt | BinOp::LtEq | BinOp::GtEq
        )
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinOp::And | BinOp::Or)
    }
}

#[derive(Debug, Clone)]
pub struct BinaryExpr<'src> {
    pub left: Box<Expr<'src>>,
    pub op: BinOp,
    pub right: Box<Expr<'src>>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,
    Not,
}

#[derive(Debug, Clone)]
pub struct UnaryExpr<'src> {
    pub op: UnOp,
    pub operand: Box<Expr<'src>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct CallExpr<'src> {
    pub callee: Token<'src>,
    pub args: Vec<Expr<'src>>,
    pub span: Span,
}

/// The Devanagari identifiers that the emitter rewrites to standard C
/// library calls instead of passing through verbatim. Picked to mirror the
/// informal "print"/"read" intrinsics of the language this was distilled
/// from; they are ordinary identifiers as far as the parser and analyzer
/// are concerned; only the emitter treats them specially.
pub const PRINT_INTRINSIC: &str = "छापो";
pub const READ_INTRINSIC: &str = "पढ़ो";
