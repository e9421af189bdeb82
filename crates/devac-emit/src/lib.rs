//! devac-emit - Serializes a checked AST to standard C source.
//!
//! The emitter is stateless with respect to the tree it walks: the only
//! state it carries across calls is the output buffer and the current
//! indentation depth (one level is four spaces). It assumes the AST has
//! already passed semantic analysis - it performs no checks of its own and
//! will happily serialize a program `devac-sem` would have rejected.

use devac_lex::{Keyword, NumberLiteral, TokenKind};
use devac_par::{
    Block, Expr, ForInit, FunctionDecl, IfStmt, Item, Param, Program, Stmt, UnOp, VarDecl,
    PRINT_INTRINSIC, READ_INTRINSIC,
};

const INDENT_WIDTH: usize = 4;

/// Entry point: serializes a whole program, including the fixed prologue.
pub fn emit(program: &Program) -> String {
    let mut emitter = Emitter::new();
    emitter.emit_program(program);
    emitter.output
}

pub struct Emitter {
    output: String,
    indent: usize,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
        }
    }

    pub fn emit_program(&mut self, program: &Program) {
        self.output.push_str("#include <stdio.h>\n");
        self.output.push_str("#include <stdlib.h>\n");

        for item in &program.items {
            self.output.push('\n');
            self.emit_item(item);
        }
    }

    fn emit_item(&mut self, item: &Item) {
        match item {
            Item::Var(v) => self.emit_var_decl(v),
            Item::Function(f) => self.emit_function_decl(f),
            Item::Stmt(s) => self.emit_stmt(s),
        }
    }

    fn emit_var_decl(&mut self, decl: &VarDecl) {
        self.write_indent();
        self.output.push_str(keyword_c_str(decl.ty));
        self.output.push(' ');
        self.output.push_str(decl.name.lexeme);
        if let Some(init) = &decl.init {
            self.output.push_str(" = ");
            self.emit_expr(init);
        }
        self.output.push_str(";\n");
    }

    fn emit_function_decl(&mut self, func: &FunctionDecl) {
        self.write_indent();
        self.output.push_str(keyword_c_str(func.ret_ty));
        self.output.push(' ');
        self.output.push_str(func.name.lexeme);
        self.output.push('(');
        self.emit_params(&func.params);
        self.output.push_str(") ");
        self.emit_block(&func.body);
    }

    fn emit_params(&mut self, params: &[Param]) {
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.output.push_str(keyword_c_str(param.ty));
            self.output.push(' ');
            self.output.push_str(param.name.lexeme);
        }
    }

    fn emit_block(&mut self, block: &Block) {
        self.output.push_str("{\n");
        self.indent += 1;
        for item in &block.items {
            self.emit_item(item);
        }
        self.indent -= 1;
        self.write_indent();
        self.output.push_str("}\n");
    }

    fn emit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::If(s) => self.emit_if(s),
            Stmt::While(s) => self.emit_while(s),
            Stmt::For(s) => self.emit_for(s),
            Stmt::Return(s) => self.emit_return(s.value.as_ref()),
            Stmt::Block(b) => {
                self.write_indent();
                self.emit_block(b);
            }
            Stmt::Expr(s) => {
                self.write_indent();
                self.emit_expr(&s.expr);
                self.output.push_str(";\n");
            }
        }
    }

    fn emit_if(&mut self, stmt: &IfStmt) {
        self.write_indent();
        self.output.push_str("if (");
        self.emit_expr(&stmt.cond);
        self.output.push_str(") ");
        self.emit_branch(&stmt.then_branch);
        if let Some(else_branch) = &stmt.else_branch {
            self.write_indent();
            self.output.push_str("else ");
            self.emit_branch(else_branch);
        }
    }

    fn emit_while(&mut self, stmt: &devac_par::WhileStmt) {
        self.write_indent();
        self.output.push_str("while (");
        self.emit_expr(&stmt.cond);
        self.output.push_str(") ");
        self.emit_branch(&stmt.body);
    }

    fn emit_for(&mut self, stmt: &devac_par::ForStmt) {
        self.write_indent();
        self.output.push_str("for (");
        match &stmt.init {
            ForInit::Empty => {}
            ForInit::Var(v) => {
                self.output.push_str(keyword_c_str(v.ty));
                self.output.push(' ');
                self.output.push_str(v.name.lexeme);
                if let Some(init) = &v.init {
                    self.output.push_str(" = ");
                    self.emit_expr(init);
                }
            }
            ForInit::Expr(e) => self.emit_expr(&e.expr),
        }
        self.output.push_str("; ");
        if let Some(cond) = &stmt.cond {
            self.emit_expr(cond);
        }
        self.output.push_str("; ");
        if let Some(incr) = &stmt.incr {
            self.emit_expr(incr);
        }
        self.output.push_str(") ");
        self.emit_branch(&stmt.body);
    }

    fn emit_return(&mut self, value: Option<&Expr>) {
        self.write_indent();
        self.output.push_str("return");
        if let Some(value) = value {
            self.output.push(' ');
            self.emit_expr(value);
        }
        self.output.push_str(";\n");
    }

    /// Emits a statement that serves as a loop or branch body. A `Block`
    /// already carries its own braces; anything else is indented as a
    /// single statement.
    fn emit_branch(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(b) => self.emit_block(b),
            other => {
                self.output.push('\n');
                self.indent += 1;
                self.emit_stmt(other);
                self.indent -= 1;
            }
        }
    }

    fn emit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(lit) => self.emit_literal(lit),
            Expr::Variable(tok) => self.output.push_str(tok.lexeme),
            Expr::Assignment(a) => {
                self.output.push_str(a.target.lexeme);
                self.output.push_str(" = ");
                self.emit_expr(&a.value);
            }
            Expr::Binary(b) => {
                self.output.push('(');
                self.emit_expr(&b.left);
                self.output.push(' ');
                self.output.push_str(b.op.as_c_str());
                self.output.push(' ');
                self.emit_expr(&b.right);
                self.output.push(')');
            }
            Expr::Unary(u) => match u.op {
                UnOp::Neg => {
                    self.output.push_str("(-");
                    self.emit_expr(&u.operand);
                    self.output.push(')');
                }
                UnOp::Not => {
                    self.output.push('!');
                    self.emit_expr(&u.operand);
                }
            },
            Expr::Call(c) => {
                let name = c.callee.lexeme;
                if name == PRINT_INTRINSIC {
                    self.output.push_str("printf");
                } else if name == READ_INTRINSIC {
                    self.output.push_str("scanf");
                } else {
                    self.output.push_str(name);
                }
                self.output.push('(');
                for (i, arg) in c.args.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.emit_expr(arg);
                }
                self.output.push(')');
            }
        }
    }

    fn emit_literal(&mut self, lit: &devac_par::LiteralExpr) {
        match lit.token.kind {
            TokenKind::Number(NumberLiteral::Int(_)) | TokenKind::Number(NumberLiteral::Float(_)) => {
                self.output.push_str(lit.token.lexeme);
            }
            TokenKind::Str => {
                self.output.push('"');
                self.output.push_str(lit.token.lexeme);
                self.output.push('"');
            }
            _ => {}
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent * INDENT_WIDTH {
            self.output.push(' ');
        }
    }
}

fn keyword_c_str(kw: Keyword) -> &'static str {
    match kw {
        Keyword::Int => "int",
        Keyword::Float => "float",
        Keyword::Char => "char",
        Keyword::Void => "void",
        _ => "/* unknown type */",
    }
}
