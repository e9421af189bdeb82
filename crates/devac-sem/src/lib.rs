//! devac-sem - Two-pass semantic analysis.
//!
//! Pass one registers every top-level function's signature so calls can
//! forward-reference a function defined later in the file. Pass two walks
//! every declaration and statement, inferring and checking types as it
//! goes and threading the enclosing function's return type through nested
//! blocks for `return` validation. Neither pass builds a separate
//! typed tree - diagnostics are the only output besides a pass/fail flag;
//! `devac-emit` walks the original AST once analysis has accepted it.

mod scope;
mod types;

#[cfg(test)]
mod edge_cases;

pub use scope::{Symbol, SymbolKind, SymbolTable};
pub use types::Type;

use devac_par::{
    AssignmentExpr, BinOp, BinaryExpr, Block, CallExpr, Expr, ForInit, ForStmt, FunctionDecl,
    IfStmt, Item, LiteralExpr, Program, ReturnStmt, Stmt, UnOp, UnaryExpr, VarDecl, WhileStmt,
    PRINT_INTRINSIC, READ_INTRINSIC,
};
use devac_lex::NumberLiteral;
use devac_util::Handler;

pub struct SemanticAnalyzer<'h> {
    table: SymbolTable,
    handler: &'h Handler,
    current_return: Option<Type>,
    error_count: usize,
}

impl<'h> SemanticAnalyzer<'h> {
    pub fn new(handler: &'h Handler) -> Self {
        Self {
            table: SymbolTable::new(),
            handler,
            current_return: None,
            error_count: 0,
        }
    }

    /// Runs both passes over `program`. Returns `true` iff no semantic
    /// error was reported - the emitter must not run otherwise.
    pub fn analyze(&mut self, program: &Program) -> bool {
        self.collect_functions(program);
        for item in &program.items {
            self.analyze_top_item(item);
        }
        self.error_count == 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    // --- pass 1 --------------------------------------------------------

    fn collect_functions(&mut self, program: &Program) {
        for item in &program.items {
            if let Item::Function(func) = item {
                let return_type = Type::from_keyword(func.ret_ty);
                let params = func.params.iter().map(|p| Type::from_keyword(p.ty)).collect();
                let kind = SymbolKind::Function { return_type, params };
                if !self.table.declare(func.name.lexeme, kind) {
                    self.error(func.span, format!("Function '{}' is already declared.", func.name.lexeme));
                }
            }
        }
    }

    // --- pass 2 ----------------------------------------------------------

    fn analyze_top_item(&mut self, item: &Item) {
        match item {
            Item::Var(v) => self.analyze_var_decl(v),
            Item::Function(f) => self.analyze_function(f),
            Item::Stmt(s) => self.analyze_stmt(s),
        }
    }

    fn analyze_function(&mut self, func: &FunctionDecl) {
        let return_type = Type::from_keyword(func.ret_ty);
        let previous_return = self.current_return.replace(return_type);

        self.table.enter_scope();
        for param in &func.params {
            let kind = SymbolKind::Variable(Type::from_keyword(param.ty));
            if !self.table.declare(param.name.lexeme, kind) {
                self.error(func.span, format!("Parameter '{}' is already declared.", param.name.lexeme));
            }
        }
        self.analyze_block_items(&func.body);
        self.table.exit_scope();

        self.current_return = previous_return;
    }

    fn analyze_var_decl(&mut self, decl: &VarDecl) {
        let declared = Type::from_keyword(decl.ty);
        if let Some(init) = &decl.init {
            let inferred = self.infer_expr(init);
            if !declared.compatible(inferred) {
                self.error(decl.span, "Type mismatch in variable initialization.");
            }
        }
        let kind = SymbolKind::Variable(declared);
        if !self.table.declare(decl.name.lexeme, kind) {
            self.error(decl.span, format!("Variable '{}' is already declared in this scope.", decl.name.lexeme));
        }
    }

    /// Analyzes a block already known to need its own scope: opens one,
    /// walks every item (rejecting nested function declarations, which the
    /// grammar can produce but the language does not support), closes it.
    fn analyze_block(&mut self, block: &Block) {
        self.table.enter_scope();
        self.analyze_block_items(block);
        self.table.exit_scope();
    }

    /// Walks a block's items without touching scope - used for a function
    /// body, whose scope is opened by the caller so parameters and locals
    /// share one depth.
    fn analyze_block_items(&mut self, block: &Block) {
        for item in &block.items {
            match item {
                Item::Var(v) => self.analyze_var_decl(v),
                Item::Function(f) => {
                    self.error(f.span, "Nested function declarations are not supported.");
                }
                Item::Stmt(s) => self.analyze_stmt(s),
            }
        }
    }

    fn analyze_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::If(s) => self.analyze_if(s),
            Stmt::While(s) => self.analyze_while(s),
            Stmt::For(s) => self.analyze_for(s),
            Stmt::Return(s) => self.analyze_return(s),
            Stmt::Block(b) => self.analyze_block(b),
            Stmt::Expr(s) => {
                self.infer_expr(&s.expr);
            }
        }
    }

    fn analyze_if(&mut self, stmt: &IfStmt) {
        self.check_condition(&stmt.cond);
        self.analyze_stmt(&stmt.then_branch);
        if let Some(else_branch) = &stmt.else_branch {
            self.analyze_stmt(else_branch);
        }
    }

    fn analyze_while(&mut self, stmt: &WhileStmt) {
        self.check_condition(&stmt.cond);
        self.analyze_stmt(&stmt.body);
    }

    fn analyze_for(&mut self, stmt: &ForStmt) {
        self.table.enter_scope();
        match &stmt.init {
            ForInit::Empty => {}
            ForInit::Var(v) => self.analyze_var_decl(v),
            ForInit::Expr(e) => {
                self.infer_expr(&e.expr);
            }
        }
        if let Some(cond) = &stmt.cond {
            self.check_condition(cond);
        }
        if let Some(incr) = &stmt.incr {
            self.infer_expr(incr);
        }
        self.analyze_stmt(&stmt.body);
        self.table.exit_scope();
    }

    fn analyze_return(&mut self, stmt: &ReturnStmt) {
        let return_type = self.current_return.unwrap_or(Type::Error);
        match (&stmt.value, return_type) {
            (Some(_), Type::Void) => {
                self.error(stmt.span, "Cannot return a value from a void function.");
            }
            (None, ty) if ty != Type::Void => {
                self.error(stmt.span, "Missing return value in non-void function.");
            }
            (Some(value), expected) => {
                let inferred = self.infer_expr(value);
                if !expected.compatible(inferred) {
                    self.error(stmt.span, "Type mismatch in return statement.");
                }
            }
            (None, _) => {}
        }
    }

    /// Shared by `if`/`while`/`for`: the condition must be an integer (the
    /// language has no boolean type).
    fn check_condition(&mut self, cond: &Expr) {
        let ty = self.infer_expr(cond);
        if !ty.is_error() && ty != Type::Int {
            self.error(cond.span(), "Condition must be a boolean expression.");
        }
    }

    // --- expression type inference ---------------------------------------

    fn infer_expr(&mut self, expr: &Expr) -> Type {
        match expr {
            Expr::Literal(lit) => self.infer_literal(lit),
            Expr::Variable(tok) => self.infer_variable(tok.lexeme, expr),
            Expr::Assignment(a) => self.infer_assignment(a),
            Expr::Binary(b) => self.infer_binary(b),
            Expr::Unary(u) => self.infer_unary(u),
            Expr::Call(c) => self.infer_call(c),
        }
    }

    fn infer_literal(&mut self, lit: &LiteralExpr) -> Type {
        match lit.token.kind {
            devac_lex::TokenKind::Number(NumberLiteral::Int(_)) => Type::Int,
            devac_lex::TokenKind::Number(NumberLiteral::Float(_)) => Type::Float,
            devac_lex::TokenKind::Str => Type::Char,
            _ => Type::Error,
        }
    }

    fn infer_variable(&mut self, name: &str, expr: &Expr) -> Type {
        match self.table.lookup(name).cloned() {
            None => {
                self.error(expr.span(), "Undefined variable.");
                Type::Error
            }
            Some(Symbol { kind: SymbolKind::Function { .. }, .. }) => {
                self.error(expr.span(), format!("'{name}' is a function, not a variable."));
                Type::Error
            }
            Some(Symbol { kind: SymbolKind::Variable(ty), .. }) => ty,
        }
    }

    fn infer_assignment(&mut self, expr: &AssignmentExpr) -> Type {
        let target_ty = match self.table.lookup(expr.target.lexeme).cloned() {
            None => {
                self.error(expr.target.span(), "Undefined variable.");
                Type::Error
            }
            Some(Symbol { kind: SymbolKind::Function { .. }, .. }) => {
                self.error(expr.target.span(), "Cannot assign to a function.");
                Type::Error
            }
            Some(Symbol { kind: SymbolKind::Variable(ty), .. }) => ty,
        };

        let value_ty = self.infer_expr(&expr.value);
        if !target_ty.compatible(value_ty) {
            self.error(expr.span, "Type mismatch in assignment.");
        }
        value_ty
    }

    fn infer_binary(&mut self, expr: &BinaryExpr) -> Type {
        let left = self.infer_expr(&expr.left);
        let right = self.infer_expr(&expr.right);

        if expr.op.is_arithmetic() {
            if left.is_error() || right.is_error() {
                return Type::Error;
            }
            if !left.is_numeric() || !right.is_numeric() {
                self.error(expr.span, "Operands must be numeric.");
                return Type::Error;
            }
            return if left == Type::Float || right == Type::Float {
                Type::Float
            } else {
                Type::Int
            };
        }

        if expr.op.is_comparison() {
            if left.is_error() || right.is_error() {
                return Type::Int;
            }
            if left != right {
                self.error(expr.span, "Operand types must match.");
            }
            return Type::Int;
        }

        debug_assert!(expr.op.is_logical());
        if left.is_error() || right.is_error() {
            return Type::Int;
        }
        if left != Type::Int || right != Type::Int {
            self.error(expr.span, "Operands must be integers.");
        }
        Type::Int
    }

    fn infer_unary(&mut self, expr: &UnaryExpr) -> Type {
        let operand = self.infer_expr(&expr.operand);
        if operand.is_error() {
            return Type::Error;
        }
        match expr.op {
            UnOp::Neg => {
                if !operand.is_numeric() {
                    self.error(expr.span, "Operand must be numeric.");
                    return Type::Error;
                }
                operand
            }
            UnOp::Not => {
                if operand != Type::Int {
                    self.error(expr.span, "Operand must be an integer.");
                    return Type::Error;
                }
                Type::Int
            }
        }
    }

    fn infer_call(&mut self, expr: &CallExpr) -> Type {
        let name = expr.callee.lexeme;
        if name == PRINT_INTRINSIC || name == READ_INTRINSIC {
            for arg in &expr.args {
                self.infer_expr(arg);
            }
            return Type::Void;
        }

        let (return_type, params) = match self.table.lookup(name).cloned() {
            None => {
                self.error(expr.callee.span(), "Undefined function.");
                for arg in &expr.args {
                    self.infer_expr(arg);
                }
                return Type::Error;
            }
            Some(Symbol { kind: SymbolKind::Variable(_), .. }) => {
                self.error(expr.callee.span(), format!("'{name}' is not a function."));
                for arg in &expr.args {
                    self.infer_expr(arg);
                }
                return Type::Error;
            }
            Some(Symbol { kind: SymbolKind::Function { return_type, params }, .. }) => {
                (return_type, params)
            }
        };

        if expr.args.len() != params.len() {
            self.error(expr.span, format!("Wrong number of arguments to '{name}'."));
        }

        for (arg, expected) in expr.args.iter().zip(params.iter()) {
            let inferred = self.infer_expr(arg);
            if !expected.compatible(inferred) {
                self.error(arg.span(), "Argument type mismatch.");
            }
        }
        // Any extra arguments past the declared count are still analyzed so
        // their own errors aren't silently dropped.
        for arg in expr.args.iter().skip(params.len()) {
            self.infer_expr(arg);
        }

        return_type
    }

    fn error(&mut self, span: devac_util::Span, message: impl Into<String>) {
        self.error_count += 1;
        self.handler.error_at(span, message);
    }
}
