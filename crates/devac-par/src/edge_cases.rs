//! Edge case tests for devac-par.

use devac_util::Handler;

use crate::{Expr, ForInit, Item, Parser, Stmt};

fn parse(source: &str) -> (crate::Program<'_>, Handler) {
    let handler = Handler::new();
    let program = {
        let mut parser = Parser::new(source, &handler);
        parser.parse()
    };
    (program, handler)
}

#[test]
fn nested_blocks_scope_without_error() {
    let (program, handler) = parse("पूर्णांक f() { { पूर्णांक x = 1; } }");
    assert!(!handler.has_errors(), "{:?}", handler.diagnostics());
    assert_eq!(program.items.len(), 1);
}

#[test]
fn empty_for_clauses_are_all_optional() {
    let (program, handler) = parse("पूर्णांक f() { दौर (;;) { } }");
    assert!(!handler.has_errors(), "{:?}", handler.diagnostics());
    let Item::Function(func) = &program.items[0] else {
        panic!("expected function");
    };
    let Item::Stmt(Stmt::For(for_stmt)) = &func.body.items[0] else {
        panic!("expected for statement");
    };
    assert!(matches!(for_stmt.init, ForInit::Empty));
    assert!(for_stmt.cond.is_none());
    assert!(for_stmt.incr.is_none());
}

#[test]
fn for_loop_with_declared_counter() {
    let (program, handler) =
        parse("पूर्णांक f() { दौर (पूर्णांक i = 0; i < 10; i = i + 1) { } }");
    assert!(!handler.has_errors(), "{:?}", handler.diagnostics());
    let Item::Function(func) = &program.items[0] else {
        panic!("expected function");
    };
    let Item::Stmt(Stmt::For(for_stmt)) = &func.body.items[0] else {
        panic!("expected for statement");
    };
    assert!(matches!(for_stmt.init, ForInit::Var(_)));
    assert!(for_stmt.cond.is_some());
    assert!(for_stmt.incr.is_some());
}

#[test]
fn if_without_else_has_no_else_branch() {
    let (program, handler) = parse("पूर्णांक f() { अगर (1) { } }");
    assert!(!handler.has_errors());
    let Item::Function(func) = &program.items[0] else {
        panic!("expected function");
    };
    let Item::Stmt(Stmt::If(if_stmt)) = &func.body.items[0] else {
        panic!("expected if statement");
    };
    assert!(if_stmt.else_branch.is_none());
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    let (program, handler) = parse("पूर्णांक f() { अगर (1) अगर (2) वापस 1; वरना वापस 2; }");
    assert!(!handler.has_errors(), "{:?}", handler.diagnostics());
    let Item::Function(func) = &program.items[0] else {
        panic!("expected function");
    };
    let Item::Stmt(Stmt::If(outer)) = &func.body.items[0] else {
        panic!("expected outer if");
    };
    assert!(outer.else_branch.is_none());
    let Stmt::If(inner) = outer.then_branch.as_ref() else {
        panic!("expected nested if as then-branch");
    };
    assert!(inner.else_branch.is_some());
}

#[test]
fn do_keyword_in_statement_position_is_an_error() {
    let (_program, handler) = parse("पूर्णांक f() { करो }");
    assert!(handler.has_errors());
}

#[test]
fn break_keyword_in_statement_position_is_an_error() {
    let (_program, handler) = parse("पूर्णांक f() { जबतक (1) { रुको; } }");
    assert!(handler.has_errors());
}

#[test]
fn continue_keyword_in_statement_position_is_an_error() {
    let (_program, handler) = parse("पूर्णांक f() { जबतक (1) { जारी; } }");
    assert!(handler.has_errors());
}

#[test]
fn bare_return_has_no_value() {
    let (program, handler) = parse("शून्य f() { वापस; }");
    assert!(!handler.has_errors());
    let Item::Function(func) = &program.items[0] else {
        panic!("expected function");
    };
    let Item::Stmt(Stmt::Return(ret)) = &func.body.items[0] else {
        panic!("expected return statement");
    };
    assert!(ret.value.is_none());
}

#[test]
fn parenthesized_expression_overrides_precedence() {
    let (program, handler) = parse("पूर्णांक x = (1 + 2) * 3;");
    assert!(!handler.has_errors());
    let Item::Var(decl) = &program.items[0] else {
        panic!("expected var decl");
    };
    let Some(Expr::Binary(mul)) = &decl.init else {
        panic!("expected top-level multiplication");
    };
    assert!(matches!(*mul.left, Expr::Binary(_)));
}

#[test]
fn function_call_with_multiple_arguments() {
    let (program, handler) = parse("पूर्णांक x = f(1, 2, 3);");
    assert!(!handler.has_errors(), "{:?}", handler.diagnostics());
    let Item::Var(decl) = &program.items[0] else {
        panic!("expected var decl");
    };
    let Some(Expr::Call(call)) = &decl.init else {
        panic!("expected call expression");
    };
    assert_eq!(call.args.len(), 3);
}

#[test]
fn logical_operators_chain_left_to_right() {
    let (program, handler) = parse("पूर्णांक x = a || b && c;");
    assert!(!handler.has_errors());
    let Item::Var(decl) = &program.items[0] else {
        panic!("expected var decl");
    };
    // `&&` binds tighter than `||`, so the top node is the Or.
    let Some(Expr::Binary(top)) = &decl.init else {
        panic!("expected binary expr");
    };
    assert_eq!(top.op, crate::BinOp::Or);
    assert!(matches!(*top.right, Expr::Binary(_)));
}
