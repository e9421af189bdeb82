//! Edge case tests for devac-sem.

use devac_par::Parser;
use devac_util::Handler;

use crate::SemanticAnalyzer;

fn analyze(source: &str) -> (bool, Handler) {
    let handler = Handler::new();
    let program = {
        let mut parser = Parser::new(source, &handler);
        parser.parse()
    };
    assert!(!handler.has_errors(), "parse errors: {:?}", handler.diagnostics());
    let ok = SemanticAnalyzer::new(&handler).analyze(&program);
    (ok, handler)
}

#[test]
fn scope_isolation_across_sibling_blocks() {
    let (ok, handler) = analyze(
        "पूर्णांक f() { { पूर्णांक x = 1; } वापस x; }",
    );
    assert!(!ok, "{:?}", handler.diagnostics());
}

#[test]
fn variable_declared_in_one_block_invisible_to_another() {
    let (ok, _handler) = analyze(
        "शून्य f() { { पूर्णांक x = 1; } { x = 2; } वापस; }",
    );
    assert!(!ok);
}

#[test]
fn parameter_is_visible_inside_function_body() {
    let (ok, handler) = analyze("पूर्णांक f(पूर्णांक x) { वापस x; }");
    assert!(ok, "{:?}", handler.diagnostics());
}

#[test]
fn integer_condition_is_accepted() {
    let (ok, handler) = analyze("पूर्णांक f() { जबतक (1) { वापस 1; } वापस 0; }");
    assert!(ok, "{:?}", handler.diagnostics());
}

#[test]
fn float_condition_is_rejected() {
    let (ok, _handler) = analyze("पूर्णांक f() { जबतक (1.5) { वापस 1; } वापस 0; }");
    assert!(!ok);
}

#[test]
fn for_loop_counter_is_scoped_to_the_loop() {
    let (ok, _handler) = analyze("पूर्णांक f() { दौर (पूर्णांक i = 0; i < 1; i = i + 1) { } वापस i; }");
    assert!(!ok);
}

#[test]
fn arithmetic_mixing_int_and_float_yields_float() {
    let (ok, handler) = analyze("दशमलव x = 1 + 2.0;");
    assert!(ok, "{:?}", handler.diagnostics());
}

#[test]
fn comparison_of_mismatched_types_is_an_error() {
    let (ok, _handler) = analyze("पूर्णांक x = (1 < 1.0);");
    assert!(!ok);
}

#[test]
fn string_literal_infers_as_char() {
    let (ok, handler) = analyze(r#"वर्ण x = "hi";"#);
    assert!(ok, "{:?}", handler.diagnostics());
}

#[test]
fn calling_a_variable_is_an_error() {
    let (ok, _handler) = analyze("पूर्णांक f() { पूर्णांक x = 1; वापस x(); }");
    assert!(!ok);
}

#[test]
fn using_a_function_name_as_a_variable_is_an_error() {
    let (ok, _handler) = analyze("पूर्णांक f() { वापस 1; }\nपूर्णांक g() { वापस f; }");
    assert!(!ok);
}

#[test]
fn assigning_to_an_undeclared_name_is_an_error() {
    let (ok, _handler) = analyze("शून्य f() { x = 1; वापस; }");
    assert!(!ok);
}

#[test]
fn print_intrinsic_call_is_not_type_checked_against_a_declared_signature() {
    let (ok, handler) = analyze(r#"शून्य f() { छापो("%d", 1); वापस; }"#);
    assert!(ok, "{:?}", handler.diagnostics());
}

#[test]
fn logical_and_requires_integer_operands() {
    let (ok, _handler) = analyze("पूर्णांक x = 1.0 && 1;");
    assert!(!ok);
}

#[test]
fn cascaded_error_from_undefined_variable_is_not_reported_twice() {
    let (ok, handler) = analyze("पूर्णांक x = y + 1;");
    assert!(!ok);
    // Only the undefined-variable diagnostic should appear, not a second
    // "Type mismatch" complaint about adding an error-typed operand.
    assert_eq!(handler.error_count(), 1, "{:?}", handler.diagnostics());
}
