mod common;

use common::lox;

#[test]
fn print_statements_execute_in_order() {
    let run = lox("run", "print 1; print 2;\n");
    assert_eq!(run.stdout, "1\n2\n");
    assert_eq!(run.stderr, "");
    assert_eq!(run.code, 0);
}

#[test]
fn execution_stops_at_the_first_runtime_error_but_keeps_prior_output() {
    let source = "print \"the expression below is invalid\";\n49 + \"baz\";\nprint \"this should not be printed\";\n";
    let run = lox("run", source);
    assert_eq!(run.stdout, "the expression below is invalid\n");
    assert_eq!(
        run.stderr,
        "Operands must be two numbers or two strings.\n[line 2]\n"
    );
    assert_eq!(run.code, 70);
}

#[test]
fn a_syntax_error_prevents_any_output() {
    let run = lox("run", "print 1\nprint 2;\n");
    assert_eq!(run.stdout, "");
    assert_eq!(run.code, 65);
}

#[test]
fn expression_statements_produce_no_output() {
    let run = lox("run", "1 + 1;\nprint \"done\";\n");
    assert_eq!(run.stdout, "done\n");
    assert_eq!(run.code, 0);
}
