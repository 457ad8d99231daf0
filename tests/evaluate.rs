mod common;

use common::lox;

#[test]
fn comparison_of_grouped_arithmetic() {
    let run = lox("evaluate", "(54 - 67) >= -(114 / 57 + 11)");
    assert_eq!(run.stdout, "true");
    assert_eq!(run.stderr, "");
    assert_eq!(run.code, 0);
}

#[test]
fn string_concatenation() {
    let run = lox("evaluate", "\"foo\" + \"bar\"");
    assert_eq!(run.stdout, "foobar");
    assert_eq!(run.code, 0);
}

#[test]
fn integral_results_have_no_trailing_dot_zero() {
    let run = lox("evaluate", "1 + 1");
    assert_eq!(run.stdout, "2");
}

#[test]
fn dividing_by_zero_is_not_a_runtime_error() {
    let run = lox("evaluate", "1 / 0");
    assert_eq!(run.stdout, "inf");
    assert_eq!(run.code, 0);
}

#[test]
fn adding_a_number_and_a_string_is_a_runtime_error() {
    let run = lox("evaluate", "1 + \"two\"");
    assert_eq!(
        run.stderr,
        "Operands must be two numbers or two strings.\n[line 1]\n"
    );
    assert_eq!(run.code, 70);
}

#[test]
fn a_syntax_error_exits_65_not_70() {
    let run = lox("evaluate", "(1 +");
    assert_eq!(run.code, 65);
}
