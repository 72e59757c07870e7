//! Static errors through the driver.

use mpl_diagnostic::ErrorCode;
use mpl_types::{MismatchContext, TypeErrorKind};
use mplc::Problem;

use crate::common::{check, render, run_with_input};

fn type_error(source: &str) -> mpl_types::TypeCheckError {
    match check(source).unwrap_err() {
        Problem::Type(err) => err,
        other => panic!("expected a type error, got {other:?}"),
    }
}

#[test]
fn redeclaration_is_rejected() {
    let err = type_error("var x : int := 1; var x : int := 2;");
    assert_eq!(err.kind, TypeErrorKind::Redeclared { name: "x".into() });
    assert_eq!(err.to_string(), "variable `x` is already declared");
}

#[test]
fn redeclaration_with_other_type_is_rejected() {
    let err = type_error("var x : int; var x : string;");
    assert_eq!(err.code(), ErrorCode::E2003);
}

#[test]
fn loop_variable_assignment_is_rejected() {
    let err = type_error("for i in 0..3 do i := 5; end for;");
    assert_eq!(err.kind, TypeErrorKind::LockedVariable { name: "i".into() });
    assert_eq!(err.code(), ErrorCode::E2005);
}

#[test]
fn type_errors_stop_before_any_output() {
    let outcome = run_with_input(r#"print "hello"; print 1 + true;"#, &[]);
    assert!(matches!(outcome.result, Err(Problem::Type(_))));
    assert_eq!(outcome.output, "");
}

#[test]
fn mismatch_names_both_types() {
    let err = type_error(r#"var n : int; n := "five";"#);
    assert_eq!(
        err.kind,
        TypeErrorKind::Mismatch {
            expected: mpl_ir::Type::Int,
            found: mpl_ir::Type::Str,
            context: MismatchContext::Assignment { name: "n".into() },
        }
    );
    assert_eq!(
        err.to_string(),
        "type mismatch in value assigned to `n`: expected `int`, found `string`"
    );
}

#[test]
fn environment_is_populated_after_check() {
    let mut session = mplc::Session::new();
    session
        .check("var x : int; var s : string := \"a\"; for i in 1..2 do print i; end for;")
        .unwrap();
    assert_eq!(session.env().len(), 3);
}

#[test]
fn rendered_type_error() {
    let source = "var x : int := 1;\nvar x : int := 2;\n";
    let problem = check(source).unwrap_err();
    let rendered = render(&problem, "dup.mpl", source);
    assert_eq!(
        rendered,
        "error[E2003]: variable `x` is already declared\n \
         --> dup.mpl:2:1\n  |\n\
         2 | var x : int := 2;\n  \
         | ^ redeclared here\n   \
         = note: all declarations share one global scope\n"
    );
}
