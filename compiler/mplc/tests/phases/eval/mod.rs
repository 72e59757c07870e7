//! Program output, input handling and runtime errors.

use mpl_eval::EvalErrorKind;
use mplc::Problem;
use proptest::prelude::*;

use crate::common::{run_err, run_ok, run_with_input};

#[test]
fn scenario_int_arithmetic() {
    assert_eq!(run_ok("var x : int := 1+2; print x;"), "3");
}

#[test]
fn scenario_string_concatenation() {
    assert_eq!(run_ok(r#"var s : string := "a"+"b"; print s;"#), "ab");
}

#[test]
fn scenario_for_loop() {
    assert_eq!(run_ok("for i in 1..3 do print i; end for;"), "123");
}

#[test]
fn scenario_default_bool() {
    assert_eq!(run_ok("var b : bool; print b;"), "false");
}

#[test]
fn underscore_leading_identifier() {
    assert_eq!(run_ok("var _x : int := 4; print _x;"), "4");
}

#[test]
fn assert_statement_stops_program_before_running() {
    let source = r#"
        var nTimes : int := 0;
        print "How many times?";
        read nTimes;
        var x : int;
        for x in 0..nTimes-1 do
            print x;
            print " : Hello, World!\n";
        end for;
        assert (x = nTimes);
    "#;
    // `assert` is a reserved word with no statement form.
    let outcome = run_with_input(source, &["3"]);
    assert!(matches!(outcome.result, Err(Problem::Parse(_))));
    assert_eq!(outcome.output, "");
}

#[test]
fn factorial_with_input() {
    let source = r#"
        print "Give a number";
        var n : int;
        read n;
        var v : int := 1;
        var i : int;
        for i in 1..n do
            v := v * i;
        end for;
        print "The result is: ";
        print v;
    "#;
    let outcome = run_with_input(source, &["5"]);
    outcome.result.unwrap();
    assert_eq!(outcome.output, "Give a numberThe result is: 120");
}

#[test]
fn comments_are_ignored() {
    let source = "/* header\n comment */ print 1; // trailing\nprint 2;";
    assert_eq!(run_ok(source), "12");
}

#[test]
fn loop_variable_holds_one_past_end() {
    assert_eq!(
        run_ok("var i : int; for i in 1..3 do print \"\"; end for; print i;"),
        "4"
    );
}

#[test]
fn read_conversion_failure() {
    let outcome = run_with_input("var n : int; read n; print n;", &["seven"]);
    match outcome.result {
        Err(Problem::Eval(err)) => assert_eq!(
            err.kind,
            EvalErrorKind::ConversionFailed {
                input: "seven".into()
            }
        ),
        other => panic!("expected conversion failure, got {other:?}"),
    }
}

#[test]
fn division_by_zero_at_runtime() {
    match run_err("var z : int := 0; print 10 / z;") {
        Problem::Eval(err) => assert_eq!(err.kind, EvalErrorKind::DivisionByZero),
        other => panic!("expected runtime error, got {other:?}"),
    }
}

#[test]
fn evaluation_is_deterministic() {
    let source = r#"var s : string; read s; for i in 1..4 do print s + "!"; end for;"#;
    let first = run_with_input(source, &["hey"]);
    let second = run_with_input(source, &["hey"]);
    assert_eq!(first.output, second.output);
    assert_eq!(first.output, "hey!hey!hey!hey!");
}

fn escape(s: &str) -> String {
    let mut out = String::new();
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

#[allow(clippy::disallowed_types, reason = "proptest macros internally use Arc")]
mod literal_round_trip {
    use super::*;

    proptest! {
        #[test]
        fn int_literal(n in 0..=i32::MAX) {
            prop_assert_eq!(run_ok(&format!("print {n};")), n.to_string());
        }

        #[test]
        fn string_literal(s in "[ -~\t\n]{0,40}") {
            prop_assert_eq!(run_ok(&format!("print \"{}\";", escape(&s))), s);
        }

        #[test]
        fn bool_literal(b in any::<bool>()) {
            prop_assert_eq!(run_ok(&format!("print {b};")), b.to_string());
        }
    }
}
