//! Lexical and syntax errors through the driver.

use mpl_diagnostic::ErrorCode;
use mpl_ir::Position;
use mpl_lexer::LexErrorKind;
use mpl_parse::ParseErrorKind;
use mplc::Problem;

use crate::common::{check, render, run_err};

fn parse_error(source: &str) -> mpl_parse::ParseError {
    match check(source).unwrap_err() {
        Problem::Parse(err) => err,
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn unterminated_string_reports_start() {
    let err = parse_error(r#"var s : string := "abc;"#);
    assert_eq!(err.pos, Position::new(1, 19));
    assert!(matches!(
        err.kind,
        ParseErrorKind::Lex(ref lex) if lex.kind == LexErrorKind::UnterminatedString
    ));
    assert_eq!(err.code(), ErrorCode::E0001);
}

#[test]
fn unterminated_string_on_later_line() {
    let err = parse_error("print 1;\nprint \"oops;\n");
    assert_eq!(err.code(), ErrorCode::E0005);
    assert_eq!(err.pos.line, 2);
}

#[test]
fn missing_semicolon() {
    let err = parse_error("print 1 print 2;");
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(err.pos, Position::new(1, 9));
}

#[test]
fn empty_program_is_unexpected_eof() {
    assert_eq!(parse_error("").code(), ErrorCode::E1004);
    assert_eq!(parse_error("// nothing here\n").code(), ErrorCode::E1004);
}

#[test]
fn unclosed_for_is_unexpected_eof() {
    assert_eq!(
        parse_error("for i in 1..2 do print i;").code(),
        ErrorCode::E1004
    );
}

#[test]
fn chained_binary_operators_rejected() {
    assert_eq!(parse_error("print 1 + 2 + 3;").code(), ErrorCode::E1001);
    assert!(check("print (1 + 2) + 3;").is_ok());
}

#[test]
fn declaration_inside_loop_rejected() {
    let err = parse_error("for i in 1..2 do var x : int; end for;");
    assert_eq!(err.kind, ParseErrorKind::DeclarationInLocalScope);
    assert_eq!(err.pos, Position::new(1, 18));
}

#[test]
fn reserved_assert_is_not_a_statement() {
    assert_eq!(parse_error("assert 1 = 1;").code(), ErrorCode::E1001);
}

#[test]
fn parse_errors_stop_before_running() {
    let problem = run_err(r#"print "a"; print 1 +;"#);
    assert!(matches!(problem, Problem::Parse(_)));
}

#[test]
fn rendered_lex_error_points_at_string_start() {
    let source = "var s : string := \"abc;";
    let problem = check(source).unwrap_err();
    let rendered = render(&problem, "bad.mpl", source);
    assert!(rendered.starts_with("error[E0001]: unterminated string literal"));
    assert!(rendered.contains("--> bad.mpl:1:19"));
    assert!(rendered.contains("1 | var s : string := \"abc;"));
}
