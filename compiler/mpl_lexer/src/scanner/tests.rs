use super::*;
use crate::LexErrorKind;
use pretty_assertions::assert_eq;

fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn texts(source: &str) -> Vec<String> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.text)
        .collect()
}

fn error(source: &str) -> LexError {
    tokenize(source).unwrap_err()
}

fn kw(keyword: Keyword) -> TokenKind {
    TokenKind::Keyword(keyword)
}

#[test]
fn test_declaration() {
    assert_eq!(
        kinds("var x : int := 1+2;"),
        vec![
            kw(Keyword::Var),
            TokenKind::Ident,
            kw(Keyword::Colon),
            kw(Keyword::IntType),
            kw(Keyword::ColonEq),
            TokenKind::Int,
            kw(Keyword::Plus),
            TokenKind::Int,
            kw(Keyword::Semicolon),
        ]
    );
}

#[test]
fn test_for_header() {
    assert_eq!(
        kinds("for i in 1..n do"),
        vec![
            kw(Keyword::For),
            TokenKind::Ident,
            kw(Keyword::In),
            TokenKind::Int,
            kw(Keyword::DotDot),
            TokenKind::Ident,
            kw(Keyword::Do),
        ]
    );
}

#[test]
fn test_all_reserved_words() {
    let source = "var for end in do read print int string bool assert if else";
    let scanned = kinds(source);
    assert_eq!(scanned.len(), 13);
    assert!(scanned.iter().all(|k| matches!(k, TokenKind::Keyword(_))));
}

#[test]
fn test_all_symbols() {
    assert_eq!(
        texts("+ - * / ; : & = ( ) ! < .. :="),
        vec!["+", "-", "*", "/", ";", ":", "&", "=", "(", ")", "!", "<", "..", ":="]
    );
}

#[test]
fn test_symbols_without_spaces() {
    assert_eq!(texts("x:=(1<2)&!b;"), vec!["x", ":=", "(", "1", "<", "2", ")", "&", "!", "b", ";"]);
    assert_eq!(texts("a::=b"), vec!["a", ":", ":=", "b"]);
}

#[test]
fn test_bool_literals() {
    assert_eq!(
        kinds("true false truth"),
        vec![TokenKind::Bool, TokenKind::Bool, TokenKind::Ident]
    );
}

#[test]
fn test_identifiers_with_digits_and_underscores() {
    assert_eq!(texts("x_1 var2 printx"), vec!["x_1", "var2", "printx"]);
    assert_eq!(kinds("var2"), vec![TokenKind::Ident]);
}

#[test]
fn test_identifiers_starting_with_underscore() {
    assert_eq!(texts("_x __y2 _"), vec!["_x", "__y2", "_"]);
    assert_eq!(
        kinds("var _x : int;"),
        vec![
            kw(Keyword::Var),
            TokenKind::Ident,
            kw(Keyword::Colon),
            kw(Keyword::IntType),
            kw(Keyword::Semicolon),
        ]
    );
}

#[test]
fn test_digit_run_then_word() {
    assert_eq!(
        kinds("12ab"),
        vec![TokenKind::Int, TokenKind::Ident]
    );
}

#[test]
fn test_positions() {
    let tokens = tokenize("var x\n  : int;").unwrap();
    let positions: Vec<Position> = tokens.iter().map(|t| t.pos).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(1, 1),
            Position::new(1, 5),
            Position::new(2, 3),
            Position::new(2, 5),
            Position::new(2, 8),
        ]
    );
}

#[test]
fn test_tabs_and_carriage_returns_are_skipped() {
    assert_eq!(texts("print\t1;\r\n"), vec!["print", "1", ";"]);
}

#[test]
fn test_line_comment() {
    let tokens = tokenize("print 1; // print 2;\nprint 3;").unwrap();
    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[3].pos, Position::new(2, 1));
}

#[test]
fn test_block_comment() {
    assert_eq!(texts("print /* a\n * b */ 1;"), vec!["print", "1", ";"]);
    assert_eq!(texts("/**/x"), vec!["x"]);
    // Comments do not nest: the first `*/` ends it.
    assert_eq!(texts("/* /* */ y"), vec!["y"]);
}

#[test]
fn test_slash_is_division_outside_comments() {
    assert_eq!(texts("6/2"), vec!["6", "/", "2"]);
}

#[test]
fn test_unterminated_block_comment() {
    let err = error("print 1; /* never closed");
    assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
    assert_eq!(err.pos, Position::new(1, 10));
}

#[test]
fn test_string_escapes() {
    let tokens = tokenize(r#""a\tb\n\"q\" \\ \r\a\b\f\v""#).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].text, "a\tb\n\"q\" \\ \r\x07\x08\x0C\x0B");
}

#[test]
fn test_empty_string() {
    let tokens = tokenize(r#"print "";"#).unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Str);
    assert_eq!(tokens[1].text, "");
    assert_eq!(tokens[2].pos, Position::new(1, 9));
}

#[test]
fn test_unterminated_string_reports_start() {
    let err = error("var s : string := \"abc;");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.pos, Position::new(1, 19));
}

#[test]
fn test_backslash_at_end_of_input() {
    let err = error("x := \"abc\\");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.pos, Position::new(1, 6));
}

#[test]
fn test_newline_in_string() {
    let err = error("print \"ab\ncd\";");
    assert_eq!(err.kind, LexErrorKind::NewlineInString);
    assert_eq!(err.pos, Position::new(1, 10));
}

#[test]
fn test_invalid_escape() {
    let err = error(r#"print "a\qb";"#);
    assert_eq!(err.kind, LexErrorKind::InvalidEscape { escape_char: 'q' });
    assert_eq!(err.pos, Position::new(1, 10));
}

#[test]
fn test_lone_dot() {
    let err = error("1.2");
    assert_eq!(err.kind, LexErrorKind::UnrecognizedChar { ch: '.' });
    assert_eq!(err.pos, Position::new(1, 2));
}

#[test]
fn test_unrecognized_char() {
    let err = error("x := 1;\n  y # 2;");
    assert_eq!(err.kind, LexErrorKind::UnrecognizedChar { ch: '#' });
    assert_eq!(err.pos, Position::new(2, 5));
    assert_eq!(err.to_string(), "unrecognized character `#`");
}

#[test]
fn test_empty_and_trivia_only_input() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("  // nothing\n/* here */ ").unwrap().is_empty());
}

#[test]
fn test_next_token_is_lazy() {
    let mut scanner = Scanner::new("print 1 #");
    assert_eq!(scanner.next_token().unwrap().unwrap().text, "print");
    assert_eq!(scanner.next_token().unwrap().unwrap().text, "1");
    assert!(scanner.next_token().is_err());
}

#[test]
fn test_end_of_input_position() {
    let mut scanner = Scanner::new("x;\n  // trailing\n");
    scanner.next_token().unwrap();
    scanner.next_token().unwrap();
    assert!(scanner.next_token().unwrap().is_none());
    assert_eq!(scanner.pos(), Position::new(3, 1));
}

#[test]
fn test_iterator_fuses_after_error() {
    let mut scanner = Scanner::new("a # b");
    assert!(matches!(scanner.next(), Some(Ok(_))));
    assert!(matches!(scanner.next(), Some(Err(_))));
    assert!(scanner.next().is_none());
    assert!(scanner.next().is_none());
}

#[test]
fn test_iterator_stays_at_end() {
    let mut scanner = Scanner::new("a");
    assert!(matches!(scanner.next(), Some(Ok(_))));
    assert!(scanner.next().is_none());
    assert!(scanner.next().is_none());
}

#[test]
fn test_error_diagnostic() {
    let diag = error("\"abc").to_diagnostic();
    assert_eq!(diag.code, mpl_diagnostic::ErrorCode::E0001);
    assert_eq!(diag.primary_pos(), Some(Position::new(1, 1)));
    assert_eq!(diag.message, "unterminated string literal");
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_scanner {
    use super::*;
    use crate::escape::escape_str;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn int_literal_text_is_preserved(n in any::<u32>()) {
            let tokens = tokenize(&n.to_string()).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Int);
            prop_assert_eq!(&tokens[0].text, &n.to_string());
        }

        #[test]
        fn string_literal_value_round_trips(value in any::<String>()) {
            let source = format!("\"{}\"", escape_str(&value));
            let tokens = tokenize(&source).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Str);
            prop_assert_eq!(&tokens[0].text, &value);
        }

        #[test]
        fn positions_track_lines_and_columns(
            words in proptest::collection::vec(("x[a-z0-9_]{0,6}", 0usize..3, 1usize..4), 1..20)
        ) {
            let mut source = String::new();
            let mut expected = Vec::new();
            let (mut line, mut column) = (1u32, 1u32);
            for (word, newlines, spaces) in &words {
                for _ in 0..*newlines {
                    source.push('\n');
                    line += 1;
                    column = 1;
                }
                source.push_str(&" ".repeat(*spaces));
                column += *spaces as u32;
                expected.push(Position::new(line, column));
                source.push_str(word);
                column += word.chars().count() as u32;
            }

            let tokens = tokenize(&source).unwrap();
            let positions: Vec<Position> = tokens.iter().map(|t| t.pos).collect();
            prop_assert_eq!(positions, expected);
        }
    }
}
