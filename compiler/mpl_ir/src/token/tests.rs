use super::*;
use pretty_assertions::assert_eq;

const WORDS: &[Keyword] = &[
    Keyword::Var,
    Keyword::For,
    Keyword::End,
    Keyword::In,
    Keyword::Do,
    Keyword::Read,
    Keyword::Print,
    Keyword::IntType,
    Keyword::StringType,
    Keyword::BoolType,
    Keyword::Assert,
    Keyword::If,
    Keyword::Else,
];

#[test]
fn test_every_reserved_word_round_trips() {
    for &keyword in WORDS {
        assert_eq!(Keyword::from_word(keyword.as_str()), Some(keyword));
        assert!(!keyword.is_symbol());
    }
}

#[test]
fn test_bool_literals_are_not_keywords() {
    assert_eq!(Keyword::from_word("true"), None);
    assert_eq!(Keyword::from_word("false"), None);
    assert_eq!(Keyword::from_word("Var"), None);
}

#[test]
fn test_single_char_symbols() {
    for c in "+-*/;:&=()!<".chars() {
        let keyword = Keyword::from_symbol_char(c).unwrap();
        assert_eq!(keyword.as_str(), c.to_string());
        assert!(keyword.is_symbol());
    }
    assert_eq!(Keyword::from_symbol_char('.'), None);
    assert_eq!(Keyword::from_symbol_char('>'), None);
}

#[test]
fn test_token_dump_format() {
    let token = Token::keyword(Keyword::ColonEq, Position::new(3, 7));
    assert_eq!(format!("{token:?}"), r#"{Keyword, ":=", 3, 7}"#);

    let token = Token::new(TokenKind::Ident, "total", Position::new(1, 5));
    assert_eq!(format!("{token:?}"), r#"{Identifier, "total", 1, 5}"#);
}

#[test]
fn test_describe() {
    let semi = Token::keyword(Keyword::Semicolon, Position::START);
    assert_eq!(semi.describe(), "`;`");
    let kw = Token::keyword(Keyword::Print, Position::START);
    assert_eq!(kw.describe(), "keyword `print`");
    let s = Token::new(TokenKind::Str, "a\nb", Position::START);
    assert_eq!(s.describe(), r#"string "a\nb""#);
}
