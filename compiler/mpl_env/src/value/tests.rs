use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_zero_values() {
    assert_eq!(Value::zero(Type::Int), Value::Int(0));
    assert_eq!(Value::zero(Type::Str), Value::Str(String::new()));
    assert_eq!(Value::zero(Type::Bool), Value::Bool(false));
}

#[test]
fn test_zero_has_requested_type() {
    for ty in [Type::Int, Type::Str, Type::Bool] {
        assert_eq!(Value::zero(ty).ty(), ty);
    }
}

#[test]
fn test_display() {
    assert_eq!(Value::Int(-42).to_string(), "-42");
    assert_eq!(Value::Str("a\tb".into()).to_string(), "a\tb");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Bool(false).to_string(), "false");
}

#[test]
fn test_accessors() {
    assert_eq!(Value::Int(3).as_int(), Some(3));
    assert_eq!(Value::Int(3).as_bool(), None);
    assert_eq!(Value::Str("x".into()).as_str(), Some("x"));
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Bool(true).as_str(), None);
}
