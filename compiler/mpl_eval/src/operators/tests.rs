use super::*;
use pretty_assertions::assert_eq;

fn int(op: BinaryOp, a: i32, b: i32) -> Result<Value, EvalErrorKind> {
    evaluate_binary(op, Type::Int, &Value::Int(a), &Value::Int(b))
}

#[test]
fn test_int_arithmetic() {
    assert_eq!(int(BinaryOp::Add, 1, 2), Ok(Value::Int(3)));
    assert_eq!(int(BinaryOp::Sub, 1, 2), Ok(Value::Int(-1)));
    assert_eq!(int(BinaryOp::Mul, -4, 5), Ok(Value::Int(-20)));
    assert_eq!(int(BinaryOp::Lt, 1, 2), Ok(Value::Bool(true)));
    assert_eq!(int(BinaryOp::Eq, 2, 2), Ok(Value::Bool(true)));
}

#[test]
fn test_division_truncates_toward_zero() {
    assert_eq!(int(BinaryOp::Div, 7, 2), Ok(Value::Int(3)));
    assert_eq!(int(BinaryOp::Div, -7, 2), Ok(Value::Int(-3)));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(int(BinaryOp::Div, 1, 0), Err(EvalErrorKind::DivisionByZero));
}

#[test]
fn test_overflow_is_an_error() {
    assert_eq!(
        int(BinaryOp::Add, i32::MAX, 1),
        Err(EvalErrorKind::IntegerOverflow {
            operation: "addition"
        })
    );
    assert_eq!(
        int(BinaryOp::Mul, i32::MAX, 2),
        Err(EvalErrorKind::IntegerOverflow {
            operation: "multiplication"
        })
    );
    assert_eq!(
        int(BinaryOp::Div, i32::MIN, -1),
        Err(EvalErrorKind::IntegerOverflow {
            operation: "division"
        })
    );
}

#[test]
fn test_string_ops() {
    let a = Value::Str("ab".into());
    let b = Value::Str("c".into());
    assert_eq!(
        evaluate_binary(BinaryOp::Add, Type::Str, &a, &b),
        Ok(Value::Str("abc".into()))
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Eq, Type::Str, &a, &a),
        Ok(Value::Bool(true))
    );
    assert!(evaluate_binary(BinaryOp::Sub, Type::Str, &a, &b).is_err());
}

#[test]
fn test_bool_ops() {
    let t = Value::Bool(true);
    let f = Value::Bool(false);
    assert_eq!(
        evaluate_binary(BinaryOp::And, Type::Bool, &t, &f),
        Ok(Value::Bool(false))
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Eq, Type::Bool, &f, &f),
        Ok(Value::Bool(true))
    );
    assert_eq!(evaluate_unary(UnaryOp::Not, Type::Bool, &f), Ok(Value::Bool(true)));
}

#[test]
fn test_value_disagreeing_with_static_type() {
    assert_eq!(
        evaluate_binary(BinaryOp::Add, Type::Int, &Value::Str("1".into()), &Value::Int(1)),
        Err(EvalErrorKind::InvalidOperation {
            op: "+",
            ty: Type::Int
        })
    );
    assert_eq!(
        evaluate_unary(UnaryOp::Not, Type::Int, &Value::Int(1)),
        Err(EvalErrorKind::InvalidOperation {
            op: "!",
            ty: Type::Int
        })
    );
}
