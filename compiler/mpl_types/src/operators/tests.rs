use super::*;
use pretty_assertions::assert_eq;

const TYPES: [Type; 3] = [Type::Int, Type::Str, Type::Bool];

#[test]
fn test_add() {
    assert_eq!(binary_result(BinaryOp::Add, Type::Int, Type::Int), Some(Type::Int));
    assert_eq!(binary_result(BinaryOp::Add, Type::Str, Type::Str), Some(Type::Str));
    assert_eq!(binary_result(BinaryOp::Add, Type::Bool, Type::Bool), None);
}

#[test]
fn test_int_only_arithmetic_and_comparison() {
    for op in [BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
        assert_eq!(binary_result(op, Type::Int, Type::Int), Some(Type::Int));
        assert_eq!(binary_result(op, Type::Str, Type::Str), None);
        assert_eq!(binary_result(op, Type::Bool, Type::Bool), None);
    }
    assert_eq!(binary_result(BinaryOp::Lt, Type::Int, Type::Int), Some(Type::Bool));
    assert_eq!(binary_result(BinaryOp::Lt, Type::Str, Type::Str), None);
}

#[test]
fn test_equality_on_every_type() {
    for ty in TYPES {
        assert_eq!(binary_result(BinaryOp::Eq, ty, ty), Some(Type::Bool));
    }
}

#[test]
fn test_and() {
    assert_eq!(binary_result(BinaryOp::And, Type::Bool, Type::Bool), Some(Type::Bool));
    assert_eq!(binary_result(BinaryOp::And, Type::Int, Type::Int), None);
}

#[test]
fn test_mixed_operands_always_rejected() {
    let ops = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Lt,
        BinaryOp::Eq,
        BinaryOp::And,
    ];
    for op in ops {
        for left in TYPES {
            for right in TYPES {
                if left != right {
                    assert_eq!(binary_result(op, left, right), None, "{left} {op:?} {right}");
                }
            }
        }
    }
}

#[test]
fn test_not() {
    assert_eq!(unary_result(UnaryOp::Not, Type::Bool), Some(Type::Bool));
    assert_eq!(unary_result(UnaryOp::Not, Type::Int), None);
    assert_eq!(unary_result(UnaryOp::Not, Type::Str), None);
}
