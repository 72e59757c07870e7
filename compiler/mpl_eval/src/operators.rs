//! Operator implementations.
//!
//! Dispatch is on the static operand type from the type checker. Integer
//! arithmetic is checked: overflow and division by zero are errors, never
//! wrapped or saturated.

use mpl_env::Value;
use mpl_ir::{BinaryOp, Type, UnaryOp};

use crate::EvalErrorKind;

#[inline]
fn invalid(op: BinaryOp, ty: Type) -> EvalErrorKind {
    EvalErrorKind::InvalidOperation {
        op: op.as_symbol(),
        ty,
    }
}

/// Checked arithmetic with overflow as the only failure.
#[inline]
fn checked_arith(result: Option<i32>, operation: &'static str) -> Result<Value, EvalErrorKind> {
    result
        .map(Value::Int)
        .ok_or(EvalErrorKind::IntegerOverflow { operation })
}

/// Evaluate `left op right`, where both operands have static type `ty`.
pub fn evaluate_binary(
    op: BinaryOp,
    ty: Type,
    left: &Value,
    right: &Value,
) -> Result<Value, EvalErrorKind> {
    match (ty, left, right) {
        (Type::Int, Value::Int(a), Value::Int(b)) => eval_int_binary(op, *a, *b),
        (Type::Str, Value::Str(a), Value::Str(b)) => eval_str_binary(op, a, b),
        (Type::Bool, Value::Bool(a), Value::Bool(b)) => eval_bool_binary(op, *a, *b),
        _ => Err(invalid(op, ty)),
    }
}

fn eval_int_binary(op: BinaryOp, a: i32, b: i32) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        // Truncates toward zero. `i32::MIN / -1` is the one overflowing case.
        BinaryOp::Div if b == 0 => Err(EvalErrorKind::DivisionByZero),
        BinaryOp::Div => checked_arith(a.checked_div(b), "division"),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::And => Err(invalid(op, Type::Int)),
    }
}

fn eval_str_binary(op: BinaryOp, a: &str, b: &str) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Add => {
            let mut s = String::with_capacity(a.len().saturating_add(b.len()));
            s.push_str(a);
            s.push_str(b);
            Ok(Value::Str(s))
        }
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        _ => Err(invalid(op, Type::Str)),
    }
}

fn eval_bool_binary(op: BinaryOp, a: bool, b: bool) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::And => Ok(Value::Bool(a && b)),
        _ => Err(invalid(op, Type::Bool)),
    }
}

/// Evaluate `op operand`, where the operand has static type `ty`.
pub fn evaluate_unary(op: UnaryOp, ty: Type, operand: &Value) -> Result<Value, EvalErrorKind> {
    match (op, ty, operand) {
        (UnaryOp::Not, Type::Bool, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Not, _, _) => Err(EvalErrorKind::InvalidOperation {
            op: op.as_symbol(),
            ty,
        }),
    }
}

#[cfg(test)]
mod tests;
