//! Operator typing rules.
//!
//! | Operator  | Operands                              | Result  |
//! |-----------|---------------------------------------|---------|
//! | `+`       | int,int / string,string               | operand |
//! | `- * /`   | int,int                               | int     |
//! | `<`       | int,int                               | bool    |
//! | `=`       | int,int / string,string / bool,bool   | bool    |
//! | `&`       | bool,bool                             | bool    |
//! | `!`       | bool                                  | bool    |
//!
//! Operands must have identical types; there is no coercion.

use mpl_ir::{BinaryOp, Type, UnaryOp};

/// Result type of `left op right`, or `None` if the operands are invalid.
pub fn binary_result(op: BinaryOp, left: Type, right: Type) -> Option<Type> {
    if left != right {
        return None;
    }
    match (op, left) {
        (BinaryOp::Add, Type::Int | Type::Str) => Some(left),
        (BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div, Type::Int) => Some(Type::Int),
        (BinaryOp::Lt, Type::Int) | (BinaryOp::Eq, _) | (BinaryOp::And, Type::Bool) => {
            Some(Type::Bool)
        }
        _ => None,
    }
}

/// Result type of `op operand`, or `None` if the operand is invalid.
pub fn unary_result(op: UnaryOp, operand: Type) -> Option<Type> {
    match (op, operand) {
        (UnaryOp::Not, Type::Bool) => Some(Type::Bool),
        (UnaryOp::Not, _) => None,
    }
}

#[cfg(test)]
mod tests;
