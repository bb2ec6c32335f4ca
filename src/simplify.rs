/*
 * ==========================================================================
 * FOLDEX - Parse with Claws!
 * ==========================================================================
 *
 * File:     simplify.rs
 * Purpose:  Constant folding over a parsed expression tree.
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Github:   https://github.com/samwilcox/foldex
 *
 * License:
 * This file is part of the FOLDEX expression parser project.
 *
 * FOLDEX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::ast::{BinaryOp, Expr};
use crate::error::FoldexError;

/// Folds every fully-integer subtree into a single literal.
///
/// Post-order walk: leaves come back unchanged; an operation whose
/// simplified children are both integer leaves is replaced by the
/// evaluated result. A variable anywhere in a subtree blocks folding
/// of every operation above it, so mixed trees come back partially
/// folded.
///
/// Two guarantees callers can rely on:
/// - the result never has more nodes than the input
/// - running `simplify` on its own output changes nothing
///
/// The only failure is division by zero (surfaced through the same
/// error channel as parsing, never as a panic).
pub fn simplify(expr: Expr) -> Result<Expr, FoldexError> {
    match expr {
        Expr::Int(_) | Expr::Var(_) => Ok(expr),
        Expr::Binary { op, left, right } => {
            let left = simplify(*left)?;
            let right = simplify(*right)?;

            if let (Expr::Int(a), Expr::Int(b)) = (&left, &right) {
                return Ok(Expr::Int(apply(op, *a, *b)?));
            }

            Ok(Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            })
        }
    }
}

/// Evaluates one operator over two integer operands.
///
/// Addition, subtraction, and multiplication are exact. Division
/// rounds to the nearest integer, ties away from zero (see
/// [`div_round`]); a zero divisor is [`FoldexError::DivisionByZero`].
fn apply(op: BinaryOp, left: i64, right: i64) -> Result<i64, FoldexError> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Subtract => Ok(left - right),
        BinaryOp::Multiply => Ok(left * right),
        BinaryOp::Divide => {
            if right == 0 {
                return Err(FoldexError::DivisionByZero);
            }
            Ok(div_round(left, right))
        }
    }
}

/// Integer division rounded to the nearest quotient, ties away from
/// zero.
///
/// No literal is negative, but subtraction can produce negative
/// intermediate values during folding, so both signs are handled.
/// The divisor is non-zero (checked by the caller).
fn div_round(dividend: i64, divisor: i64) -> i64 {
    let quotient = dividend / divisor;
    let remainder = dividend % divisor;

    if 2 * remainder.abs() >= divisor.abs() {
        if (dividend < 0) == (divisor < 0) {
            quotient + 1
        } else {
            quotient - 1
        }
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(div_round(2, 6), 0);
        assert_eq!(div_round(4, 6), 1);
        assert_eq!(div_round(10, 4), 3); // 2.5 rounds away from zero
        assert_eq!(div_round(9, 3), 3);
    }

    #[test]
    fn rounds_negative_quotients_away_from_zero() {
        assert_eq!(div_round(-2, 6), 0);
        assert_eq!(div_round(-4, 6), -1);
        assert_eq!(div_round(-10, 4), -3); // -2.5 rounds away from zero
        assert_eq!(div_round(7, -2), -4); // -3.5 rounds away from zero
        assert_eq!(div_round(-9, -3), 3);
    }

    #[test]
    fn applies_exact_arithmetic() {
        assert_eq!(apply(BinaryOp::Add, 3, 4), Ok(7));
        assert_eq!(apply(BinaryOp::Subtract, 3, 9), Ok(-6));
        assert_eq!(apply(BinaryOp::Multiply, 7, 8), Ok(56));
        assert_eq!(apply(BinaryOp::Divide, 9, 2), Ok(5));
    }

    #[test]
    fn zero_divisor_is_an_error() {
        assert_eq!(
            apply(BinaryOp::Divide, 1, 0),
            Err(FoldexError::DivisionByZero)
        );
    }
}
