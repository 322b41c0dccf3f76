//! Integer arithmetic under an [`OverflowPolicy`]
//!
//! Every function returns `None` when the result does not fit and the policy
//! is `OverflowPolicy::Error`. `Wrap` and `Saturate` always produce a value.

use crate::lexer::Symbol;
use std::fmt;
use tally_config::OverflowPolicy;

/// Arithmetic operation, named in overflow errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Negate,
}

impl Operation {
    /// Binary operation written with the given symbol
    pub fn binary(symbol: Symbol) -> Option<Self> {
        match symbol {
            Symbol::Plus => Some(Operation::Add),
            Symbol::Minus => Some(Operation::Subtract),
            Symbol::Star => Some(Operation::Multiply),
            Symbol::Slash => Some(Operation::Divide),
            Symbol::LeftParen | Symbol::RightParen => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
            Operation::Negate => "negation",
        };
        f.write_str(name)
    }
}

/// Append one decimal digit: `acc * 10 + digit`
pub fn push_digit(policy: OverflowPolicy, acc: i64, digit: i64) -> Option<i64> {
    match policy {
        OverflowPolicy::Error => acc.checked_mul(10)?.checked_add(digit),
        OverflowPolicy::Wrap => Some(acc.wrapping_mul(10).wrapping_add(digit)),
        OverflowPolicy::Saturate => Some(acc.saturating_mul(10).saturating_add(digit)),
    }
}

/// Apply a binary operation. Division truncates toward zero.
///
/// A zero divisor always yields `None`; callers report it as division by
/// zero before getting here.
pub fn apply(policy: OverflowPolicy, operation: Operation, lhs: i64, rhs: i64) -> Option<i64> {
    if operation == Operation::Divide && rhs == 0 {
        return None;
    }
    match (policy, operation) {
        (_, Operation::Negate) => None,

        (OverflowPolicy::Error, Operation::Add) => lhs.checked_add(rhs),
        (OverflowPolicy::Error, Operation::Subtract) => lhs.checked_sub(rhs),
        (OverflowPolicy::Error, Operation::Multiply) => lhs.checked_mul(rhs),
        (OverflowPolicy::Error, Operation::Divide) => lhs.checked_div(rhs),

        (OverflowPolicy::Wrap, Operation::Add) => Some(lhs.wrapping_add(rhs)),
        (OverflowPolicy::Wrap, Operation::Subtract) => Some(lhs.wrapping_sub(rhs)),
        (OverflowPolicy::Wrap, Operation::Multiply) => Some(lhs.wrapping_mul(rhs)),
        (OverflowPolicy::Wrap, Operation::Divide) => Some(lhs.wrapping_div(rhs)),

        (OverflowPolicy::Saturate, Operation::Add) => Some(lhs.saturating_add(rhs)),
        (OverflowPolicy::Saturate, Operation::Subtract) => Some(lhs.saturating_sub(rhs)),
        (OverflowPolicy::Saturate, Operation::Multiply) => Some(lhs.saturating_mul(rhs)),
        (OverflowPolicy::Saturate, Operation::Divide) => Some(lhs.saturating_div(rhs)),
    }
}

/// Unary minus
pub fn negate(policy: OverflowPolicy, value: i64) -> Option<i64> {
    match policy {
        OverflowPolicy::Error => value.checked_neg(),
        OverflowPolicy::Wrap => Some(value.wrapping_neg()),
        OverflowPolicy::Saturate => Some(value.saturating_neg()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_digit() {
        let mut acc = 0;
        for digit in [1, 2, 3] {
            acc = push_digit(OverflowPolicy::Error, acc, digit).unwrap();
        }
        assert_eq!(acc, 123);
    }

    #[test]
    fn test_push_digit_overflow() {
        assert_eq!(push_digit(OverflowPolicy::Error, i64::MAX / 10, 8), None);
        assert_eq!(
            push_digit(OverflowPolicy::Saturate, i64::MAX / 10, 8),
            Some(i64::MAX)
        );
        assert_eq!(
            push_digit(OverflowPolicy::Wrap, i64::MAX / 10, 8),
            Some(i64::MIN)
        );
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(apply(OverflowPolicy::Error, Operation::Divide, 7, 2), Some(3));
        assert_eq!(apply(OverflowPolicy::Error, Operation::Divide, -7, 2), Some(-3));
        assert_eq!(apply(OverflowPolicy::Error, Operation::Divide, 7, -2), Some(-3));
    }

    #[test]
    fn test_zero_divisor_never_panics() {
        for policy in [OverflowPolicy::Error, OverflowPolicy::Wrap, OverflowPolicy::Saturate] {
            assert_eq!(apply(policy, Operation::Divide, 1, 0), None);
        }
    }

    #[test]
    fn test_min_divided_by_minus_one() {
        assert_eq!(apply(OverflowPolicy::Error, Operation::Divide, i64::MIN, -1), None);
        assert_eq!(
            apply(OverflowPolicy::Wrap, Operation::Divide, i64::MIN, -1),
            Some(i64::MIN)
        );
        assert_eq!(
            apply(OverflowPolicy::Saturate, Operation::Divide, i64::MIN, -1),
            Some(i64::MAX)
        );
    }

    #[test]
    fn test_add_overflow_by_policy() {
        assert_eq!(apply(OverflowPolicy::Error, Operation::Add, i64::MAX, 1), None);
        assert_eq!(
            apply(OverflowPolicy::Wrap, Operation::Add, i64::MAX, 1),
            Some(i64::MIN)
        );
        assert_eq!(
            apply(OverflowPolicy::Saturate, Operation::Add, i64::MAX, 1),
            Some(i64::MAX)
        );
    }

    #[test]
    fn test_negate() {
        assert_eq!(negate(OverflowPolicy::Error, 5), Some(-5));
        assert_eq!(negate(OverflowPolicy::Error, i64::MIN), None);
        assert_eq!(negate(OverflowPolicy::Saturate, i64::MIN), Some(i64::MAX));
    }

    #[test]
    fn test_operation_from_symbol() {
        assert_eq!(Operation::binary(Symbol::Star), Some(Operation::Multiply));
        assert_eq!(Operation::binary(Symbol::LeftParen), None);
        assert_eq!(Operation::Negate.to_string(), "negation");
    }
}
