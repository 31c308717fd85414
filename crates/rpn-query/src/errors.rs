//! Error types shared by the arithmetic and boolean evaluators.

use thiserror::Error;

/// Errors surfaced while evaluating RPN expressions or boolean queries.
///
/// Every variant is a local validation failure. Evaluation stops at the first
/// failure and no partial result is returned alongside it.
///
/// # Examples
/// ```
/// use rpn_query::{EvalError, evaluate_arithmetic_rpn};
///
/// let err = evaluate_arithmetic_rpn("3 2").unwrap_err();
/// assert_eq!(err, EvalError::InvalidExpression { remaining: 2 });
/// assert_eq!(err.to_string(), "invalid expression: expected 1 result, got 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A pop or peek was attempted on an empty stack.
    #[error("stack is empty")]
    EmptyStack,

    /// An operator found fewer operands on the stack than it consumes.
    #[error("insufficient operands for {operator}: requires {required}, found {available}")]
    InsufficientOperands {
        /// Canonical text of the operator, for example `+` or `AND`.
        operator: &'static str,
        /// Number of operands the operator consumes.
        required: usize,
        /// Number of values that were on the stack.
        available: usize,
    },

    /// A token is neither a known operator nor a parseable literal.
    #[error("unknown token: {0}")]
    UnknownToken(String),

    /// Evaluation finished but the stack did not hold exactly one value.
    #[error("invalid expression: expected 1 result, got {remaining}")]
    InvalidExpression {
        /// Number of values left on the stack.
        remaining: usize,
    },
}

pub(crate) fn insufficient_operands(
    operator: &'static str,
    required: usize,
    available: usize,
) -> EvalError {
    EvalError::InsufficientOperands {
        operator,
        required,
        available,
    }
}
