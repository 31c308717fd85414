//! Reverse Polish Notation evaluation and boolean query matching.
//!
//! The crate has two engines sharing one generic [`Stack`]:
//!
//! - [`RpnCalculator`] evaluates whitespace-separated arithmetic RPN such as
//!   `15 3 / 2 + 8 3 - *`.
//! - [`QueryMatcher`] decides whether a document satisfies an infix boolean
//!   query such as `(python OR java) AND guide`, by substituting terms with
//!   truth literals, converting the infix tokens to RPN, and evaluating them.
//!
//! Both engines report failures through [`EvalError`] and can return a
//! step-by-step trace for callers that want to narrate evaluation. The crate
//! performs no logging or output of its own.
//!
//! # Examples
//! ```
//! use rpn_query::{evaluate_arithmetic_rpn, match_boolean_query};
//!
//! assert_eq!(evaluate_arithmetic_rpn("3 2 + 4 +"), Ok(9.0));
//! assert_eq!(
//!     match_boolean_query("(python OR java) AND guide", "Java guide tutorial"),
//!     Ok(true)
//! );
//! ```

mod arithmetic;
mod errors;
mod query;
mod stack;
mod trace;

pub use arithmetic::{ArithmeticOp, RpnCalculator};
pub use errors::EvalError;
pub use query::{
    BooleanEvaluator, InfixConverter, PrecedenceTable, QueryMatcher, QueryTrace, Token,
    join_tokens, substitute_terms, tokenize,
};
pub use stack::Stack;
pub use trace::{ArithmeticTrace, Step};

/// Evaluate a whitespace-separated arithmetic RPN expression.
///
/// # Errors
/// Returns [`EvalError`] when a token is unknown, an operator lacks operands,
/// or the expression does not reduce to exactly one value.
pub fn evaluate_arithmetic_rpn(expression: &str) -> Result<f64, EvalError> {
    RpnCalculator::new().evaluate_expression(expression)
}

/// Decide whether `document` satisfies the infix boolean `query` using the
/// default operator precedence.
///
/// # Errors
/// Returns [`EvalError`] when the converted query cannot be evaluated.
pub fn match_boolean_query(query: &str, document: &str) -> Result<bool, EvalError> {
    QueryMatcher::default().matches(query, document)
}
