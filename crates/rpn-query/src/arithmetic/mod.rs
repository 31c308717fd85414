//! Reverse Polish Notation calculator over `f64` operands.
//!
//! Tokens are whitespace-separated. Operator tokens (`+ - * / ^ **`) consume
//! the top two stack values; every other token must parse as an `f64`
//! literal. A complete expression must leave exactly one value behind.

mod operator;

use crate::errors::{EvalError, insufficient_operands};
use crate::stack::Stack;
use crate::trace::{ArithmeticTrace, Step};

pub use operator::ArithmeticOp;

/// Stateful RPN calculator owning its numeric stack.
///
/// [`evaluate_expression`](Self::evaluate_expression) clears the stack first,
/// so one calculator may be reused across independent expressions.
///
/// # Examples
/// ```
/// use rpn_query::RpnCalculator;
///
/// let mut calc = RpnCalculator::new();
/// assert_eq!(calc.evaluate_expression("3 4 + 5 6 + *"), Ok(77.0));
///
/// calc.evaluate_token("2").expect("literal");
/// calc.evaluate_token("3").expect("literal");
/// calc.evaluate_token("^").expect("operator");
/// assert_eq!(calc.stack().peek(), Ok(&8.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RpnCalculator {
    stack: Stack<f64>,
}

impl RpnCalculator {
    /// Create a calculator with an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the operand stack.
    #[must_use]
    pub fn stack(&self) -> &Stack<f64> {
        &self.stack
    }

    /// Consume a single token.
    ///
    /// # Errors
    /// - [`EvalError::InsufficientOperands`] when an operator finds fewer than
    ///   two values; the stack is left unchanged.
    /// - [`EvalError::UnknownToken`] when the token is neither an operator nor
    ///   an `f64` literal.
    pub fn evaluate_token(&mut self, token: &str) -> Result<(), EvalError> {
        if let Ok(op) = token.parse::<ArithmeticOp>() {
            return self.apply(op);
        }
        let value = token
            .parse::<f64>()
            .map_err(|_| EvalError::UnknownToken(token.to_string()))?;
        self.stack.push(value);
        Ok(())
    }

    fn apply(&mut self, op: ArithmeticOp) -> Result<(), EvalError> {
        let available = self.stack.len();
        let (a, b) = self.stack.pop_pair().ok_or_else(|| {
            insufficient_operands(op.as_str(), ArithmeticOp::ARITY, available)
        })?;
        self.stack.push(op.apply(a, b));
        Ok(())
    }

    /// Evaluate a whole whitespace-separated expression.
    ///
    /// # Errors
    /// Propagates the first token failure, or returns
    /// [`EvalError::InvalidExpression`] when the stack does not reduce to
    /// exactly one value.
    pub fn evaluate_expression(&mut self, expression: &str) -> Result<f64, EvalError> {
        self.stack.clear();
        for token in expression.split_whitespace() {
            self.evaluate_token(token)?;
        }
        self.take_result()
    }

    /// Evaluate an expression and record the stack after every token.
    ///
    /// # Errors
    /// Same as [`evaluate_expression`](Self::evaluate_expression).
    pub fn trace_expression(&mut self, expression: &str) -> Result<ArithmeticTrace, EvalError> {
        self.stack.clear();
        let mut steps = Vec::new();
        for token in expression.split_whitespace() {
            self.evaluate_token(token)?;
            steps.push(Step {
                token: token.to_string(),
                stack: self.stack.as_slice().to_vec(),
            });
        }
        let result = self.take_result()?;
        Ok(ArithmeticTrace { steps, result })
    }

    /// The result stays on the stack so manual stepping can continue from it.
    fn take_result(&self) -> Result<f64, EvalError> {
        match self.stack.len() {
            1 => self.stack.peek().copied(),
            remaining => Err(EvalError::InvalidExpression { remaining }),
        }
    }
}
