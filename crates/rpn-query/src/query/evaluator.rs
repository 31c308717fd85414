//! Stack evaluation of boolean RPN token sequences.

use crate::errors::{EvalError, insufficient_operands};
use crate::stack::Stack;
use crate::trace::Step;

use super::token::Token;

/// Evaluates boolean RPN over its own stack.
///
/// # Examples
/// ```
/// use rpn_query::{BooleanEvaluator, EvalError, Token};
///
/// let mut evaluator = BooleanEvaluator::new();
/// let rpn = [Token::True, Token::False, Token::Or, Token::Not];
/// assert_eq!(evaluator.evaluate_sequence(&rpn), Ok(false));
///
/// assert_eq!(
///     evaluator.evaluate_strs(["T", "maybe"]),
///     Err(EvalError::UnknownToken("maybe".into()))
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct BooleanEvaluator {
    stack: Stack<bool>,
}

impl BooleanEvaluator {
    /// Create an evaluator with an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the operand stack.
    #[must_use]
    pub fn stack(&self) -> &Stack<bool> {
        &self.stack
    }

    /// Consume a single RPN token.
    ///
    /// # Errors
    /// - [`EvalError::InsufficientOperands`] naming the operator when the
    ///   stack is too short; the stack is left unchanged.
    /// - [`EvalError::UnknownToken`] for a parenthesis, which has no meaning
    ///   in RPN.
    pub fn evaluate_token(&mut self, token: Token) -> Result<(), EvalError> {
        if let Some(value) = token.literal() {
            self.stack.push(value);
            return Ok(());
        }
        let Some(required) = token.arity() else {
            return Err(EvalError::UnknownToken(token.as_str().to_string()));
        };
        let available = self.stack.len();
        let shortfall = || insufficient_operands(token.as_str(), required, available);
        let value = match token {
            Token::Not => !self.stack.pop().map_err(|_| shortfall())?,
            Token::And => {
                let (first, second) = self.stack.pop_pair().ok_or_else(shortfall)?;
                first && second
            }
            _ => {
                let (first, second) = self.stack.pop_pair().ok_or_else(shortfall)?;
                first || second
            }
        };
        self.stack.push(value);
        Ok(())
    }

    /// Evaluate a full RPN sequence from an empty stack.
    ///
    /// # Errors
    /// Propagates the first token failure, or returns
    /// [`EvalError::InvalidExpression`] unless exactly one value remains.
    pub fn evaluate_sequence(&mut self, tokens: &[Token]) -> Result<bool, EvalError> {
        self.stack.clear();
        for &token in tokens {
            self.evaluate_token(token)?;
        }
        self.take_result()
    }

    /// Evaluate textual RPN tokens, parsing each by exact match first.
    ///
    /// # Errors
    /// Returns [`EvalError::UnknownToken`] for text that is not a token, plus
    /// everything [`evaluate_sequence`](Self::evaluate_sequence) reports.
    pub fn evaluate_strs<'a, I>(&mut self, tokens: I) -> Result<bool, EvalError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.stack.clear();
        for text in tokens {
            self.evaluate_token(text.parse()?)?;
        }
        self.take_result()
    }

    /// Evaluate a sequence and record the stack after every token.
    ///
    /// # Errors
    /// Same as [`evaluate_sequence`](Self::evaluate_sequence).
    pub fn trace_sequence(
        &mut self,
        tokens: &[Token],
    ) -> Result<(Vec<Step<bool>>, bool), EvalError> {
        self.stack.clear();
        let mut steps = Vec::with_capacity(tokens.len());
        for &token in tokens {
            self.evaluate_token(token)?;
            steps.push(Step {
                token: token.as_str().to_string(),
                stack: self.stack.as_slice().to_vec(),
            });
        }
        let result = self.take_result()?;
        Ok((steps, result))
    }

    fn take_result(&mut self) -> Result<bool, EvalError> {
        std::mem::take(&mut self.stack).into_single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn eval(text: &str) -> Result<bool, EvalError> {
        BooleanEvaluator::new().evaluate_strs(text.split_whitespace())
    }

    #[rstest]
    #[case("T", true)]
    #[case("F", false)]
    #[case("T F AND", false)]
    #[case("T T AND", true)]
    #[case("F T OR", true)]
    #[case("F F OR", false)]
    #[case("T NOT", false)]
    #[case("F NOT", true)]
    #[case("F T OR T AND", true)]
    #[case("T F NOT AND", true)]
    fn evaluates_rpn(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(eval(text), Ok(expected));
    }

    #[rstest]
    #[case("AND", insufficient_operands("AND", 2, 0))]
    #[case("T OR", insufficient_operands("OR", 2, 1))]
    #[case("NOT", insufficient_operands("NOT", 1, 0))]
    #[case("NOT T NOT", insufficient_operands("NOT", 1, 0))]
    #[case("T T", EvalError::InvalidExpression { remaining: 2 })]
    #[case("", EvalError::InvalidExpression { remaining: 0 })]
    #[case("T (", EvalError::UnknownToken("(".into()))]
    #[case("T true", EvalError::UnknownToken("true".into()))]
    fn reports_failures(#[case] text: &str, #[case] expected: EvalError) {
        assert_eq!(eval(text), Err(expected));
    }

    #[rstest]
    #[case(Token::And)]
    #[case(Token::Or)]
    #[case(Token::Not)]
    fn shortfall_reports_operator_arity(#[case] operator: Token) {
        let mut evaluator = BooleanEvaluator::new();
        let Err(EvalError::InsufficientOperands {
            required, available, ..
        }) = evaluator.evaluate_token(operator)
        else {
            panic!("{operator} should need operands");
        };
        assert_eq!(Some(required), operator.arity());
        assert_eq!(available, 0);
    }

    #[rstest]
    #[case(Token::LParen)]
    #[case(Token::RParen)]
    fn parentheses_are_unknown_in_rpn(#[case] paren: Token) {
        let mut evaluator = BooleanEvaluator::new();
        assert_eq!(
            evaluator.evaluate_token(paren),
            Err(EvalError::UnknownToken(paren.as_str().to_string()))
        );
    }

    #[test]
    fn failed_operator_leaves_stack_untouched() {
        let mut evaluator = BooleanEvaluator::new();
        assert!(evaluator.evaluate_token(Token::True).is_ok());
        assert!(evaluator.evaluate_token(Token::And).is_err());
        assert_eq!(evaluator.stack().as_slice(), &[true]);
    }

    #[test]
    fn sequence_starts_from_empty_stack() {
        let mut evaluator = BooleanEvaluator::new();
        assert!(evaluator.evaluate_token(Token::False).is_ok());
        assert_eq!(evaluator.evaluate_sequence(&[Token::True]), Ok(true));
        assert!(evaluator.stack().is_empty());
    }

    #[test]
    fn trace_records_each_step() {
        let mut evaluator = BooleanEvaluator::new();
        let Ok((steps, result)) =
            evaluator.trace_sequence(&[Token::True, Token::True, Token::And])
        else {
            panic!("sequence should evaluate");
        };
        assert!(result);
        let stacks: Vec<Vec<bool>> = steps.into_iter().map(|step| step.stack).collect();
        assert_eq!(stacks, vec![vec![true], vec![true, true], vec![true]]);
    }
}
