//! Shunting-yard conversion from infix token order to RPN.

use super::precedence::PrecedenceTable;
use super::token::Token;

/// Converts infix boolean token sequences to postfix order.
///
/// Every operator, `NOT` included, pops stacked operators of equal or higher
/// rank before it is pushed. Consecutive `NOT`s therefore do not nest:
/// `NOT NOT T` becomes `NOT T NOT`, which cannot be evaluated.
///
/// Unbalanced parentheses are not reported here. A surplus `)` is ignored and
/// a surplus `(` is flushed to the output, where the evaluator rejects it.
///
/// # Examples
/// ```
/// use rpn_query::{InfixConverter, join_tokens, tokenize};
///
/// let converter = InfixConverter::default();
/// let rpn = converter.convert(&tokenize("(F OR T) AND T"));
/// assert_eq!(join_tokens(&rpn), "F T OR T AND");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InfixConverter {
    precedence: PrecedenceTable,
}

impl InfixConverter {
    /// Create a converter ranking operators with `precedence`.
    #[must_use]
    pub const fn new(precedence: PrecedenceTable) -> Self {
        Self { precedence }
    }

    /// Reorder `tokens` into RPN.
    #[must_use]
    pub fn convert(&self, tokens: &[Token]) -> Vec<Token> {
        let mut output = Vec::with_capacity(tokens.len());
        let mut operators: Vec<Token> = Vec::new();

        for &token in tokens {
            match token {
                Token::LParen => operators.push(token),
                Token::RParen => {
                    while let Some(top) = operators.pop() {
                        if top == Token::LParen {
                            break;
                        }
                        output.push(top);
                    }
                }
                operator if operator.is_operator() => {
                    let rank = self.precedence.rank(operator);
                    while let Some(&top) = operators.last() {
                        if self.precedence.rank(top) < rank {
                            break;
                        }
                        output.push(top);
                        operators.pop();
                    }
                    operators.push(operator);
                }
                _ => output.push(token),
            }
        }

        output.extend(operators.into_iter().rev());
        output
    }
}
