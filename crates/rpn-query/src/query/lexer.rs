//! Splits a substituted query into tokens.
//!
//! The input is expected to contain only `T`, `F`, `AND`, `OR`, `NOT` and
//! parentheses separated by optional spaces. Single-character tokens are
//! emitted as soon as they start a word; other characters accumulate until
//! they spell an operator keyword. A space discards an unfinished word, as
//! does the end of input, so malformed text is dropped rather than reported.

use super::token::Token;

/// Tokenise a query whose terms were already replaced by `T` or `F`.
///
/// # Examples
/// ```
/// use rpn_query::{Token, tokenize};
///
/// assert_eq!(
///     tokenize("(T OR F) AND NOT T"),
///     vec![
///         Token::LParen,
///         Token::True,
///         Token::Or,
///         Token::False,
///         Token::RParen,
///         Token::And,
///         Token::Not,
///         Token::True,
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for ch in input.chars() {
        if ch == ' ' {
            word.clear();
            continue;
        }
        if let Some(token) = Token::single_char(ch).filter(|_| word.is_empty()) {
            tokens.push(token);
            continue;
        }
        word.push(ch);
        if let Some(token) = Token::keyword(&word) {
            tokens.push(token);
            word.clear();
        }
    }

    tokens
}
