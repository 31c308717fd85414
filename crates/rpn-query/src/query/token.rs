//! Boolean query tokens.

use std::fmt;
use std::str::FromStr;

use crate::errors::EvalError;

/// Token of a substituted boolean query.
///
/// Parsing is an exact, case-sensitive match on the canonical text, so `and`
/// or `t` are not tokens.
///
/// # Examples
/// ```
/// use rpn_query::Token;
///
/// assert_eq!("NOT".parse::<Token>(), Ok(Token::Not));
/// assert_eq!(Token::Not.arity(), Some(1));
/// assert!("not".parse::<Token>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `T`, a term present in the document.
    True,
    /// `F`, a term absent from the document.
    False,
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `NOT`
    Not,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Token {
    /// Canonical token text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::True => "T",
            Self::False => "F",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }

    /// Operands consumed by an operator token; `None` for literals and
    /// parentheses.
    #[must_use]
    pub const fn arity(self) -> Option<usize> {
        match self {
            Self::Not => Some(1),
            Self::And | Self::Or => Some(2),
            Self::True | Self::False | Self::LParen | Self::RParen => None,
        }
    }

    /// Whether the token is one of `AND`, `OR` or `NOT`.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        self.arity().is_some()
    }

    /// Truth value of a literal token.
    #[must_use]
    pub const fn literal(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            _ => None,
        }
    }

    /// Map a multi-character operator keyword.
    pub(crate) fn keyword(word: &str) -> Option<Self> {
        match word {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            _ => None,
        }
    }

    /// Map a token that is always a single character.
    pub(crate) const fn single_char(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            'T' => Some(Self::True),
            'F' => Some(Self::False),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Token {
    type Err = EvalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut chars = value.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::single_char(ch),
            _ => None,
        };
        single
            .or_else(|| Self::keyword(value))
            .ok_or_else(|| EvalError::UnknownToken(value.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Token {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Render tokens as space-separated canonical text.
///
/// # Examples
/// ```
/// use rpn_query::{Token, join_tokens};
///
/// assert_eq!(join_tokens(&[Token::True, Token::Not]), "T NOT");
/// ```
#[must_use]
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("T", Token::True)]
    #[case("F", Token::False)]
    #[case("AND", Token::And)]
    #[case("OR", Token::Or)]
    #[case("NOT", Token::Not)]
    #[case("(", Token::LParen)]
    #[case(")", Token::RParen)]
    fn parses_canonical_text(#[case] input: &str, #[case] expected: Token) {
        assert_eq!(input.parse::<Token>(), Ok(expected));
        assert_eq!(expected.as_str(), input);
    }

    #[rstest]
    #[case("t")]
    #[case("and")]
    #[case("Or")]
    #[case("TT")]
    #[case("")]
    #[case("XOR")]
    fn rejects_other_text(#[case] input: &str) {
        assert_eq!(
            input.parse::<Token>(),
            Err(EvalError::UnknownToken(input.to_string()))
        );
    }

    #[test]
    fn classifies_operators() {
        assert!(Token::And.is_operator());
        assert!(Token::Not.is_operator());
        assert!(!Token::True.is_operator());
        assert!(!Token::LParen.is_operator());
        assert_eq!(Token::Or.arity(), Some(2));
    }

    #[test]
    fn literals_carry_truth_values() {
        assert_eq!(Token::True.literal(), Some(true));
        assert_eq!(Token::False.literal(), Some(false));
        assert_eq!(Token::And.literal(), None);
    }
}
