//! Operator precedence used by the infix-to-RPN conversion.

use super::token::Token;

/// Precedence ranks for boolean operators and the open parenthesis.
///
/// Higher ranks bind tighter. The open parenthesis must rank below every
/// operator so that operators never pop past it.
///
/// # Examples
/// ```
/// use rpn_query::{PrecedenceTable, Token};
///
/// let table = PrecedenceTable::default();
/// assert!(table.rank(Token::Not) > table.rank(Token::And));
/// assert!(table.rank(Token::And) > table.rank(Token::Or));
/// assert_eq!(table.rank(Token::LParen), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecedenceTable {
    not: u8,
    and: u8,
    or: u8,
    group: u8,
}

impl Default for PrecedenceTable {
    fn default() -> Self {
        Self::new(3, 2, 1, 0)
    }
}

impl PrecedenceTable {
    /// Build a table from explicit ranks.
    #[must_use]
    pub const fn new(not: u8, and: u8, or: u8, group: u8) -> Self {
        Self {
            not,
            and,
            or,
            group,
        }
    }

    /// Rank of `token`. Tokens outside the table rank 0.
    #[must_use]
    pub const fn rank(&self, token: Token) -> u8 {
        match token {
            Token::Not => self.not,
            Token::And => self.and,
            Token::Or => self.or,
            Token::LParen => self.group,
            Token::True | Token::False | Token::RParen => 0,
        }
    }
}
