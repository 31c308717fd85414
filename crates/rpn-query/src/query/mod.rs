//! Boolean query matching.
//!
//! A query such as `(python OR java) AND guide` is matched against one
//! document in four stages:
//!
//! 1. [`substitute_terms`] replaces each term with `T` or `F` depending on
//!    whether the document contains it.
//! 2. [`tokenize`] splits the result into [`Token`]s.
//! 3. [`InfixConverter`] reorders the tokens into RPN using a
//!    [`PrecedenceTable`] where `NOT` binds tighter than `AND`, and `AND`
//!    tighter than `OR`.
//! 4. [`BooleanEvaluator`] reduces the RPN to a single truth value.
//!
//! [`QueryMatcher`] runs the whole pipeline.

mod evaluator;
mod lexer;
mod matcher;
mod precedence;
mod shunting;
mod substitute;
mod token;

pub use evaluator::BooleanEvaluator;
pub use lexer::tokenize;
pub use matcher::{QueryMatcher, QueryTrace};
pub use precedence::PrecedenceTable;
pub use shunting::InfixConverter;
pub use substitute::substitute_terms;
pub use token::{Token, join_tokens};
