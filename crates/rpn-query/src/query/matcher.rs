//! End-to-end matching of boolean queries against documents.

use crate::errors::EvalError;
use crate::trace::Step;

use super::evaluator::BooleanEvaluator;
use super::lexer::tokenize;
use super::precedence::PrecedenceTable;
use super::shunting::InfixConverter;
use super::substitute::substitute_terms;
use super::token::Token;

/// Every intermediate stage of one query match.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QueryTrace {
    /// Query after term substitution.
    pub converted: String,
    /// Tokens in infix order.
    pub tokens: Vec<Token>,
    /// Tokens in RPN order.
    pub rpn: Vec<Token>,
    /// Evaluator stack after each RPN token.
    pub steps: Vec<Step<bool>>,
    /// Whether the document matched.
    pub result: bool,
}

/// Runs substitution, tokenisation, conversion and evaluation.
///
/// The matcher holds only its precedence table, so one instance can serve
/// any number of independent matches.
///
/// # Examples
/// ```
/// use rpn_query::QueryMatcher;
///
/// let matcher = QueryMatcher::default();
/// assert_eq!(matcher.matches("python AND tutorial", "Python tutorial"), Ok(true));
///
/// let corpus = ["C++ Guide", "Java guide tutorial", "Python tutorial", "C tutorial"];
/// assert_eq!(
///     matcher.filter("(python OR java) AND guide", corpus),
///     vec!["Java guide tutorial"]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryMatcher {
    converter: InfixConverter,
}

impl QueryMatcher {
    /// Create a matcher ranking operators with `precedence`.
    #[must_use]
    pub const fn new(precedence: PrecedenceTable) -> Self {
        Self {
            converter: InfixConverter::new(precedence),
        }
    }

    /// Convert `query` into RPN for `document` without evaluating it.
    #[must_use]
    pub fn compile(&self, query: &str, document: &str) -> Vec<Token> {
        let converted = substitute_terms(query, document);
        self.converter.convert(&tokenize(&converted))
    }

    /// Decide whether `document` satisfies `query`.
    ///
    /// # Errors
    /// Returns the [`EvalError`] raised while evaluating the converted query.
    pub fn matches(&self, query: &str, document: &str) -> Result<bool, EvalError> {
        let rpn = self.compile(query, document);
        BooleanEvaluator::new().evaluate_sequence(&rpn)
    }

    /// Match `document` and keep every intermediate stage.
    ///
    /// # Errors
    /// Same as [`matches`](Self::matches).
    pub fn trace(&self, query: &str, document: &str) -> Result<QueryTrace, EvalError> {
        let converted = substitute_terms(query, document);
        let tokens = tokenize(&converted);
        let rpn = self.converter.convert(&tokens);
        let (steps, result) = BooleanEvaluator::new().trace_sequence(&rpn)?;
        Ok(QueryTrace {
            converted,
            tokens,
            rpn,
            steps,
            result,
        })
    }

    /// Keep the documents that match `query`, in input order.
    ///
    /// A document whose evaluation fails counts as a non-match.
    pub fn filter<'d, I>(&self, query: &str, documents: I) -> Vec<&'d str>
    where
        I: IntoIterator<Item = &'d str>,
    {
        documents
            .into_iter()
            .filter(|document| self.matches(query, document).unwrap_or(false))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::insufficient_operands;
    use crate::query::token::join_tokens;
    use rstest::{fixture, rstest};

    const CORPUS: [&str; 4] = [
        "C++ Guide",
        "Java guide tutorial",
        "Python tutorial",
        "C tutorial",
    ];

    #[fixture]
    fn matcher() -> QueryMatcher {
        QueryMatcher::default()
    }

    #[rstest]
    #[case("python", "Python tutorial", true)]
    #[case("python", "C tutorial", false)]
    #[case("python AND tutorial", "Python tutorial", true)]
    #[case("python AND tutorial", "C tutorial", false)]
    #[case("(python OR java) AND guide", "Java guide tutorial", true)]
    #[case("(python OR java) AND guide", "C++ Guide", false)]
    #[case("guide AND NOT java", "C++ Guide", true)]
    #[case("guide AND NOT java", "Java guide tutorial", false)]
    fn matches_documents(
        matcher: QueryMatcher,
        #[case] query: &str,
        #[case] document: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(matcher.matches(query, document), Ok(expected));
    }

    #[rstest]
    #[case("python", vec!["Python tutorial"])]
    #[case("python AND tutorial", vec!["Python tutorial"])]
    #[case("(python OR java) AND guide", vec!["Java guide tutorial"])]
    #[case("tutorial", vec!["Java guide tutorial", "Python tutorial", "C tutorial"])]
    fn filters_corpus(matcher: QueryMatcher, #[case] query: &str, #[case] expected: Vec<&str>) {
        assert_eq!(matcher.filter(query, CORPUS), expected);
    }

    #[rstest]
    fn failing_documents_are_filtered_out(matcher: QueryMatcher) {
        assert!(matcher.filter("python AND", CORPUS).is_empty());
    }

    #[rstest]
    fn trace_exposes_every_stage(matcher: QueryMatcher) {
        let Ok(trace) = matcher.trace("(python OR java) AND guide", "Java guide tutorial") else {
            panic!("query should evaluate");
        };
        assert_eq!(trace.converted, "(F OR T) AND T");
        assert_eq!(join_tokens(&trace.tokens), "( F OR T ) AND T");
        assert_eq!(join_tokens(&trace.rpn), "F T OR T AND");
        assert_eq!(trace.steps.len(), 5);
        assert!(trace.result);
    }

    #[rstest]
    fn double_negation_is_rejected(matcher: QueryMatcher) {
        assert_eq!(
            matcher.matches("NOT NOT python", "Python tutorial"),
            Err(insufficient_operands("NOT", 1, 0))
        );
    }

    #[rstest]
    fn capitalised_term_leaves_nothing_to_evaluate(matcher: QueryMatcher) {
        assert_eq!(
            matcher.matches("Python", "Python tutorial"),
            Err(EvalError::InvalidExpression { remaining: 0 })
        );
    }

    #[rstest]
    fn repeated_matches_agree(matcher: QueryMatcher) {
        let first = matcher.matches("java OR c", "C tutorial");
        let second = matcher.matches("java OR c", "C tutorial");
        assert_eq!(first, Ok(true));
        assert_eq!(first, second);
    }
}
