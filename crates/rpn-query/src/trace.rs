//! Step-by-step evaluation records for callers that narrate evaluation.

/// State of an evaluator after it consumed one token.
///
/// # Examples
/// ```
/// use rpn_query::RpnCalculator;
///
/// let trace = RpnCalculator::new()
///     .trace_expression("3 2 +")
///     .expect("expression is valid");
/// let last = trace.steps.last().expect("three steps were recorded");
/// assert_eq!(last.token, "+");
/// assert_eq!(last.stack, vec![5.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step<T> {
    /// Token text as it was consumed.
    pub token: String,
    /// Stack contents, bottom to top, after the token was applied.
    pub stack: Vec<T>,
}

/// Full record of an arithmetic evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArithmeticTrace {
    /// One entry per whitespace-separated token.
    pub steps: Vec<Step<f64>>,
    /// Final value.
    pub result: f64,
}
