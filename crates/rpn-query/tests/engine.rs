//! Public-surface behaviour of both engines.
#![expect(clippy::expect_used, reason = "tests assert successful evaluation")]

use rstest::rstest;
use serde_json::json;

use rpn_query::{
    EvalError, PrecedenceTable, QueryMatcher, RpnCalculator, evaluate_arithmetic_rpn,
    match_boolean_query,
};

#[rstest]
#[case("3 2 + 4 +", 9.0)]
#[case("3 4 + 5 6 + *", 77.0)]
#[case("15 3 / 2 + 8 3 - *", 35.0)]
#[case("2 3 ^", 8.0)]
fn evaluates_reference_expressions(#[case] expression: &str, #[case] expected: f64) {
    assert_eq!(evaluate_arithmetic_rpn(expression), Ok(expected));
}

#[rstest]
#[case("-1 1e18 ^", 1.0)]
#[case("-2 1e18 ^", f64::INFINITY)]
#[case("-0.5 1e18 **", 0.0)]
fn huge_powers_of_negative_bases_return(#[case] expression: &str, #[case] expected: f64) {
    assert_eq!(evaluate_arithmetic_rpn(expression), Ok(expected));
}

#[test]
fn rejects_leftover_operands() {
    assert_eq!(
        evaluate_arithmetic_rpn("3 2"),
        Err(EvalError::InvalidExpression { remaining: 2 })
    );
}

#[test]
fn rejects_operator_without_operands() {
    assert!(matches!(
        evaluate_arithmetic_rpn("+"),
        Err(EvalError::InsufficientOperands { operator: "+", .. })
    ));
}

#[rstest]
#[case("python", "Python tutorial", true)]
#[case("python", "C tutorial", false)]
#[case("python AND tutorial", "Python tutorial", true)]
#[case("python AND tutorial", "C tutorial", false)]
#[case("(python OR java) AND guide", "Java guide tutorial", true)]
fn matches_reference_queries(#[case] query: &str, #[case] document: &str, #[case] expected: bool) {
    assert_eq!(match_boolean_query(query, document), Ok(expected));
}

#[test]
fn matching_has_no_hidden_state() {
    let results: Vec<_> = (0..3)
        .map(|_| match_boolean_query("python OR NOT guide", "C++ Guide"))
        .collect();
    assert_eq!(results, vec![Ok(false), Ok(false), Ok(false)]);
}

#[test]
fn matcher_with_injected_precedence_is_independent() {
    let standard = QueryMatcher::default();
    let flat = QueryMatcher::new(PrecedenceTable::new(3, 1, 1, 0));
    // `T OR F AND F` groups as `T OR (F AND F)` normally, `(T OR F) AND F` when flat.
    let query = "python OR java AND rust";
    let document = "python";
    assert_eq!(standard.matches(query, document), Ok(true));
    assert_eq!(flat.matches(query, document), Ok(false));
}

#[test]
fn arithmetic_trace_serialises_to_json() {
    let trace = RpnCalculator::new()
        .trace_expression("2 3 ^")
        .expect("expression is valid");
    let json = serde_json::to_value(&trace).expect("trace serialises");
    assert_eq!(json.pointer("/result"), Some(&json!(8.0)));
    assert_eq!(json.pointer("/steps/2/token"), Some(&json!("^")));
    assert_eq!(json.pointer("/steps/2/stack"), Some(&json!([8.0])));
}

#[test]
fn query_trace_serialises_tokens_as_text() {
    let trace = QueryMatcher::default()
        .trace("python AND NOT java", "Python tutorial")
        .expect("query is valid");
    let json = serde_json::to_value(&trace).expect("trace serialises");
    assert_eq!(json.pointer("/converted"), Some(&json!("T AND NOT F")));
    assert_eq!(json.pointer("/rpn"), Some(&json!(["T", "F", "NOT", "AND"])));
    assert_eq!(json.pointer("/result"), Some(&json!(true)));
}
