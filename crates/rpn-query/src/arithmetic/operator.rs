//! Binary arithmetic operators recognised by the RPN calculator.

use std::fmt;
use std::str::FromStr;

use crate::errors::EvalError;

/// Arithmetic operator parsed by exact match on its token text.
///
/// `^` and `**` both parse to [`ArithmeticOp::Pow`].
///
/// # Examples
/// ```
/// use rpn_query::ArithmeticOp;
///
/// assert_eq!("**".parse::<ArithmeticOp>(), Ok(ArithmeticOp::Pow));
/// assert_eq!(ArithmeticOp::Sub.apply(7.0, 2.0), 5.0);
/// assert!("%".parse::<ArithmeticOp>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, IEEE-754 semantics for a zero divisor.
    Div,
    /// `^` or `**`, computed by repeated multiplication.
    Pow,
}

impl ArithmeticOp {
    /// Operands consumed by every arithmetic operator.
    pub const ARITY: usize = 2;

    /// Canonical token text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Apply the operator as `a op b`, where `b` is the most recently pushed
    /// operand.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the calculator is defined over f64 operands"
    )]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
            Self::Pow => repeated_power(a, b),
        }
    }
}

/// Raise `base` by multiplying it `trunc(exponent)` times onto 1.0.
///
/// Negative and NaN exponents perform no multiplications, so the result is
/// 1.0. Fractional exponents are truncated toward zero.
///
/// The magnitude is accumulated separately from the sign, which follows the
/// parity of the iteration count. The magnitude is monotonic, so the loop
/// stops once it reaches a fixed point (1, 0, infinity or NaN) whatever the
/// sign of `base`.
#[expect(
    clippy::float_arithmetic,
    reason = "power is defined as repeated f64 multiplication"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "saturating float-to-int cast gives the truncated iteration count"
)]
fn repeated_power(base: f64, exponent: f64) -> f64 {
    let iterations = exponent.trunc() as u64;
    let magnitude = base.abs();
    let mut result = 1.0_f64;
    for _ in 0..iterations {
        let next = result * magnitude;
        if next.to_bits() == result.to_bits() {
            break;
        }
        result = next;
    }
    if base.is_sign_negative() && iterations & 1 == 1 {
        -result
    } else {
        result
    }
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArithmeticOp {
    type Err = EvalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            "^" | "**" => Ok(Self::Pow),
            other => Err(EvalError::UnknownToken(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("+", ArithmeticOp::Add)]
    #[case("-", ArithmeticOp::Sub)]
    #[case("*", ArithmeticOp::Mul)]
    #[case("/", ArithmeticOp::Div)]
    #[case("^", ArithmeticOp::Pow)]
    #[case("**", ArithmeticOp::Pow)]
    fn parses_operator_tokens(#[case] input: &str, #[case] expected: ArithmeticOp) {
        assert_eq!(input.parse::<ArithmeticOp>(), Ok(expected));
    }

    #[rstest]
    #[case("x")]
    #[case("***")]
    #[case(" +")]
    #[case("")]
    fn rejects_non_operator_text(#[case] input: &str) {
        assert_eq!(
            input.parse::<ArithmeticOp>(),
            Err(EvalError::UnknownToken(input.to_string()))
        );
    }

    #[rstest]
    #[case(2.0, 3.0, 8.0)]
    #[case(2.0, 0.0, 1.0)]
    #[case(2.0, 3.9, 8.0)]
    #[case(2.0, -1.0, 1.0)]
    #[case(9.0, 0.5, 1.0)]
    #[case(-3.0, 3.0, -27.0)]
    #[case(5.0, f64::NAN, 1.0)]
    fn power_truncates_exponent(#[case] base: f64, #[case] exponent: f64, #[case] expected: f64) {
        assert_eq!(ArithmeticOp::Pow.apply(base, exponent), expected);
    }

    #[rstest]
    #[case(1.0, 1e18, 1.0)]
    #[case(0.0, f64::INFINITY, 0.0)]
    #[case(10.0, 1e18, f64::INFINITY)]
    #[case(-1.0, 1e18, 1.0)]
    #[case(-1.0, 9_007_199_254_740_991.0, -1.0)]
    #[case(-2.0, 1e18, f64::INFINITY)]
    #[case(-2.0, 1025.0, f64::NEG_INFINITY)]
    #[case(-0.5, 1e18, 0.0)]
    fn power_with_huge_exponent_terminates_at_fixed_point(
        #[case] base: f64,
        #[case] exponent: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(ArithmeticOp::Pow.apply(base, exponent), expected);
    }

    #[test]
    fn power_of_negative_base_keeps_sign_parity() {
        assert_eq!(ArithmeticOp::Pow.apply(-3.0, 4.0), 81.0);
        assert_eq!(ArithmeticOp::Pow.apply(-0.5, 3.0), -0.125);
        assert!(ArithmeticOp::Pow.apply(-0.0, 1.0).is_sign_negative());
        assert!(ArithmeticOp::Pow.apply(-0.0, 2.0).is_sign_positive());
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        assert_eq!(ArithmeticOp::Div.apply(1.0, 0.0), f64::INFINITY);
        assert!(ArithmeticOp::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn displays_canonical_text() {
        assert_eq!(ArithmeticOp::Pow.to_string(), "^");
        assert_eq!(ArithmeticOp::Mul.to_string(), "*");
    }
}
