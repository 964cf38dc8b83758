//! Arithmetic rules, split across the three operator precedence tiers.

use crate::class::TokenClass;
use crate::registry::{ReduceContext, Rule, Tier};
use crate::signature::{Bound, Signature};
use crate::token::{OperatorKind, Token, TokenVariant, Value};

/// The arithmetic rules.
#[must_use]
pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            Tier::FirstOrder,
            Signature::new("compound-number")
                .param("left", TokenClass::NUMERIC)
                .param("right", TokenClass::NUMERIC)
                .exact_types(),
            compound_number,
        ),
        Rule::new(
            Tier::FirstOrder,
            Signature::new("parentheses")
                .param("open", TokenClass::OPEN_PARENTHESIS)
                .param("value", TokenClass::NUMERIC)
                .param("close", TokenClass::CLOSE_PARENTHESIS)
                .exact_types(),
            parentheses,
        ),
        Rule::new(
            Tier::SecondOrder,
            Signature::new("second-order")
                .param("left", TokenClass::NUMERIC)
                .param("operator", TokenClass::SecondOrder)
                .param("right", TokenClass::NUMERIC),
            binary,
        ),
        Rule::new(
            Tier::ThirdOrder,
            Signature::new("third-order")
                .param("left", TokenClass::NUMERIC)
                .param("operator", TokenClass::ThirdOrder)
                .param("right", TokenClass::NUMERIC),
            binary,
        ),
    ]
}

fn number(bound: &Bound<'_>, value: f64) -> Token {
    bound
        .produce(TokenVariant::NUMERIC)
        .with_value(Value::Number(value))
}

fn parentheses(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    Some(number(bound, bound.token(1).number()?))
}

fn binary(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    let TokenVariant::Operator(OperatorKind::Arithmetic(operator)) = bound.token(1).variant else {
        return None;
    };
    let left = bound.token(0).number()?;
    let right = bound.token(2).number()?;
    Some(number(bound, operator.apply(left, right)?))
}

/// Spoken numbers: "five hundred", "twenty five", "two thousand".
///
/// The right-hand number must have been spelled out; digits next to digits
/// ("5 5") are two numbers.
fn compound_number(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    let (left, right) = (bound.token(0), bound.token(1));
    if right.text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-') {
        return None;
    }
    let (a, b) = (left.number()?, right.number()?);
    if a.fract() != 0.0 || b.fract() != 0.0 || a < 0.0 || b < 0.0 {
        return None;
    }

    let is_scale = [100.0, 1000.0, 1_000_000.0].contains(&b);
    let value = if is_scale && a < b {
        a * b
    } else if (a >= 100.0 && a % 100.0 == 0.0 && b < 100.0)
        || (a >= 20.0 && a % 10.0 == 0.0 && b < 10.0 && b > 0.0)
    {
        a + b
    } else {
        return None;
    };
    Some(number(bound, value))
}
