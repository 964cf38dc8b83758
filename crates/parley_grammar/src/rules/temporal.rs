//! Temporal rules: building dates, times, and spans from their pieces.

use parley_foundation::{TemporalPattern, TimeModifier};

use crate::class::TokenClass;
use crate::registry::{ReduceContext, Rule, Tier};
use crate::signature::{Bound, Signature};
use crate::token::{
    Adjective, Article, Preposition, PrimitiveKind, SyntaxKind, TemporalKind, Token, TokenVariant,
    Value,
};

/// The temporal rules.
#[must_use]
pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            Tier::General,
            Signature::new("unit-amount")
                .param("amount", TokenClass::NUMERIC)
                .param("unit", TokenClass::TimeUnit),
            unit_amount,
        ),
        Rule::new(
            Tier::General,
            Signature::new("unit-article")
                .param("article", TokenClass::INDEFINITE)
                .param("unit", TokenClass::TimeUnit),
            unit_amount,
        ),
        Rule::new(
            Tier::General,
            Signature::new("hour-meridiem")
                .param("hour", TokenClass::NUMERIC)
                .param("meridiem", TokenClass::Meridiem),
            hour_meridiem,
        ),
        Rule::new(
            Tier::General,
            Signature::new("time-meridiem")
                .param("time", TokenClass::DATE_TIME)
                .param("meridiem", TokenClass::Meridiem),
            time_meridiem,
        ),
        Rule::new(
            Tier::General,
            Signature::new("at-hour")
                .param("at", TokenClass::Preposition)
                .param("hour", TokenClass::NUMERIC),
            at_hour,
        ),
        Rule::new(
            Tier::General,
            Signature::new("time-modifier")
                .param("word", TokenClass::Syntax)
                .param("time", TokenClass::DATE_TIME),
            time_modifier,
        ),
        Rule::new(
            Tier::General,
            Signature::new("every-unit")
                .param("every", TokenClass::Adjective)
                .param("unit", TokenClass::TimeUnit),
            every_unit,
        ),
        Rule::new(
            Tier::General,
            Signature::new("time-time")
                .param("left", TokenClass::DATE_TIME)
                .param("right", TokenClass::DATE_TIME)
                .exact_types(),
            merge_times,
        ),
        Rule::new(
            Tier::General,
            Signature::new("time-and-time")
                .param("left", TokenClass::DATE_TIME)
                .param("and", TokenClass::AND)
                .param("right", TokenClass::DATE_TIME)
                .exact_types(),
            merge_times,
        ),
    ]
}

fn date_time(bound: &Bound<'_>, pattern: TemporalPattern) -> Token {
    bound
        .produce(TokenVariant::DATE_TIME)
        .with_value(Value::Temporal(pattern))
}

fn unit_of(token: &Token) -> Option<parley_foundation::TimeUnit> {
    match token.variant {
        TokenVariant::Primitive(PrimitiveKind::Temporal(TemporalKind::Unit(unit))) => Some(unit),
        _ => None,
    }
}

fn meridiem_of(token: &Token) -> Option<parley_foundation::Meridiem> {
    match token.variant {
        TokenVariant::Primitive(PrimitiveKind::Temporal(TemporalKind::Meridiem(m))) => Some(m),
        _ => None,
    }
}

fn preposition_of(token: &Token) -> Option<Preposition> {
    match token.variant {
        TokenVariant::Syntax(SyntaxKind::Preposition(p)) => Some(p),
        _ => None,
    }
}

/// "5 minutes", "an hour".
fn unit_amount(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    let amount = match bound.token(0).variant {
        TokenVariant::Syntax(SyntaxKind::Article(Article::Indefinite)) => 1.0,
        _ => bound.token(0).number()?,
    };
    if amount < 0.0 {
        return None;
    }
    let unit = unit_of(bound.token(1))?;
    Some(date_time(bound, TemporalPattern::relative(unit, amount)))
}

fn whole_hour(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && (0.0..24.0).contains(&value)).then_some(value as i64)
}

/// "5 pm".
fn hour_meridiem(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    let hour = whole_hour(bound.token(0).number()?)?;
    let meridiem = meridiem_of(bound.token(1))?;
    let pattern = TemporalPattern::clock(hour, 0, 0).with_meridiem(meridiem)?;
    Some(date_time(bound, pattern))
}

/// "5:30 pm", "at 5 pm".
fn time_meridiem(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    let pattern = *bound.token(0).temporal()?;
    let meridiem = meridiem_of(bound.token(1))?;
    Some(date_time(bound, pattern.with_meridiem(meridiem)?))
}

/// "at 5".
fn at_hour(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    if preposition_of(bound.token(0))? != Preposition::At {
        return None;
    }
    let hour = whole_hour(bound.token(1).number()?)?;
    Some(date_time(bound, TemporalPattern::clock(hour, 0, 0)))
}

/// "in 5 minutes", "for an hour", "every monday", "at noon", "on friday".
fn time_modifier(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    let pattern = *bound.token(1).temporal()?;
    if pattern.modifier != TimeModifier::None {
        return None;
    }
    let modified = match bound.token(0).variant {
        TokenVariant::Syntax(SyntaxKind::Preposition(Preposition::In)) => {
            pattern.with_modifier(TimeModifier::Delay)
        }
        TokenVariant::Syntax(SyntaxKind::Preposition(Preposition::For)) => {
            pattern.with_modifier(TimeModifier::Period)
        }
        TokenVariant::Syntax(SyntaxKind::Adjective(Adjective::Every)) => {
            pattern.with_modifier(TimeModifier::Interval)
        }
        TokenVariant::Syntax(SyntaxKind::Preposition(Preposition::At | Preposition::On))
            if !pattern.is_relative() =>
        {
            pattern
        }
        _ => return None,
    };
    Some(date_time(bound, modified))
}

/// "every hour".
fn every_unit(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    if bound.token(0).variant != TokenVariant::Syntax(SyntaxKind::Adjective(Adjective::Every)) {
        return None;
    }
    let unit = unit_of(bound.token(1))?;
    let pattern = TemporalPattern::relative(unit, 1.0).with_modifier(TimeModifier::Interval);
    Some(date_time(bound, pattern))
}

/// "1 hour 30 minutes", "monday at 5 pm", "1 hour and 30 minutes".
fn merge_times(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    let left = bound.token(0).temporal()?;
    let right = bound.token(bound.tokens.len() - 1).temporal()?;
    Some(date_time(bound, left.merge(right)?))
}
