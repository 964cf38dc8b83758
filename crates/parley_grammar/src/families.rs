//! Turning catalog hits into tokens.
//!
//! Each [`PatternFamily`] has a parse handler that reads the matched entry
//! (its name, value, or regex capture) and builds the token. Handlers return
//! `None` when an entry names something the engine does not know, which
//! drops the hit.

use parley_foundation::{Meridiem, TemporalPattern, TimeUnit};
use parley_state::FuzzyState;

use crate::pattern::{PatternFamily, PatternHit};
use crate::token::{
    Adjective, Article, ArithmeticOperator, EqualityOperator, LogicalOperator, NumericProperty,
    ObjectKind, OperatorKind, Preposition, PrimitiveKind, Punctuation, SyntaxKind, TemporalKind,
    ThingKind, Token, TokenVariant, Typography, Value,
};

/// Builds a token from a catalog hit.
pub type ParseHandler = fn(&PatternHit<'_>, &FuzzyState) -> Option<Token>;

/// The handler for each shipped family.
#[must_use]
pub fn handler_for(family: PatternFamily) -> ParseHandler {
    match family {
        PatternFamily::Numeric => parse_numeric,
        PatternFamily::String => parse_string,
        PatternFamily::DateTime => parse_date_time,
        PatternFamily::TimeUnit => parse_time_unit,
        PatternFamily::Meridiem => parse_meridiem,
        PatternFamily::Punctuation => parse_punctuation,
        PatternFamily::Article => parse_article,
        PatternFamily::Preposition => parse_preposition,
        PatternFamily::Adjective => parse_adjective,
        PatternFamily::Typography => parse_typography,
        PatternFamily::Arithmetic => parse_arithmetic,
        PatternFamily::Logical => parse_logical,
        PatternFamily::Equality => parse_equality,
        PatternFamily::Thing => parse_thing,
        PatternFamily::NumericProperty => parse_numeric_property,
        PatternFamily::SelfReflection => parse_self_reflection,
    }
}

fn base(hit: &PatternHit<'_>, variant: TokenVariant) -> Token {
    Token::new(variant, hit.text, hit.similarity).with_optional_name(hit.pattern.name.clone())
}

fn named<T>(hit: &PatternHit<'_>, lookup: fn(&str) -> Option<T>) -> Option<T> {
    hit.pattern.name.as_deref().and_then(lookup)
}

fn parse_numeric(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    let number = match hit.captured {
        Some(captured) => captured.parse::<f64>().ok()?,
        None => hit.pattern.value.as_ref()?.as_f64()?,
    };
    Some(base(hit, TokenVariant::NUMERIC).with_value(Value::Number(number)))
}

fn parse_string(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    let text = hit.captured?;
    Some(
        base(hit, TokenVariant::Primitive(PrimitiveKind::String))
            .with_value(Value::Text(text.to_string())),
    )
}

fn parse_date_time(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    let pattern = match hit.captured {
        Some(captured) => TemporalPattern::parse_clock(captured)?,
        None => serde_json::from_value(hit.pattern.value.clone()?).ok()?,
    };
    Some(base(hit, TokenVariant::DATE_TIME).with_value(Value::Temporal(pattern)))
}

fn parse_time_unit(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    let unit = named(hit, TimeUnit::from_name)?;
    Some(base(
        hit,
        TokenVariant::Primitive(PrimitiveKind::Temporal(TemporalKind::Unit(unit))),
    ))
}

fn parse_meridiem(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    let meridiem = named(hit, Meridiem::from_name)?;
    Some(base(
        hit,
        TokenVariant::Primitive(PrimitiveKind::Temporal(TemporalKind::Meridiem(meridiem))),
    ))
}

fn parse_punctuation(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    let kind = named(hit, Punctuation::from_name)?;
    Some(base(hit, TokenVariant::Syntax(SyntaxKind::Punctuation(kind))))
}

fn parse_article(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    let kind = named(hit, Article::from_name)?;
    Some(base(hit, TokenVariant::Syntax(SyntaxKind::Article(kind))))
}

fn parse_preposition(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    let kind = named(hit, Preposition::from_name)?;
    Some(base(hit, TokenVariant::Syntax(SyntaxKind::Preposition(kind))))
}

fn parse_adjective(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    let kind = named(hit, Adjective::from_name)?;
    Some(base(hit, TokenVariant::Syntax(SyntaxKind::Adjective(kind))))
}

fn parse_typography(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    let kind = named(hit, Typography::from_name)?;
    Some(base(hit, TokenVariant::Syntax(SyntaxKind::Typography(kind))))
}

fn parse_arithmetic(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    let kind = named(hit, ArithmeticOperator::from_name)?;
    Some(base(hit, TokenVariant::Operator(OperatorKind::Arithmetic(kind))))
}

fn parse_logical(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    let kind = named(hit, LogicalOperator::from_name)?;
    Some(base(hit, TokenVariant::Operator(OperatorKind::Logical(kind))))
}

fn parse_equality(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    let kind = named(hit, EqualityOperator::from_name)?;
    Some(base(hit, TokenVariant::Operator(OperatorKind::Equality(kind))))
}

fn parse_numeric_property(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    let kind = named(hit, NumericProperty::from_name)?;
    Some(base(
        hit,
        TokenVariant::Object(ObjectKind::NumericProperty(kind)),
    ))
}

fn parse_self_reflection(hit: &PatternHit<'_>, _: &FuzzyState) -> Option<Token> {
    Some(base(hit, TokenVariant::Object(ObjectKind::SelfReflection)))
}

/// "everyone", "maps": every live entity of the named kind.
fn parse_thing(hit: &PatternHit<'_>, state: &FuzzyState) -> Option<Token> {
    let kind = named(hit, ThingKind::from_group_name)?;
    let value = match kind {
        ThingKind::Player => Value::Players(state.players.clone()),
        ThingKind::Map => Value::Maps(state.maps.clone()),
        ThingKind::Item => Value::Items(state.items.clone()),
        ThingKind::Location => Value::Locations(
            state.countries().into_iter().map(str::to_string).collect(),
        ),
    };
    Some(base(hit, TokenVariant::thing(kind)).with_value(value))
}
