//! Property conditions and player filters.

use crate::class::TokenClass;
use crate::registry::{ReduceContext, Rule, Tier};
use crate::rules::{difference, players_of};
use crate::signature::{Bound, Signature};
use crate::token::{
    ObjectKind, OperatorKind, Preposition, PropertyCondition, SyntaxKind, ThingKind, Token,
    TokenVariant, Value,
};

/// The thing rules.
#[must_use]
pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            Tier::General,
            Signature::new("property-condition")
                .param("property", TokenClass::NumericProperty)
                .param("comparison", TokenClass::Equality)
                .param("operand", TokenClass::NUMERIC),
            property_condition,
        ),
        Rule::new(
            Tier::General,
            Signature::new("players-condition")
                .param("players", TokenClass::PLAYER)
                .param("condition", TokenClass::NumericProperty),
            players_condition,
        ),
        Rule::new(
            Tier::General,
            Signature::new("players-with-condition")
                .param("players", TokenClass::PLAYER)
                .param("with", TokenClass::Preposition)
                .param("condition", TokenClass::NumericProperty),
            players_condition,
        ),
        Rule::new(
            Tier::General,
            Signature::new("players-with-item")
                .param("players", TokenClass::PLAYER)
                .param("with", TokenClass::Preposition)
                .param("items", TokenClass::ITEM),
            players_with_item,
        ),
        Rule::new(
            Tier::General,
            Signature::new("players-from-location")
                .param("players", TokenClass::PLAYER)
                .param("from", TokenClass::Preposition)
                .param("location", TokenClass::LOCATION),
            players_from_location,
        ),
        Rule::new(
            Tier::General,
            Signature::new("players-except")
                .param("players", TokenClass::PLAYER)
                .param("except", TokenClass::Preposition)
                .param("excluded", TokenClass::Object),
            players_except,
        ),
    ]
}

fn players(bound: &Bound<'_>, players: Vec<parley_state::Player>) -> Token {
    bound
        .produce(TokenVariant::thing(ThingKind::Player))
        .with_value(Value::Players(players))
}

fn preposition_is(token: &Token, wanted: &[Preposition]) -> bool {
    matches!(token.variant, TokenVariant::Syntax(SyntaxKind::Preposition(p)) if wanted.contains(&p))
}

/// "ping > 100", "score less than 10".
fn property_condition(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    let property_token = bound.token(0);
    if property_token.value.is_some() {
        return None;
    }
    let TokenVariant::Object(ObjectKind::NumericProperty(property)) = property_token.variant
    else {
        return None;
    };
    let TokenVariant::Operator(OperatorKind::Equality(operator)) = bound.token(1).variant else {
        return None;
    };
    let operand = bound.token(2).number()?;
    let condition = PropertyCondition {
        property,
        operator,
        operand,
    };
    Some(
        bound
            .produce(property_token.variant)
            .with_value(Value::Condition(condition)),
    )
}

/// "players with ping > 100", "everyone score < 10".
fn players_condition(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    let last = bound.token(bound.tokens.len() - 1);
    let Some(Value::Condition(condition)) = &last.value else {
        return None;
    };
    if bound.tokens.len() == 3 && !preposition_is(bound.token(1), &[Preposition::With]) {
        return None;
    }
    let value = bound.token(0).value.as_ref()?.as_players()?;
    let kept = value.iter().filter(|p| condition.holds(p)).cloned().collect();
    Some(players(bound, kept))
}

/// "players with a sniper rifle".
fn players_with_item(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    if !preposition_is(bound.token(1), &[Preposition::With]) {
        return None;
    }
    let value = bound.token(0).value.as_ref()?.as_players()?;
    let Some(Value::Items(items)) = &bound.token(2).value else {
        return None;
    };
    let kept = value
        .iter()
        .filter(|p| items.iter().any(|i| p.carries(&i.name)))
        .cloned()
        .collect();
    Some(players(bound, kept))
}

/// "players from australia".
fn players_from_location(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    if !preposition_is(bound.token(1), &[Preposition::From, Preposition::In]) {
        return None;
    }
    let value = bound.token(0).value.as_ref()?.as_players()?;
    let Some(Value::Locations(countries)) = &bound.token(2).value else {
        return None;
    };
    let kept = value
        .iter()
        .filter(|p| countries.iter().any(|c| c.eq_ignore_ascii_case(&p.country_name)))
        .cloned()
        .collect();
    Some(players(bound, kept))
}

/// "everyone except phogue", "everyone but me".
fn players_except(context: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    if !preposition_is(bound.token(1), &[Preposition::Except]) {
        return None;
    }
    let value = bound.token(0).value.as_ref()?.as_players()?;
    let excluded = players_of(bound.token(2), context.state.speaker.as_ref())?;
    Some(players(bound, difference(value, &excluded)))
}
