//! Combine-tier rules: joining adjacent pieces of one thing.

use crate::class::TokenClass;
use crate::registry::{ReduceContext, Rule, Tier};
use crate::rules::{is_subset, players_of, union_values};
use crate::signature::{Bound, Signature};
use crate::token::{Adjective, SyntaxKind, ThingKind, Token, TokenVariant, Value};

/// The combine-tier rules.
#[must_use]
pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            Tier::Combine,
            Signature::new("thing-and-thing")
                .param("left", TokenClass::Thing)
                .param("and", TokenClass::AND)
                .param("right", TokenClass::Thing)
                .compatible(),
            union,
        ),
        Rule::new(
            Tier::Combine,
            Signature::new("thing-comma-thing")
                .param("left", TokenClass::Thing)
                .param("comma", TokenClass::COMMA)
                .param("right", TokenClass::Thing)
                .compatible(),
            union,
        ),
        Rule::new(
            Tier::Combine,
            Signature::new("player-and-self")
                .param("player", TokenClass::PLAYER)
                .param("and", TokenClass::AND)
                .param("me", TokenClass::SELF_REFLECTION)
                .exact_types()
                .any_order()
                .compatible(),
            player_and_self,
        ),
        Rule::new(
            Tier::Combine,
            Signature::new("thing-thing")
                .param("left", TokenClass::Thing)
                .param("right", TokenClass::Thing)
                .compatible(),
            adjacent_things,
        ),
        Rule::new(
            Tier::Combine,
            Signature::new("operator-by")
                .param("operator", TokenClass::SecondOrder)
                .param("by", TokenClass::BY),
            keep_first,
        ),
        Rule::new(
            Tier::Combine,
            Signature::new("comparison-than")
                .param("comparison", TokenClass::Equality)
                .param("than", TokenClass::THAN),
            keep_first,
        ),
        Rule::new(
            Tier::Combine,
            Signature::new("article-thing")
                .param("article", TokenClass::Article)
                .param("thing", TokenClass::Thing),
            keep_last,
        ),
        Rule::new(
            Tier::Combine,
            Signature::new("quantifier-thing")
                .param("quantifier", TokenClass::Adjective)
                .param("thing", TokenClass::Thing),
            quantified_thing,
        ),
    ]
}

fn union(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    let (left, right) = (bound.token(0), bound.token(2));
    let value = union_values(left.value.as_ref()?, right.value.as_ref()?)?;
    Some(bound.produce(left.variant).with_value(value))
}

/// "player phogue", "map port valdez": a group word next to one of its
/// members narrows to the member. Unrelated neighbours ("phogue zaeed")
/// are a list.
fn adjacent_things(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    let (left, right) = (bound.token(0), bound.token(1));
    let (a, b) = (left.value.as_ref()?, right.value.as_ref()?);
    let value = if is_subset(b, a) {
        b.clone()
    } else if is_subset(a, b) {
        a.clone()
    } else {
        union_values(a, b)?
    };
    Some(bound.produce(left.variant).with_value(value))
}

fn player_and_self(context: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    let players = players_of(bound.token(0), context.state.speaker.as_ref())?;
    let me = players_of(bound.token(2), context.state.speaker.as_ref())?;
    let value = union_values(&Value::Players(players), &Value::Players(me))?;
    Some(
        bound
            .produce(TokenVariant::thing(ThingKind::Player))
            .with_value(value),
    )
}

fn keep_first(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    let first = bound.token(0);
    Some(
        bound
            .produce(first.variant)
            .with_optional_name(first.name.clone()),
    )
}

fn keep_last(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    let last = bound.token(bound.tokens.len() - 1);
    let mut token = bound
        .produce(last.variant)
        .with_optional_name(last.name.clone());
    token.value.clone_from(&last.value);
    Some(token)
}

fn quantified_thing(context: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    match bound.token(0).variant {
        TokenVariant::Syntax(SyntaxKind::Adjective(
            Adjective::All | Adjective::Every | Adjective::This,
        )) => keep_last(context, bound),
        _ => None,
    }
}
