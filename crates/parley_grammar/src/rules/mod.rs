//! Shipped reduction rules.
//!
//! - [`combine`] - joining adjacent pieces of one thing
//! - [`arithmetic`] - numbers and operators
//! - [`temporal`] - times, spans, and their modifiers
//! - [`things`] - property conditions and player filters

pub mod arithmetic;
pub mod combine;
pub mod temporal;
pub mod things;

use parley_state::{Item, Map, Player};

use crate::registry::Rule;
use crate::token::{ObjectKind, ThingKind, Token, TokenVariant, Value};

/// Every shipped rule, grouped by module in tier order.
#[must_use]
pub fn shipped() -> Vec<Rule> {
    let mut rules = combine::rules();
    rules.extend(arithmetic::rules());
    rules.extend(temporal::rules());
    rules.extend(things::rules());
    rules
}

/// Players a token refers to: a player set, or the speaker for "me".
pub(crate) fn players_of(token: &Token, speaker: Option<&Player>) -> Option<Vec<Player>> {
    match (&token.variant, &token.value) {
        (TokenVariant::Object(ObjectKind::Thing(ThingKind::Player)), Some(Value::Players(p))) => {
            Some(p.clone())
        }
        (TokenVariant::Object(ObjectKind::SelfReflection), _) => Some(speaker.cloned().into_iter().collect()),
        _ => None,
    }
}

fn union_by<T: Clone>(a: &[T], b: &[T], same: impl Fn(&T, &T) -> bool) -> Vec<T> {
    let mut out = a.to_vec();
    for x in b {
        if !out.iter().any(|y| same(x, y)) {
            out.push(x.clone());
        }
    }
    out
}

fn subset_by<T>(a: &[T], b: &[T], same: impl Fn(&T, &T) -> bool) -> bool {
    a.iter().all(|x| b.iter().any(|y| same(x, y)))
}

fn same_player(a: &Player, b: &Player) -> bool {
    a.uid == b.uid
}

fn same_map(a: &Map, b: &Map) -> bool {
    a.name == b.name
}

fn same_item(a: &Item, b: &Item) -> bool {
    a.name == b.name
}

/// Union of two thing values of the same kind.
pub(crate) fn union_values(a: &Value, b: &Value) -> Option<Value> {
    Some(match (a, b) {
        (Value::Players(a), Value::Players(b)) => Value::Players(union_by(a, b, same_player)),
        (Value::Maps(a), Value::Maps(b)) => Value::Maps(union_by(a, b, same_map)),
        (Value::Items(a), Value::Items(b)) => Value::Items(union_by(a, b, same_item)),
        (Value::Locations(a), Value::Locations(b)) => {
            Value::Locations(union_by(a, b, |x, y| x.eq_ignore_ascii_case(y)))
        }
        _ => return None,
    })
}

/// Returns true if every entity of `a` is also in `b`.
pub(crate) fn is_subset(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Players(a), Value::Players(b)) => subset_by(a, b, same_player),
        (Value::Maps(a), Value::Maps(b)) => subset_by(a, b, same_map),
        (Value::Items(a), Value::Items(b)) => subset_by(a, b, same_item),
        (Value::Locations(a), Value::Locations(b)) => {
            subset_by(a, b, |x, y| x.eq_ignore_ascii_case(y))
        }
        _ => false,
    }
}

/// Players of `a` that are not in `b`.
pub(crate) fn difference(a: &[Player], b: &[Player]) -> Vec<Player> {
    a.iter()
        .filter(|p| !b.iter().any(|q| same_player(p, q)))
        .cloned()
        .collect()
}
