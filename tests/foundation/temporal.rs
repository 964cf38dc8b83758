//! Integration tests for temporal patterns.

use chrono::{DateTime, TimeDelta, TimeZone, Utc, Weekday};
use parley_foundation::{Meridiem, TemporalPattern, TimeModifier, TimeRule, TimeUnit};

/// Friday 2024-03-01 12:00 UTC.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

#[test]
fn relative_resolves_from_now() {
    let pattern = TemporalPattern::relative(TimeUnit::Minute, 5.0);
    assert_eq!(pattern.resolve(now()), Some(now() + TimeDelta::minutes(5)));
    assert_eq!(pattern.duration(now()), Some(TimeDelta::minutes(5)));
}

#[test]
fn fractional_amount_spills_down() {
    let pattern = TemporalPattern::relative(TimeUnit::Hour, 1.5);
    assert_eq!(pattern.hour, Some(1));
    assert_eq!(pattern.minute, Some(30));
}

#[test]
fn weeks_are_days() {
    let pattern = TemporalPattern::relative(TimeUnit::Week, 2.0);
    assert_eq!(pattern.day, Some(14));
}

#[test]
fn relative_patterns_add_up() {
    let hour = TemporalPattern::relative(TimeUnit::Hour, 1.0);
    let minutes = TemporalPattern::relative(TimeUnit::Minute, 30.0);
    let merged = hour.merge(&minutes).unwrap();
    assert_eq!(merged.duration(now()), Some(TimeDelta::minutes(90)));
}

#[test]
fn conflicting_definitive_patterns_do_not_merge() {
    let five = TemporalPattern::clock(5, 0, 0);
    let six = TemporalPattern::clock(6, 0, 0);
    assert!(five.merge(&six).is_none());
    assert!(five.merge(&TemporalPattern::relative(TimeUnit::Hour, 1.0)).is_none());
}

#[test]
fn modifiers_must_agree() {
    let delay = TemporalPattern::relative(TimeUnit::Hour, 1.0).with_modifier(TimeModifier::Delay);
    let period = TemporalPattern::relative(TimeUnit::Hour, 1.0).with_modifier(TimeModifier::Period);
    let plain = TemporalPattern::relative(TimeUnit::Minute, 1.0);
    assert!(delay.merge(&period).is_none());
    assert_eq!(delay.merge(&plain).unwrap().modifier, TimeModifier::Delay);
}

#[test]
fn clock_rolls_to_tomorrow_when_past() {
    let nine_am = TemporalPattern::clock(9, 0, 0);
    assert_eq!(
        nine_am.resolve(now()),
        Some(Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap())
    );
}

#[test]
fn weekday_resolves_forward() {
    let monday = TemporalPattern::definitive().with_day_of_week(Weekday::Mon);
    let at = monday.merge(&TemporalPattern::clock(17, 0, 0)).unwrap();
    assert_eq!(
        at.resolve(now()),
        Some(Utc.with_ymd_and_hms(2024, 3, 4, 17, 0, 0).unwrap())
    );
}

#[test]
fn meridiem_adjusts_hour() {
    let five = TemporalPattern::clock(5, 0, 0);
    assert_eq!(five.with_meridiem(Meridiem::Pm).unwrap().hour, Some(17));
    assert_eq!(
        TemporalPattern::clock(12, 0, 0).with_meridiem(Meridiem::Am).unwrap().hour,
        Some(0)
    );
    assert!(TemporalPattern::clock(13, 0, 0).with_meridiem(Meridiem::Pm).is_none());
}

#[test]
fn parse_clock_validates() {
    assert_eq!(TemporalPattern::parse_clock("17:30").unwrap().minute, Some(30));
    assert!(TemporalPattern::parse_clock("25:00").is_none());
    assert!(TemporalPattern::parse_clock("12").is_none());
}

#[test]
fn interval_mirrors_fields() {
    let pattern = TemporalPattern::relative(TimeUnit::Minute, 15.0);
    let interval = pattern.interval();
    assert_eq!(interval.rule, TimeRule::Relative);
    assert_eq!(interval.minute, Some(15));
    assert_eq!(interval.hour, None);
}

#[test]
fn past_definitive_year_does_not_resolve() {
    let mut pattern = TemporalPattern::clock(9, 0, 0);
    pattern.year = Some(2020);
    assert!(pattern.resolve(now()).is_none());
}
