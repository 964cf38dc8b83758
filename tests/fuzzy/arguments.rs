//! Integration tests for what a command is said about.

use chrono::{TimeDelta, TimeZone, Utc};
use parley_foundation::TimeRule;

use crate::{parse, player_names};

#[test]
fn me_is_the_speaker() {
    let result = parse("kick me");
    assert_eq!(player_names(&result), vec!["Phogue"]);
    assert_eq!(result.speaker.as_ref().unwrap().name, "Phogue");
}

#[test]
fn clan_tag_is_optional() {
    assert_eq!(player_names(&parse("kick zaeed")), vec!["[DB]Zaeed"]);
    assert_eq!(player_names(&parse("kick [db]zaeed")), vec!["[DB]Zaeed"]);
}

#[test]
fn misspelled_names() {
    assert_eq!(player_names(&parse("kick phogeu")), vec!["Phogue"]);
    let result = parse("change map to port valdes");
    assert_eq!(result.maps[0].name, "port_valdez");
}

#[test]
fn several_players() {
    let result = parse("kick phogue and morpheus");
    assert_eq!(player_names(&result), vec!["Phogue", "Morpheus"]);

    let result = parse("kick phogue, zaeed and me");
    assert_eq!(player_names(&result), vec!["Phogue", "[DB]Zaeed"]);
}

#[test]
fn players_by_country() {
    let result = parse("kill everyone from canada");
    assert_eq!(player_names(&result), vec!["[DB]Zaeed", "Dracula"]);
}

#[test]
fn players_by_item() {
    let result = parse("kill everyone with m95");
    assert_eq!(player_names(&result), vec!["Imisnew2", "Sniperwolf"]);
}

#[test]
fn everyone_but_me() {
    let result = parse("kill everyone except me");
    assert_eq!(result.players.len(), 7);
    assert!(!player_names(&result).contains(&"Phogue"));
}

#[test]
fn items() {
    let result = parse("kill phogue m1014");
    assert_eq!(player_names(&result), vec!["Phogue"]);
    let items: Vec<_> = result.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(items, vec!["m1014"]);
}

#[test]
fn arithmetic() {
    assert_eq!(parse("calc 5 + 3 * 2").numeric, vec![11.0]);
    assert_eq!(parse("calc (2 + 3) * 4").numeric, vec![20.0]);
    assert_eq!(parse("calc 5 plus 3").numeric, vec![8.0]);
}

#[test]
fn quotes_keep_their_case() {
    let result = parse("yell \"Hello There\"");
    assert_eq!(result.command().unwrap().canonical_name, "yell");
    assert_eq!(result.quotes, vec!["Hello There"]);
}

#[test]
fn delay() {
    let result = parse("kick phogue in 5 minutes");
    assert_eq!(player_names(&result), vec!["Phogue"]);
    assert_eq!(
        result.delay,
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 12, 5, 0).unwrap())
    );
    assert!(result.period.is_none());
}

#[test]
fn period() {
    let result = parse("ban zaeed for 2 hours");
    assert_eq!(result.command().unwrap().canonical_name, "ban");
    assert_eq!(result.period, Some(TimeDelta::hours(2)));
    assert!(result.delay.is_none());
}

#[test]
fn interval() {
    let interval = parse("yell every 10 minutes").interval.unwrap();
    assert_eq!(interval.rule, TimeRule::Relative);
    assert_eq!(interval.minute, Some(10));
}

#[test]
fn daily_interval_at_a_clock_time() {
    let result = parse("yell every day at 5pm");
    let interval = result.interval.unwrap();
    assert_eq!(interval.rule, TimeRule::Definitive);
    assert_eq!(interval.hour, Some(17));
    assert_eq!(interval.day_offset, Some(1));
    assert!(result.period.is_none());
}

#[test]
fn tomorrow_at_a_clock_time() {
    let result = parse("kick phogue tomorrow at 17:30");
    assert_eq!(player_names(&result), vec!["Phogue"]);
    assert_eq!(
        result.period,
        Some(TimeDelta::hours(29) + TimeDelta::minutes(30))
    );
}
