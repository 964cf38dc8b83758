//! Integration tests for picking the command.

use crate::{parse, player_names, try_parse};

fn command(input: &str) -> String {
    parse(input).command().unwrap().canonical_name.clone()
}

fn alternates(input: &str) -> Vec<String> {
    parse(input)
        .alternates()
        .iter()
        .map(|c| c.canonical_name.clone())
        .collect()
}

#[test]
fn kick_a_player() {
    let result = parse("kick phogue");
    assert_eq!(result.prefix, "!");
    assert_eq!(result.command().unwrap().canonical_name, "kick");
    assert!(result.alternates().is_empty());
    assert_eq!(player_names(&result), vec!["Phogue"]);
}

#[test]
fn multi_word_alias() {
    let result = parse("change map to port valdez");
    assert_eq!(result.command().unwrap().canonical_name, "change_map");
    let maps: Vec<_> = result.maps.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(maps, vec!["port_valdez"]);
    assert!(result.players.is_empty());
}

#[test]
fn any_alias_names_the_command() {
    assert_eq!(command("boot phogue"), "kick");
    assert_eq!(command("slay phogue"), "kill");
    assert_eq!(command("next map"), "change_map");
}

#[test]
fn partial_alias_is_enough() {
    assert_eq!(command("chan map to valparaiso"), "change_map");
}

#[test]
fn other_commands_are_alternates_by_priority() {
    assert_eq!(command("boot or ban phogue"), "kick");
    assert_eq!(alternates("boot or ban phogue"), vec!["ban"]);

    assert_eq!(command("slay, boot or ban phogue"), "kill");
    assert_eq!(alternates("slay, boot or ban phogue"), vec!["ban", "kick"]);
}

#[test]
fn no_command_is_no_match() {
    assert!(try_parse("phogue").is_none());
    assert!(try_parse("port valdez").is_none());
    assert!(try_parse("qwzx vbnm").is_none());
    assert!(try_parse("").is_none());
    assert!(try_parse("   ").is_none());
}
