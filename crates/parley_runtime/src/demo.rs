//! A small built-in server snapshot for trying the console without a file.

use chrono::{TimeZone, Utc};
use parley_state::{FuzzyState, Item, Map, Player, TextCommand};

/// A populated snapshot: eight players on four countries, a map rotation,
/// some weapons, and the usual admin commands. Phogue is the speaker.
#[must_use]
pub fn demo_state() -> FuzzyState {
    let now = Utc
        .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let phogue = Player::new("EA_0001", "Phogue")
        .with_ping(45)
        .with_stats(1200, 24, 6)
        .with_country("Australia", "au")
        .with_item("m40");

    FuzzyState::new(now)
        .with_player(phogue.clone())
        .with_player(
            Player::new("EA_0002", "[DB]Zaeed")
                .with_stripped_name("Zaeed")
                .with_ping(120)
                .with_stats(800, 12, 10)
                .with_country("Canada", "ca")
                .with_item("m1014"),
        )
        .with_player(
            Player::new("EA_0003", "Imisnew2")
                .with_ping(210)
                .with_stats(150, 2, 15)
                .with_country("Australia", "au")
                .with_item("m95"),
        )
        .with_player(
            Player::new("EA_0004", "Ike")
                .with_ping(60)
                .with_stats(500, 8, 8)
                .with_country("Germany", "de")
                .with_item("m40"),
        )
        .with_player(
            Player::new("EA_0005", "Morpheus")
                .with_ping(95)
                .with_stats(950, 15, 5)
                .with_country("United States", "us")
                .with_item("m1014"),
        )
        .with_player(
            Player::new("EA_0006", "Sniperwolf")
                .with_ping(30)
                .with_stats(1500, 30, 3)
                .with_country("Germany", "de")
                .with_item("m95"),
        )
        .with_player(
            Player::new("EA_0007", "Dracula")
                .with_ping(300)
                .with_stats(20, 0, 12)
                .with_country("Canada", "ca"),
        )
        .with_player(
            Player::new("EA_0008", "Wraith")
                .with_ping(75)
                .with_stats(640, 9, 9)
                .with_country("United States", "us"),
        )
        .with_map(Map::new("port_valdez", "Port Valdez").with_game_mode("conquest"))
        .with_map(Map::new("valparaiso", "Valparaiso").with_game_mode("rush"))
        .with_map(Map::new("arica_harbor", "Arica Harbor").with_game_mode("conquest"))
        .with_map(Map::new("white_pass", "White Pass").with_game_mode("squad deathmatch"))
        .with_map(Map::new("laguna_presa", "Laguna Presa").with_game_mode("rush"))
        .with_item(Item::new("m40", "M40A5").with_tag("sniper").with_tag("rifle"))
        .with_item(Item::new("m95", "M95").with_tag("sniper").with_tag("rifle"))
        .with_item(Item::new("m1014", "M1014").with_tag("shotgun"))
        .with_item(Item::new("c4", "C4 Explosive").with_tag("explosive"))
        .with_command(
            TextCommand::new("kick")
                .with_alias("kick")
                .with_alias("boot")
                .with_priority(10),
        )
        .with_command(TextCommand::new("ban").with_alias("ban").with_priority(20))
        .with_command(TextCommand::new("kill").with_alias("kill").with_alias("slay").with_priority(5))
        .with_command(
            TextCommand::new("move")
                .with_alias("move")
                .with_alias("switch team")
                .with_priority(1),
        )
        .with_command(
            TextCommand::new("change_map")
                .with_alias("change map")
                .with_alias("next map")
                .with_priority(15),
        )
        .with_command(TextCommand::new("yell").with_alias("yell").with_alias("say"))
        .with_command(TextCommand::new("calculate").with_alias("calculate").with_alias("calc"))
        .with_speaker(phogue)
}
