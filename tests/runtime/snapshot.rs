//! Integration tests for snapshot files.

use std::fs;
use std::path::PathBuf;

use parley_fuzzy::FuzzyParser;
use parley_runtime::{Format, demo_state, from_bytes, load_from_file, save_to_file, to_bytes};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("parley_it_{}_{name}", std::process::id()))
}

const HOST_SNAPSHOT: &str = r#"{
    "players": [
        { "uid": "A1", "name": "Sniper", "country_name": "Norway", "inventory": ["awp"] },
        { "uid": "B2", "name": "Rook" }
    ],
    "maps": [{ "name": "de_dust", "friendly_name": "Dust" }],
    "commands": [{ "canonical_name": "kick", "aliases": ["kick", "boot"] }],
    "now": "2024-05-01T10:00:00Z"
}"#;

#[test]
fn hand_written_snapshot_loads_with_defaults() {
    let path = temp_path("host.json");
    fs::write(&path, HOST_SNAPSHOT).unwrap();
    let state = load_from_file(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(state.players.len(), 2);
    assert_eq!(state.players[1].ping, 0);
    assert!(state.speaker.is_none());
    assert!(state.items.is_empty());

    let parser = FuzzyParser::builtin().unwrap();
    let result = parser.parse("!", "boot sniper", &state).unwrap().unwrap();
    assert_eq!(result.command().unwrap().canonical_name, "kick");
    assert_eq!(result.players[0].uid, "A1");
}

#[test]
fn both_formats_parse_the_same() {
    let parser = FuzzyParser::builtin().unwrap();
    let original = demo_state();
    let expected = parser
        .parse("!", "kick phogue in 5 minutes", &original)
        .unwrap();

    for (name, format) in [("demo.json", Format::Json), ("demo.msgpack", Format::MessagePack)] {
        let path = temp_path(name);
        assert_eq!(Format::for_path(&path), format);
        save_to_file(&original, &path).unwrap();
        let loaded = load_from_file(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.now, original.now);
        assert_eq!(
            parser.parse("!", "kick phogue in 5 minutes", &loaded).unwrap(),
            expected
        );
    }
}

#[test]
fn formats_are_not_interchangeable() {
    let bytes = to_bytes(&demo_state(), Format::MessagePack).unwrap();
    assert!(from_bytes(&bytes, Format::Json).is_err());
    assert!(from_bytes(b"{\"players\": 5}", Format::Json).is_err());
}
