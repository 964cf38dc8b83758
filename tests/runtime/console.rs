//! Integration tests for the console.

use std::cell::RefCell;
use std::rc::Rc;

use parley_foundation::Result;
use parley_runtime::{LineEditor, ReadResult, Repl, Reply, Session, save_to_file};
use parley_state::{FuzzyState, Player, TextCommand};

/// Plays back scripted lines and records what the console hands it.
#[derive(Default)]
struct ScriptedEditor {
    lines: Vec<String>,
    history: Rc<RefCell<Vec<String>>>,
    completions: Rc<RefCell<Vec<String>>>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().rev().map(|l| (*l).to_string()).collect(),
            ..Self::default()
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, line: &str) {
        self.history.borrow_mut().push(line.to_string());
    }

    fn set_completions(&mut self, words: Vec<String>) {
        *self.completions.borrow_mut() = words;
    }
}

fn console(lines: &[&str]) -> Repl<ScriptedEditor> {
    let session = Session::demo().unwrap().with_frozen_clock();
    Repl::with_editor(ScriptedEditor::new(lines), session).without_banner()
}

fn text(reply: Reply) -> String {
    match reply {
        Reply::Text(text) => text,
        Reply::Quit => panic!("unexpected quit"),
    }
}

#[test]
fn parse_output_lists_every_argument() {
    let mut repl = console(&[]);
    let out = text(repl.eval("ban phogue and zaeed for 2 hours").unwrap());
    assert!(out.starts_with("command:   !ban"), "{out}");
    assert!(out.contains("players:   Phogue, [DB]Zaeed"), "{out}");
    assert!(out.contains("period:    7200s"), "{out}");
    assert!(!out.contains("maps:"), "{out}");
}

#[test]
fn prefix_is_reported() {
    let session = Session::demo()
        .unwrap()
        .with_frozen_clock()
        .with_prefix("@");
    let mut repl = Repl::with_editor(ScriptedEditor::new(&[]), session);
    assert!(text(repl.eval("kick phogue").unwrap()).starts_with("command:   @kick"));
}

#[test]
fn loading_a_snapshot_swaps_players_and_completions() {
    let path = std::env::temp_dir().join(format!("parley_console_{}.json", std::process::id()));
    let other = FuzzyState::default()
        .with_player(Player::new("9", "Gandalf"))
        .with_command(TextCommand::new("kick").with_alias("kick"));
    save_to_file(&other, &path).unwrap();

    let editor = ScriptedEditor::new(&[]);
    let completions = Rc::clone(&editor.completions);
    let session = Session::demo().unwrap().with_frozen_clock();
    let mut repl = Repl::with_editor(editor, session).without_banner();
    assert!(completions.borrow().contains(&"phogue".to_string()));

    let reply = text(repl.eval(&format!(":load {}", path.display())).unwrap());
    let _ = std::fs::remove_file(&path);
    assert!(reply.starts_with("loaded"));
    assert!(completions.borrow().contains(&"gandalf".to_string()));
    assert!(!completions.borrow().contains(&"phogue".to_string()));

    let players = text(repl.eval(":players").unwrap());
    assert!(players.contains("Gandalf"));
    assert!(!players.contains("Phogue"));
    assert!(text(repl.eval("kick gandalf").unwrap()).contains("players:   Gandalf"));
}

#[test]
fn run_reads_until_quit() {
    let editor = ScriptedEditor::new(&["kick phogue", "  ", ":speaker ike", ":quit", "ban ike"]);
    let history = Rc::clone(&editor.history);
    let session = Session::demo().unwrap().with_frozen_clock();
    let mut repl = Repl::with_editor(editor, session).without_banner();
    repl.run().unwrap();

    assert_eq!(*history.borrow(), vec!["kick phogue", ":speaker ike", ":quit"]);
    assert_eq!(
        repl.session().state().speaker.as_ref().map(|p| p.name.as_str()),
        Some("Ike")
    );
}

#[test]
fn errors_do_not_end_the_session() {
    let mut repl = console(&[]);
    assert!(repl.eval(":speaker nobody").is_err());
    assert!(repl.eval(":load /nonexistent/parley.json").is_err());
    assert_eq!(text(repl.eval("qwzx").unwrap()), "no match");
    assert!(text(repl.eval(":help").unwrap()).contains(":speaker"));
}
