//! The interactive console.

use std::fmt::Write as _;
use std::path::Path;

use parley_foundation::{Error, ErrorKind, Result};
use parley_fuzzy::TextCommandMatch;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// What the console should do after one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this and keep going.
    Text(String),
    /// Leave the console.
    Quit,
}

/// The interactive console.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Parser and snapshot.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a console on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a console with the given editor.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_completions(session.completions());
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "parley> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the console until `:quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Reply::Text(text)) => println!("{text}"),
            Ok(Reply::Quit) => return Ok(false),
            Err(e) => print_error(&e),
        }
        Ok(true)
    }

    /// Handles one line: a `:` meta command, or text to parse.
    ///
    /// # Errors
    ///
    /// Returns an error if a meta command fails or the input cannot be
    /// parsed.
    pub fn eval(&mut self, input: &str) -> Result<Reply> {
        let input = input.trim();
        if let Some(meta) = input.strip_prefix(':') {
            let (command, argument) = meta
                .split_once(char::is_whitespace)
                .map_or((meta, ""), |(c, a)| (c, a.trim()));
            return self.meta(command, argument);
        }

        Ok(Reply::Text(match self.session.parse(input)? {
            Some(result) => format_match(&result),
            None => "no match".to_string(),
        }))
    }

    fn meta(&mut self, command: &str, argument: &str) -> Result<Reply> {
        let state = self.session.state();
        let text = match command {
            "quit" | "q" | "exit" => return Ok(Reply::Quit),
            "help" | "h" => HELP.to_string(),
            "players" => list(state.players.iter().map(|p| {
                format!(
                    "{} ({}, ping {}, score {}, {}/{})",
                    p.name, p.country_name, p.ping, p.score, p.kills, p.deaths
                )
            })),
            "maps" => list(
                state
                    .maps
                    .iter()
                    .map(|m| format!("{} ({}, {})", m.friendly_name, m.name, m.game_mode)),
            ),
            "items" => list(
                state
                    .items
                    .iter()
                    .map(|i| format!("{} ({}) [{}]", i.friendly_name, i.name, i.tags.join(", "))),
            ),
            "commands" => list(state.commands.iter().map(|c| {
                format!(
                    "{} (priority {}): {}",
                    c.canonical_name,
                    c.priority,
                    c.aliases.join(", ")
                )
            })),
            "speaker" if argument.is_empty() => state
                .speaker
                .as_ref()
                .map_or_else(|| "no speaker".to_string(), |p| p.name.clone()),
            "speaker" => {
                self.session.set_speaker(argument)?;
                format!("speaker is now {argument}")
            }
            "load" | "save" if argument.is_empty() => {
                return Err(Error::new(ErrorKind::Internal(format!(
                    ":{command} requires a path"
                ))));
            }
            "load" => {
                self.session.load(Path::new(argument))?;
                self.editor.set_completions(self.session.completions());
                format!("loaded {argument}")
            }
            "save" => {
                self.session.save(Path::new(argument))?;
                format!("saved {argument}")
            }
            other => {
                return Err(Error::new(ErrorKind::Internal(format!(
                    "unknown command :{other} (try :help)"
                ))));
            }
        };
        Ok(Reply::Text(text))
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mParley v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!("Type a command as a player would say it, or :help. Ctrl+D exits.\n");
    }
}

const HELP: &str = "\
Type free text to parse it as a player command, e.g. `kick phogue`.

  :players           List connected players
  :maps              List maps
  :items             List items
  :commands          List commands and aliases
  :speaker [name]    Show or change who is speaking
  :load <path>       Load a snapshot (.json or .msgpack)
  :save <path>       Save the snapshot
  :quit              Exit";

fn list(lines: impl Iterator<Item = String>) -> String {
    let lines: Vec<String> = lines.map(|l| format!("  {l}")).collect();
    if lines.is_empty() {
        "  (none)".to_string()
    } else {
        lines.join("\n")
    }
}

fn print_error(error: &Error) {
    match &error.context {
        Some(context) => eprintln!("\x1b[31mError: {error} ({context})\x1b[0m"),
        None => eprintln!("\x1b[31mError: {error}\x1b[0m"),
    }
}

/// Renders a match for the console, one field per line, empty fields
/// omitted.
#[must_use]
pub fn format_match(result: &TextCommandMatch) -> String {
    let mut out = String::new();
    if let Some(command) = result.command() {
        let _ = write!(out, "command:   {}{}", result.prefix, command.canonical_name);
    }
    let alternates: Vec<&str> = result
        .alternates()
        .iter()
        .map(|c| c.canonical_name.as_str())
        .collect();
    field(&mut out, "or maybe", &alternates);
    if let Some(speaker) = &result.speaker {
        let _ = write!(out, "\nspeaker:   {}", speaker.name);
    }
    field(
        &mut out,
        "players",
        &result.players.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
    );
    field(
        &mut out,
        "maps",
        &result
            .maps
            .iter()
            .map(|m| m.friendly_name.as_str())
            .collect::<Vec<_>>(),
    );
    field(
        &mut out,
        "items",
        &result
            .items
            .iter()
            .map(|i| i.friendly_name.as_str())
            .collect::<Vec<_>>(),
    );
    field(
        &mut out,
        "numbers",
        &result
            .numeric
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
    );
    field(
        &mut out,
        "quotes",
        &result
            .quotes
            .iter()
            .map(|q| format!("\"{q}\""))
            .collect::<Vec<_>>(),
    );
    if let Some(delay) = result.delay {
        let _ = write!(out, "\ndelay:     {}", delay.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    if let Some(period) = result.period {
        let _ = write!(out, "\nperiod:    {}s", period.num_seconds());
    }
    if let Some(interval) = result.interval {
        let _ = write!(out, "\ninterval:  {interval:?}");
    }
    out
}

fn field<S: AsRef<str>>(out: &mut String, label: &str, values: &[S]) {
    if values.is_empty() {
        return;
    }
    let joined: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
    let _ = write!(out, "\n{:<10} {}", format!("{label}:"), joined.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A simple mock editor for testing.
    struct MockEditor {
        inputs: Vec<String>,
        index: usize,
        history: Vec<String>,
    }

    impl MockEditor {
        fn new(inputs: Vec<&str>) -> Self {
            Self {
                inputs: inputs.into_iter().map(String::from).collect(),
                index: 0,
                history: Vec::new(),
            }
        }
    }

    impl LineEditor for MockEditor {
        fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
            if self.index < self.inputs.len() {
                let line = self.inputs[self.index].clone();
                self.index += 1;
                Ok(ReadResult::Line(line))
            } else {
                Ok(ReadResult::Eof)
            }
        }

        fn add_history(&mut self, line: &str) {
            self.history.push(line.to_string());
        }

        fn set_completions(&mut self, _words: Vec<String>) {}
    }

    fn repl(inputs: Vec<&str>) -> Repl<MockEditor> {
        let session = Session::demo().unwrap().with_frozen_clock();
        Repl::with_editor(MockEditor::new(inputs), session).without_banner()
    }

    fn text(reply: Reply) -> String {
        match reply {
            Reply::Text(text) => text,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn parses_free_text() {
        let mut repl = repl(vec![]);
        let out = text(repl.eval("kick phogue").unwrap());
        assert!(out.starts_with("command:   !kick"));
        assert!(out.contains("players:   Phogue"));
    }

    #[test]
    fn gibberish_is_no_match() {
        let mut repl = repl(vec![]);
        assert_eq!(text(repl.eval("qwzx vbnm").unwrap()), "no match");
    }

    #[test]
    fn meta_commands() {
        let mut repl = repl(vec![]);
        assert!(text(repl.eval(":players").unwrap()).contains("Phogue"));
        assert!(text(repl.eval(":maps").unwrap()).contains("Port Valdez"));
        assert_eq!(text(repl.eval(":speaker").unwrap()), "Phogue");
        repl.eval(":speaker ike").unwrap();
        assert_eq!(text(repl.eval(":speaker").unwrap()), "Ike");
        assert_eq!(repl.eval(":quit").unwrap(), Reply::Quit);
        assert!(repl.eval(":bogus").is_err());
        assert!(repl.eval(":load").is_err());
    }

    #[test]
    fn run_stops_at_quit() {
        let mut repl = repl(vec!["kick phogue", "", ":quit", "ban phogue"]);
        repl.run().unwrap();
        assert_eq!(repl.editor.history, vec!["kick phogue", ":quit"]);
    }
}
