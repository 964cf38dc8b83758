//! Parley CLI entry point.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use parley_fuzzy::{FuzzyParser, ParserConfig};
use parley_grammar::PatternCatalog;
use parley_runtime::{Repl, Reply, Session, demo_state, init_tracing, load_from_file};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    verbosity: u8,
    patterns: Option<PathBuf>,
    state: Option<PathBuf>,
    speaker: Option<String>,
    prefix: Option<String>,
    preset: Option<ParserConfig>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("{name} requires a value"))
        };
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-v" | "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            "-vv" => config.verbosity = config.verbosity.saturating_add(2),
            "--strict" => config.preset = Some(ParserConfig::strict()),
            "--lenient" => config.preset = Some(ParserConfig::lenient()),
            "--patterns" => config.patterns = Some(PathBuf::from(value("--patterns")?)),
            "--state" => config.state = Some(PathBuf::from(value("--state")?)),
            "--speaker" => config.speaker = Some(value("--speaker")?),
            "--prefix" => config.prefix = Some(value("--prefix")?),
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("parley {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(match config.verbosity {
        0 => "parley=warn",
        1 => "parley=debug",
        _ => "parley=trace",
    });

    let catalog = match &config.patterns {
        Some(path) => PatternCatalog::from_json(&fs::read_to_string(path)?)?,
        None => PatternCatalog::builtin()?,
    };
    let parser = FuzzyParser::new(catalog, config.preset.unwrap_or_default());
    let state = match &config.state {
        Some(path) => load_from_file(path)?,
        None => demo_state(),
    };

    let mut session = Session::new(parser, state);
    if let Some(prefix) = config.prefix {
        session = session.with_prefix(prefix);
    }
    if let Some(speaker) = &config.speaker {
        session.set_speaker(speaker)?;
    }

    let mut repl = Repl::new(session)?;

    // Each line of an input file is handled as if typed
    for file in &config.files {
        for (number, line) in fs::read_to_string(file)?.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            println!("\x1b[1m> {line}\x1b[0m");
            match repl.eval(line) {
                Ok(Reply::Text(text)) => println!("{text}\n"),
                Ok(Reply::Quit) => return Ok(()),
                Err(e) => eprintln!(
                    "\x1b[31m{}:{}: Error: {e}\x1b[0m\n",
                    file.display(),
                    number + 1
                ),
            }
        }
    }

    if config.batch_mode {
        return Ok(());
    }

    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mParley\x1b[0m - Fuzzy natural-language commands for game servers

\x1b[1mUSAGE:\x1b[0m
    parley [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files of inputs (one per line) to run before the console

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -b, --batch            Run the files and exit (no console)
    -v, --verbose          Log more (repeat for trace); PARLEY_LOG overrides
    --state <FILE>         Game-state snapshot (.json or .msgpack), default: demo
    --patterns <FILE>      Replacement pattern document (JSON)
    --speaker <NAME>       Player the input is attributed to
    --prefix <TEXT>        Command prefix reported with matches (default: !)
    --strict               Only accept close name matches
    --lenient              Accept heavily misspelled names

\x1b[1mEXAMPLES:\x1b[0m
    parley                              Start the console on the demo server
    parley --state server.json          Start the console on a saved snapshot
    parley -b inputs.txt                Parse every line of inputs.txt and exit

\x1b[1mCONSOLE COMMANDS:\x1b[0m
    :help, :players, :maps, :items, :commands
    :speaker [name], :load <path>, :save <path>, :quit
    Ctrl+D               Exit
    Ctrl+C               Cancel current input"
    );
}
