//! The top-level entry point.

use parley_foundation::{Error, ErrorContext, Result};
use parley_grammar::{GrammarRegistry, ParseContext, PatternCatalog, Sentence, wordify};
use parley_state::FuzzyState;
use tracing::debug;

use crate::command::extract_command_list;
use crate::config::ParserConfig;
use crate::recognizer::StateRecognizer;
use crate::result::TextCommandMatch;

/// Parses free text into commands against a game state.
///
/// A parser owns its vocabulary and grammar and never changes them after
/// construction; [`FuzzyParser::parse`] takes `&self` and can be called from
/// many threads at once.
#[derive(Clone, Debug)]
pub struct FuzzyParser {
    catalog: PatternCatalog,
    registry: GrammarRegistry,
    config: ParserConfig,
}

impl FuzzyParser {
    /// Creates a parser with the shipped grammar.
    #[must_use]
    pub fn new(catalog: PatternCatalog, config: ParserConfig) -> Self {
        Self {
            catalog,
            registry: GrammarRegistry::new(),
            config,
        }
    }

    /// Creates a parser with the built-in vocabulary and default thresholds.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in pattern document does not load.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(PatternCatalog::builtin()?, ParserConfig::default()))
    }

    /// Replaces the grammar.
    #[must_use]
    pub fn with_registry(mut self, registry: GrammarRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The vocabulary.
    #[must_use]
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// The grammar.
    #[must_use]
    pub fn registry(&self) -> &GrammarRegistry {
        &self.registry
    }

    /// The thresholds.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `text` against `state`.
    ///
    /// Returns `Ok(None)` when no command is recognized. `prefix` is carried
    /// into the result unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InputTooLong`](parley_foundation::ErrorKind::InputTooLong)
    /// if `text` has more words than the configured cap, and
    /// [`ErrorKind::RewriteLimit`](parley_foundation::ErrorKind::RewriteLimit)
    /// if the grammar does not settle within the rewrite budget.
    pub fn parse(
        &self,
        prefix: &str,
        text: &str,
        state: &FuzzyState,
    ) -> Result<Option<TextCommandMatch>> {
        let words = wordify(text);
        if words.is_empty() {
            return Ok(None);
        }
        let with_input = |e: Error| e.with_context(ErrorContext::new().with_input(text));
        if words.len() > self.config.max_words {
            return Err(with_input(Error::input_too_long(
                words.len(),
                self.config.max_words,
            )));
        }

        let recognizer = StateRecognizer::new(&self.config);
        let context = ParseContext::new(&self.registry, &self.catalog, state)
            .with_recognizer(&recognizer)
            .with_max_rewrites(self.config.max_rewrites);

        let mut sentence = Sentence::from_words(words);
        sentence.run_stages(&context).map_err(with_input)?;

        let commands = extract_command_list(&mut sentence, state, &self.config);
        if commands.is_empty() {
            debug!(text, "no command recognized");
            return Ok(None);
        }

        sentence.reduce(&context).map_err(with_input)?;
        let result = TextCommandMatch::assemble(prefix, commands, &sentence, state);
        debug!(
            text,
            command = result.command().map(|c| c.canonical_name.as_str()),
            players = result.players.len(),
            maps = result.maps.len(),
            "parsed"
        );
        Ok(Some(result))
    }
}
