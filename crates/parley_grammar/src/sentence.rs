//! Sentences and the parse pipeline.
//!
//! A [`Sentence`] starts as one empty phrase per input word and is then
//! driven through every [`Namespace`]: each stage tokenizes every phrase and
//! refactors, merging neighbours whenever the merged span reads at least as
//! well as its parts. After the last stage the sentence is reduced by the
//! grammar rules until nothing more applies.
//!
//! Both rewrite loops are explicit fixpoints with a rewrite budget; running
//! out of budget is an error rather than a hang.

use im::Vector;
use parley_foundation::{Error, Result};
use parley_state::FuzzyState;
use tracing::{debug, trace};

use crate::pattern::{Namespace, PatternCatalog, PatternFamily};
use crate::phrase::{Phrase, join_text};
use crate::registry::{GrammarRegistry, ReduceContext, Tier};
use crate::token::Token;
use crate::wordify::wordify;

/// Default rewrite budget per loop.
pub const DEFAULT_MAX_REWRITES: usize = 512;

/// Recognizes spans the pattern catalog cannot: live entities, command
/// words, anything that depends on the state being parsed against.
pub trait Recognizer {
    /// Appends tokens for `text` during the given stage.
    fn recognize(
        &self,
        namespace: Namespace,
        text: &str,
        state: &FuzzyState,
        tokens: &mut Vec<Token>,
    );
}

/// Everything a parse reads. Nothing here is mutated by parsing.
pub struct ParseContext<'a> {
    /// Parse handlers and reduction rules
    pub registry: &'a GrammarRegistry,
    /// Vocabulary
    pub catalog: &'a PatternCatalog,
    /// State parsed against
    pub state: &'a FuzzyState,
    /// Extra recognizers, consulted after the catalog
    pub recognizers: Vec<&'a dyn Recognizer>,
    /// Rewrite budget for each of the refactor and reduce loops
    pub max_rewrites: usize,
}

impl<'a> ParseContext<'a> {
    /// Creates a context with no recognizers and the default budget.
    #[must_use]
    pub fn new(
        registry: &'a GrammarRegistry,
        catalog: &'a PatternCatalog,
        state: &'a FuzzyState,
    ) -> Self {
        Self {
            registry,
            catalog,
            state,
            recognizers: Vec::new(),
            max_rewrites: DEFAULT_MAX_REWRITES,
        }
    }

    /// Adds a recognizer.
    #[must_use]
    pub fn with_recognizer(mut self, recognizer: &'a dyn Recognizer) -> Self {
        self.recognizers.push(recognizer);
        self
    }

    /// Sets the rewrite budget.
    #[must_use]
    pub fn with_max_rewrites(mut self, max_rewrites: usize) -> Self {
        self.max_rewrites = max_rewrites;
        self
    }

    /// Every token the stages up to and including `through` produce for
    /// `text`.
    #[must_use]
    pub fn tokenize_text(&self, through: Namespace, text: &str) -> Phrase {
        let mut phrase = Phrase::new(text);
        for namespace in Namespace::ALL.into_iter().filter(|n| *n <= through) {
            phrase.extend_distinct(self.tokens_for(namespace, text));
        }
        phrase
    }

    /// Tokens one stage produces for `text`.
    fn tokens_for(&self, namespace: Namespace, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for family in PatternFamily::ALL
            .into_iter()
            .filter(|f| f.namespace() == namespace)
        {
            let Some(handler) = self.registry.parser(family) else {
                continue;
            };
            for hit in self.catalog.hits(family, text) {
                if let Some(token) = handler(&hit, self.state) {
                    tokens.push(token);
                }
            }
        }
        for recognizer in &self.recognizers {
            recognizer.recognize(namespace, text, self.state, &mut tokens);
        }
        tokens
    }
}

/// An input sentence: a sequence of phrases.
#[derive(Clone, Debug, Default)]
pub struct Sentence {
    phrases: Vector<Phrase>,
}

impl Sentence {
    /// Splits input into one empty phrase per word.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self::from_words(wordify(input))
    }

    /// One empty phrase per word.
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            phrases: words.into_iter().map(Phrase::new).collect(),
        }
    }

    /// Builds a sentence from ready-made phrases.
    #[must_use]
    pub fn from_phrases(phrases: impl IntoIterator<Item = Phrase>) -> Self {
        Self {
            phrases: phrases.into_iter().collect(),
        }
    }

    /// Number of phrases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns true if there are no phrases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// The phrases in order.
    pub fn phrases(&self) -> impl Iterator<Item = &Phrase> {
        self.phrases.iter()
    }

    /// Mutable access to the phrases in order.
    pub fn phrases_mut(&mut self) -> impl Iterator<Item = &mut Phrase> {
        self.phrases.iter_mut()
    }

    /// The phrase at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Phrase> {
        self.phrases.get(index)
    }

    /// Full text of the sentence.
    #[must_use]
    pub fn text(&self) -> String {
        join_text(self.phrases.iter())
    }

    /// Runs every stage, then reduces.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::RewriteLimit`](parley_foundation::ErrorKind::RewriteLimit)
    /// if a rewrite loop exceeds the context's budget.
    pub fn parse(&mut self, context: &ParseContext<'_>) -> Result<()> {
        self.run_stages(context)?;
        self.reduce(context)
    }

    /// Tokenizes and refactors through every stage without reducing.
    ///
    /// # Errors
    ///
    /// Returns a rewrite-limit error if a refactor exceeds the budget.
    pub fn run_stages(&mut self, context: &ParseContext<'_>) -> Result<()> {
        for namespace in Namespace::ALL {
            self.tokenize(context, namespace);
            self.refactor(context, namespace)?;
            debug!(?namespace, phrases = self.phrases.len(), "stage complete");
        }
        Ok(())
    }

    /// Adds one stage's tokens to every phrase.
    pub fn tokenize(&mut self, context: &ParseContext<'_>, namespace: Namespace) {
        for phrase in self.phrases.iter_mut() {
            let tokens = context.tokens_for(namespace, &phrase.text);
            phrase.extend_distinct(tokens);
        }
    }

    /// Merges neighbouring phrases until no merge improves the reading.
    ///
    /// A window of two or more phrases merges when its joined text, tokenized
    /// by every stage up to `namespace`, has a best token at least as similar
    /// as the best token of any phrase in the window. A tie merges on
    /// purpose, not only a strict improvement. Windows are tried smallest
    /// first, left to right, and the scan restarts from two-phrase windows at
    /// offset 0 after each merge, which makes the worst case cubic in the
    /// phrase count.
    ///
    /// # Errors
    ///
    /// Returns a rewrite-limit error if more merges happen than the budget
    /// allows.
    pub fn refactor(&mut self, context: &ParseContext<'_>, namespace: Namespace) -> Result<()> {
        if namespace == Namespace::Reduction {
            return Ok(());
        }
        let mut rewrites = 0;
        while let Some((offset, count, merged)) = self.find_merge(context, namespace) {
            rewrites += 1;
            if rewrites > context.max_rewrites {
                return Err(Error::rewrite_limit("refactor", context.max_rewrites));
            }
            trace!(?namespace, text = %merged.text, "merged phrases");
            self.splice(offset, count, merged);
        }
        Ok(())
    }

    fn find_merge(
        &self,
        context: &ParseContext<'_>,
        namespace: Namespace,
    ) -> Option<(usize, usize, Phrase)> {
        let n = self.phrases.len();
        for count in 2..=n {
            for offset in 0..=n - count {
                let window: Vec<&Phrase> = self.phrases.iter().skip(offset).take(count).collect();
                let previous = window
                    .iter()
                    .map(|p| p.best_similarity())
                    .fold(0.0_f32, f32::max);
                let text = join_text(window.iter().copied());
                let merged = context.tokenize_text(namespace, &text);
                if merged.best().is_some_and(|best| best.similarity() >= previous) {
                    return Some((offset, count, merged));
                }
            }
        }
        None
    }

    /// Removes phrases nothing recognized.
    pub fn remove_empty(&mut self) {
        self.phrases.retain(|p| !p.is_empty());
    }

    /// Applies reduction rules until none applies.
    ///
    /// Tiers are tried in order; within a tier, window lengths ascend, then
    /// offsets ascend, then rules go in registration order. After each
    /// reduction the search restarts from the first tier.
    ///
    /// # Errors
    ///
    /// Returns a rewrite-limit error if more reductions happen than the
    /// budget allows.
    pub fn reduce(&mut self, context: &ParseContext<'_>) -> Result<()> {
        self.remove_empty();
        let reduce_context = ReduceContext {
            state: context.state,
        };
        let mut rewrites = 0;
        while let Some((offset, count, reduced)) = self.find_reduction(context, &reduce_context) {
            rewrites += 1;
            if rewrites > context.max_rewrites {
                return Err(Error::rewrite_limit("reduce", context.max_rewrites));
            }
            self.splice(offset, count, reduced);
        }
        debug!(phrases = self.phrases.len(), rewrites, "sentence reduced");
        Ok(())
    }

    fn find_reduction(
        &self,
        context: &ParseContext<'_>,
        reduce_context: &ReduceContext<'_>,
    ) -> Option<(usize, usize, Phrase)> {
        let n = self.phrases.len();
        for tier in Tier::ALL {
            for length in context.registry.window_lengths(tier) {
                if length > n {
                    break;
                }
                for offset in 0..=n - length {
                    let window: Vec<&Phrase> =
                        self.phrases.iter().skip(offset).take(length).collect();
                    for rule in context.registry.rules_for(tier, length) {
                        if let Some(token) = rule.apply(reduce_context, &window) {
                            trace!(rule = rule.id(), text = %token.text, "reduced");
                            let text = join_text(window.iter().copied());
                            return Some((offset, length, Phrase::of_token(text, token)));
                        }
                    }
                }
            }
        }
        None
    }

    /// Replaces `count` phrases starting at `offset` with one phrase.
    fn splice(&mut self, offset: usize, count: usize, phrase: Phrase) {
        let mut tail = self.phrases.split_off(offset);
        let rest = tail.split_off(count);
        self.phrases.push_back(phrase);
        self.phrases.append(rest);
    }
}
