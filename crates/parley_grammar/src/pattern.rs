//! The pattern catalog: the vocabulary the tokenizer matches words against.
//!
//! A catalog is loaded once from a JSON document keyed by family
//! (`"Primitive.Numeric"`, `"Syntax.Preposition"`, ...). Each family holds a
//! list of entries; an entry matches either fuzzily against literal `text`
//! or exactly against a `regex`. Entries that cannot be used are skipped
//! with a warning so one bad line never takes the whole vocabulary down.

use std::collections::HashMap;

use parley_foundation::{Error, Result, similarity};
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::document::DEFAULT_DOCUMENT;

/// Tokenization stages, in the order they run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Namespace {
    /// Numbers, strings, times
    Primitive,
    /// Punctuation, articles, prepositions, adjectives
    Syntax,
    /// Arithmetic, logical, and comparison operators
    Operator,
    /// Entities, properties, command words
    Object,
    /// No vocabulary of its own; reaching it hands the sentence to reduction
    Reduction,
}

impl Namespace {
    /// All stages in order.
    pub const ALL: [Self; 5] = [
        Self::Primitive,
        Self::Syntax,
        Self::Operator,
        Self::Object,
        Self::Reduction,
    ];
}

/// A group of catalog entries that all produce the same kind of token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum PatternFamily {
    Numeric,
    String,
    DateTime,
    TimeUnit,
    Meridiem,
    Punctuation,
    Article,
    Preposition,
    Adjective,
    Typography,
    Arithmetic,
    Logical,
    Equality,
    Thing,
    NumericProperty,
    SelfReflection,
}

impl PatternFamily {
    /// Every family, in document order.
    pub const ALL: [Self; 16] = [
        Self::Numeric,
        Self::String,
        Self::DateTime,
        Self::TimeUnit,
        Self::Meridiem,
        Self::Punctuation,
        Self::Article,
        Self::Preposition,
        Self::Adjective,
        Self::Typography,
        Self::Arithmetic,
        Self::Logical,
        Self::Equality,
        Self::Thing,
        Self::NumericProperty,
        Self::SelfReflection,
    ];

    /// The document key for this family.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Numeric => "Primitive.Numeric",
            Self::String => "Primitive.String",
            Self::DateTime => "Primitive.DateTime",
            Self::TimeUnit => "Primitive.TimeUnit",
            Self::Meridiem => "Primitive.Meridiem",
            Self::Punctuation => "Syntax.Punctuation",
            Self::Article => "Syntax.Article",
            Self::Preposition => "Syntax.Preposition",
            Self::Adjective => "Syntax.Adjective",
            Self::Typography => "Syntax.Typography",
            Self::Arithmetic => "Operator.Arithmetic",
            Self::Logical => "Operator.Logical",
            Self::Equality => "Operator.Equality",
            Self::Thing => "Object.Thing",
            Self::NumericProperty => "Object.NumericProperty",
            Self::SelfReflection => "Object.SelfReflection",
        }
    }

    /// Looks up a family by document key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// The stage that matches this family.
    #[must_use]
    pub const fn namespace(self) -> Namespace {
        match self {
            Self::Numeric | Self::String | Self::DateTime | Self::TimeUnit | Self::Meridiem => {
                Namespace::Primitive
            }
            Self::Punctuation
            | Self::Article
            | Self::Preposition
            | Self::Adjective
            | Self::Typography => Namespace::Syntax,
            Self::Arithmetic | Self::Logical | Self::Equality => Namespace::Operator,
            Self::Thing | Self::NumericProperty | Self::SelfReflection => Namespace::Object,
        }
    }

    /// Lowest literal similarity that still produces a token.
    #[must_use]
    pub const fn minimum_similarity(self) -> f32 {
        match self {
            Self::DateTime | Self::TimeUnit | Self::Meridiem => 75.0,
            Self::Thing | Self::NumericProperty | Self::SelfReflection => 70.0,
            _ => 80.0,
        }
    }
}

/// One catalog entry.
#[derive(Clone, Debug)]
pub struct MatchPattern {
    /// Literal text compared fuzzily
    pub literal_text: Option<String>,
    /// Expression that must match the whole input span
    pub regex: Option<Regex>,
    /// Vocabulary name ("Addition", "Hour", "Players")
    pub name: Option<String>,
    /// Value carried by the entry
    pub value: Option<serde_json::Value>,
}

/// A successful match of one entry against one span.
#[derive(Clone, Debug)]
pub struct PatternHit<'a> {
    /// The entry that matched
    pub pattern: &'a MatchPattern,
    /// The span that was matched
    pub text: &'a str,
    /// Match confidence
    pub similarity: f32,
    /// The `value` capture group of a regex match
    pub captured: Option<&'a str>,
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    regex: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    value: Option<serde_json::Value>,
}

/// The loaded vocabulary. Immutable once built and safe to share between
/// threads.
#[derive(Clone, Debug, Default)]
pub struct PatternCatalog {
    families: HashMap<PatternFamily, Vec<MatchPattern>>,
}

impl PatternCatalog {
    /// Loads the vocabulary shipped with the engine.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded document is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_json(DEFAULT_DOCUMENT)
    }

    /// Loads a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidDocument`](parley_foundation::ErrorKind::InvalidDocument)
    /// if the text is not JSON or its top level is not an object.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| Error::invalid_document(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Loads a catalog from a parsed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidDocument`](parley_foundation::ErrorKind::InvalidDocument)
    /// if the top level is not an object.
    pub fn from_value(document: &serde_json::Value) -> Result<Self> {
        let object = document
            .as_object()
            .ok_or_else(|| Error::invalid_document("top level must be an object"))?;

        let mut families: HashMap<PatternFamily, Vec<MatchPattern>> = HashMap::new();
        for (key, entries) in object {
            let Some(family) = PatternFamily::from_key(key) else {
                warn!(key = %key, "skipping unknown pattern family");
                continue;
            };
            let Some(entries) = entries.as_array() else {
                warn!(key = %key, "pattern family is not a list");
                continue;
            };
            let patterns = families.entry(family).or_default();
            for entry in entries {
                if let Some(pattern) = compile_entry(key, entry) {
                    patterns.push(pattern);
                }
            }
        }

        let catalog = Self { families };
        debug!(patterns = catalog.len(), "pattern catalog loaded");
        Ok(catalog)
    }

    /// Entries of one family, in document order.
    #[must_use]
    pub fn patterns(&self, family: PatternFamily) -> &[MatchPattern] {
        self.families.get(&family).map_or(&[], Vec::as_slice)
    }

    /// Total number of usable entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.families.values().map(Vec::len).sum()
    }

    /// Returns true if no entries were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Matches `text` against every entry of `family`.
    ///
    /// Literal entries score their similarity to `text` and must reach the
    /// family minimum. Regex entries must match the whole span and score 100.
    #[must_use]
    pub fn hits<'a>(&'a self, family: PatternFamily, text: &'a str) -> Vec<PatternHit<'a>> {
        let minimum = family.minimum_similarity();
        let mut hits = Vec::new();
        for pattern in self.patterns(family) {
            if let Some(literal) = &pattern.literal_text {
                let score = similarity(text, literal);
                if score >= minimum {
                    hits.push(PatternHit {
                        pattern,
                        text,
                        similarity: score,
                        captured: None,
                    });
                }
            } else if let Some(regex) = &pattern.regex {
                let Some(captures) = regex.captures(text) else {
                    continue;
                };
                let whole = captures
                    .get(0)
                    .is_some_and(|m| m.start() == 0 && m.end() == text.len());
                if whole {
                    hits.push(PatternHit {
                        pattern,
                        text,
                        similarity: 100.0,
                        captured: captures.name("value").map(|m| m.as_str()),
                    });
                }
            }
        }
        hits
    }
}

fn compile_entry(key: &str, entry: &serde_json::Value) -> Option<MatchPattern> {
    let raw: RawEntry = match serde_json::from_value(entry.clone()) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(key = %key, error = %e, "skipping malformed pattern entry");
            return None;
        }
    };

    let regex = match raw.regex.as_deref().map(Regex::new) {
        None => None,
        Some(Ok(regex)) => Some(regex),
        Some(Err(e)) => {
            warn!(key = %key, error = %e, "skipping pattern with invalid regex");
            return None;
        }
    };

    if raw.text.is_none() && regex.is_none() {
        warn!(key = %key, "skipping pattern with neither text nor regex");
        return None;
    }

    Some(MatchPattern {
        literal_text: raw.text.map(|t| t.to_lowercase()),
        regex,
        name: raw.name,
        value: raw.value,
    })
}
