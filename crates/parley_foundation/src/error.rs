//! Error types for the Parley system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Linguistic outcomes are never errors: an input that names no command is a
//! no-match (`Ok(None)` at the parser boundary). The kinds below cover contract
//! violations, defensive limits, and the I/O done by the console.

use std::fmt;

use thiserror::Error;

/// The main error type for Parley operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a malformed document error.
    #[must_use]
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDocument(message.into()))
    }

    /// Creates a rewrite limit error for the given pipeline stage.
    #[must_use]
    pub fn rewrite_limit(stage: impl Into<String>, limit: usize) -> Self {
        Self::new(ErrorKind::RewriteLimit {
            stage: stage.into(),
            limit,
        })
    }

    /// Creates an input-too-long error.
    #[must_use]
    pub fn input_too_long(words: usize, limit: usize) -> Self {
        Self::new(ErrorKind::InputTooLong { words, limit })
    }

    /// Creates an unknown entity error.
    #[must_use]
    pub fn unknown_entity(kind: &'static str, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownEntity {
            kind,
            name: name.into(),
        })
    }

    /// Returns true if this error is a rewrite limit violation.
    #[must_use]
    pub fn is_rewrite_limit(&self) -> bool {
        matches!(self.kind, ErrorKind::RewriteLimit { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The match-pattern document could not be read as a keyed document.
    ///
    /// Individual malformed entries are skipped, not reported.
    #[error("invalid pattern document: {0}")]
    InvalidDocument(String),

    /// A refactor or reduce loop kept rewriting past its bound.
    ///
    /// Every accepted rewrite shrinks the sentence, so hitting this means a
    /// rule is broken.
    #[error("rewrite limit ({limit}) exceeded during {stage}")]
    RewriteLimit {
        /// The pipeline stage that was running.
        stage: String,
        /// The configured limit.
        limit: usize,
    },

    /// Input had more words than the configured cap.
    #[error("input too long: {words} words (limit {limit})")]
    InputTooLong {
        /// Number of words in the input.
        words: usize,
        /// The configured limit.
        limit: usize,
    },

    /// A named player/map/item/command does not exist in the snapshot.
    #[error("unknown {kind}: {name}")]
    UnknownEntity {
        /// What was being looked up.
        kind: &'static str,
        /// The name that failed to resolve.
        name: String,
    },

    /// I/O error (file operations).
    #[error("I/O error: {0}")]
    IoError(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or document name.
    pub source: Option<String>,
    /// The input text being parsed, if any.
    pub input: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the input text.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if let Some(input) = &self.input {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "while parsing {input:?}")?;
        }
        Ok(())
    }
}

/// Result type alias using Parley's Error.
pub type Result<T> = std::result::Result<T, Error>;
