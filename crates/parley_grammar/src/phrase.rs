//! Phrases: a span of input and every way it has been read.

use crate::token::Token;

/// A contiguous span of input words and the candidate tokens for it.
///
/// Tokens are kept ranked (see [`Token::rank`]), so [`Phrase::best`] is the
/// preferred interpretation. No two tokens in a phrase are equivalent.
#[derive(Clone, Debug, Default)]
pub struct Phrase {
    /// The covered words joined by single spaces
    pub text: String,
    tokens: Vec<Token>,
}

impl Phrase {
    /// Creates a phrase with no tokens.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tokens: Vec::new(),
        }
    }

    /// Creates a phrase holding a single token.
    #[must_use]
    pub fn of_token(text: impl Into<String>, token: Token) -> Self {
        Self {
            text: text.into(),
            tokens: vec![token],
        }
    }

    /// The ranked tokens.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The highest-ranked token.
    #[must_use]
    pub fn best(&self) -> Option<&Token> {
        self.tokens.first()
    }

    /// Similarity of the best token, or zero for an empty phrase.
    #[must_use]
    pub fn best_similarity(&self) -> f32 {
        self.best().map_or(0.0, Token::similarity)
    }

    /// Returns true if nothing recognized this span.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of candidate tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Adds one token, keeping the phrase ranked and free of equivalents.
    pub fn push(&mut self, token: Token) {
        self.extend_distinct(std::iter::once(token));
    }

    /// Adds tokens, keeping the phrase ranked and free of equivalents.
    ///
    /// When an incoming token is equivalent to one already present, the more
    /// confident of the two is kept.
    pub fn extend_distinct(&mut self, tokens: impl IntoIterator<Item = Token>) {
        for token in tokens {
            match self.tokens.iter_mut().find(|t| t.is_equivalent(&token)) {
                Some(existing) if token.similarity() > existing.similarity() => *existing = token,
                Some(_) => {}
                None => self.tokens.push(token),
            }
        }
        self.tokens.sort_by(Token::rank);
    }

    /// Keeps only the tokens for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&Token) -> bool) {
        self.tokens.retain(keep);
    }
}

/// Joins the texts of consecutive phrases.
#[must_use]
pub fn join_text<'a>(phrases: impl IntoIterator<Item = &'a Phrase>) -> String {
    let mut text = String::new();
    for phrase in phrases {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&phrase.text);
    }
    text
}
