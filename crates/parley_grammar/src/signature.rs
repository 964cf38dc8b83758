//! Rule signatures and binding.
//!
//! A [`Signature`] lists the token classes a reduction rule takes. Binding a
//! signature against a window of phrases looks only at each phrase's best
//! token and hands the rule its arguments in parameter order.

use crate::class::TokenClass;
use crate::phrase::{Phrase, join_text};
use crate::token::{Token, TokenVariant};

/// One argument slot of a signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parameter {
    /// Argument name, for diagnostics
    pub name: &'static str,
    /// Accepted class
    pub class: TokenClass,
}

/// The shape of input a reduction rule accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// Unique rule id
    pub id: &'static str,
    /// Parameters in order
    pub parameters: Vec<Parameter>,
    /// Require each token's variant to be exactly the parameter class
    /// instead of any member of it
    pub exact_match_type: bool,
    /// Require phrase `i` to fill parameter `i`; when false, phrases may fill
    /// parameters in any order
    pub exact_match_signature: bool,
    /// Require every pair of bound tokens to be compatible
    pub demand_compatibility: bool,
}

impl Signature {
    /// Creates an empty positional signature.
    #[must_use]
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            parameters: Vec::new(),
            exact_match_type: false,
            exact_match_signature: true,
            demand_compatibility: false,
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn param(mut self, name: &'static str, class: TokenClass) -> Self {
        self.parameters.push(Parameter { name, class });
        self
    }

    /// Requires exact variants.
    #[must_use]
    pub fn exact_types(mut self) -> Self {
        self.exact_match_type = true;
        self
    }

    /// Lets phrases fill parameters in any order.
    #[must_use]
    pub fn any_order(mut self) -> Self {
        self.exact_match_signature = false;
        self
    }

    /// Requires the bound tokens to be pairwise compatible.
    #[must_use]
    pub fn compatible(mut self) -> Self {
        self.demand_compatibility = true;
        self
    }

    /// Number of phrases this signature consumes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns true if the signature takes no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    fn accepts(&self, parameter: &Parameter, variant: TokenVariant) -> bool {
        if self.exact_match_type {
            parameter.class.is_exactly(variant)
        } else {
            parameter.class.contains(variant)
        }
    }

    /// Binds a window of phrases to this signature.
    ///
    /// Returns `None` if the window length differs from the parameter count,
    /// a phrase has no tokens, compatibility is demanded and violated, or
    /// some parameter cannot be filled.
    #[must_use]
    pub fn bind<'p>(&self, window: &[&'p Phrase]) -> Option<Bound<'p>> {
        if window.len() != self.parameters.len() {
            return None;
        }
        let best: Vec<&'p Token> = window
            .iter()
            .map(|&phrase| phrase.best())
            .collect::<Option<_>>()?;

        if self.demand_compatibility {
            for (i, a) in best.iter().enumerate() {
                if best[i + 1..]
                    .iter()
                    .any(|b| !a.variant.is_compatible(b.variant))
                {
                    return None;
                }
            }
        }

        let tokens = if self.exact_match_signature {
            let all = self
                .parameters
                .iter()
                .zip(&best)
                .all(|(p, t)| self.accepts(p, t.variant));
            if !all {
                return None;
            }
            best
        } else {
            let mut remaining = best;
            let mut bound = Vec::with_capacity(remaining.len());
            for parameter in &self.parameters {
                let index = remaining
                    .iter()
                    .position(|t| self.accepts(parameter, t.variant))?;
                bound.push(remaining.remove(index));
            }
            bound
        };

        Some(Bound {
            text: join_text(window.iter().copied()),
            tokens,
        })
    }
}

/// The arguments of a successful binding.
#[derive(Clone, Debug)]
pub struct Bound<'p> {
    /// Text of the whole window, in input order
    pub text: String,
    /// Bound tokens, in parameter order
    pub tokens: Vec<&'p Token>,
}

impl Bound<'_> {
    /// The token bound to parameter `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a parameter of the bound signature.
    #[must_use]
    pub fn token(&self, index: usize) -> &Token {
        self.tokens[index]
    }

    /// Mean similarity of the bound tokens.
    #[must_use]
    pub fn similarity(&self) -> f32 {
        if self.tokens.is_empty() {
            return 0.0;
        }
        self.tokens.iter().map(|t| t.similarity()).sum::<f32>() / self.tokens.len() as f32
    }

    /// A new token covering the whole window.
    #[must_use]
    pub fn produce(&self, variant: TokenVariant) -> Token {
        Token::new(variant, self.text.clone(), self.similarity())
    }
}
