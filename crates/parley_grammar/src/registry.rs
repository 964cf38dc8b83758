//! The grammar registry: parse handlers and reduction rules.
//!
//! Built once, then shared read-only by every parse. Rules are kept in
//! registration order inside each [`Tier`] so reduction is deterministic.

use std::collections::HashMap;

use parley_state::FuzzyState;

use crate::families::{ParseHandler, handler_for};
use crate::pattern::PatternFamily;
use crate::phrase::Phrase;
use crate::rules;
use crate::signature::{Bound, Signature};
use crate::token::Token;

/// Reduction precedence groups, tried in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Joining adjacent pieces of one thing ("phogue and zaeed", "the map")
    Combine,
    /// Grouping and compound numbers
    FirstOrder,
    /// Multiplication, division, power
    SecondOrder,
    /// Addition, subtraction
    ThirdOrder,
    /// Everything else: times, conditions, filters
    General,
}

impl Tier {
    /// All tiers in reduction order.
    pub const ALL: [Self; 5] = [
        Self::Combine,
        Self::FirstOrder,
        Self::SecondOrder,
        Self::ThirdOrder,
        Self::General,
    ];
}

/// What a rule may read while reducing.
#[derive(Clone, Copy, Debug)]
pub struct ReduceContext<'a> {
    /// The state being parsed against
    pub state: &'a FuzzyState,
}

/// Builds the replacement token for a bound window.
pub type RuleHandler = fn(&ReduceContext<'_>, &Bound<'_>) -> Option<Token>;

/// A reduction rule: a signature and what to do when it binds.
#[derive(Clone, Debug)]
pub struct Rule {
    /// Precedence group
    pub tier: Tier,
    /// Accepted shape
    pub signature: Signature,
    handler: RuleHandler,
}

impl Rule {
    /// Creates a rule.
    #[must_use]
    pub fn new(tier: Tier, signature: Signature, handler: RuleHandler) -> Self {
        Self {
            tier,
            signature,
            handler,
        }
    }

    /// The rule id.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.signature.id
    }

    /// Binds the window and runs the handler.
    #[must_use]
    pub fn apply(&self, context: &ReduceContext<'_>, window: &[&Phrase]) -> Option<Token> {
        let bound = self.signature.bind(window)?;
        (self.handler)(context, &bound)
    }
}

/// Parse handlers per pattern family plus the reduction rules.
#[derive(Clone, Debug)]
pub struct GrammarRegistry {
    parsers: HashMap<PatternFamily, ParseHandler>,
    rules: Vec<Rule>,
    by_id: HashMap<&'static str, usize>,
}

impl GrammarRegistry {
    /// A registry with the shipped handlers and rules.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for family in PatternFamily::ALL {
            registry.parsers.insert(family, handler_for(family));
        }
        for rule in rules::shipped() {
            registry = registry.with_rule(rule);
        }
        registry
    }

    /// A registry with no handlers and no rules.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
            rules: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Registers or replaces the parse handler for a family.
    #[must_use]
    pub fn with_parser(mut self, family: PatternFamily, handler: ParseHandler) -> Self {
        self.parsers.insert(family, handler);
        self
    }

    /// Adds a rule after the existing rules of its tier. A rule with an
    /// existing id replaces the old one in place.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        if let Some(&index) = self.by_id.get(rule.id()) {
            self.rules[index] = rule;
            return self;
        }
        self.by_id.insert(rule.id(), self.rules.len());
        self.rules.push(rule);
        self
    }

    /// The parse handler for a family.
    #[must_use]
    pub fn parser(&self, family: PatternFamily) -> Option<ParseHandler> {
        self.parsers.get(&family).copied()
    }

    /// A rule by id.
    #[must_use]
    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.by_id.get(id).map(|&i| &self.rules[i])
    }

    /// All rules, in registration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules of one tier taking `length` phrases, in registration order.
    pub fn rules_for(&self, tier: Tier, length: usize) -> impl Iterator<Item = &Rule> {
        self.rules
            .iter()
            .filter(move |r| r.tier == tier && r.signature.len() == length)
    }

    /// Distinct window lengths used by a tier, ascending.
    #[must_use]
    pub fn window_lengths(&self, tier: Tier) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .rules
            .iter()
            .filter(|r| r.tier == tier)
            .map(|r| r.signature.len())
            .collect();
        lengths.sort_unstable();
        lengths.dedup();
        lengths
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::new()
    }
}
