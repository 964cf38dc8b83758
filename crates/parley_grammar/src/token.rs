//! Tokens: one interpretation of a span of input.
//!
//! A [`Token`] pairs a [`TokenVariant`] (what kind of thing the span is) with
//! an optional [`Value`] (what it evaluates to) and a similarity score saying
//! how confident the match was.

use std::cmp::Ordering;

use parley_foundation::{Meridiem, TemporalPattern, TimeUnit};
use parley_state::{Item, Map, Player};

// =============================================================================
// Variants
// =============================================================================

/// The kind of thing a token stands for.
///
/// Variants nest the way the vocabulary is organized. Rule signatures match
/// on a [`TokenClass`](crate::TokenClass), which can name a leaf variant or
/// any family above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenVariant {
    /// Literal values: numbers, quoted strings, times
    Primitive(PrimitiveKind),
    /// Grammatical glue: punctuation, articles, prepositions
    Syntax(SyntaxKind),
    /// Arithmetic, logical, and comparison operators
    Operator(OperatorKind),
    /// Things in the game and ways to act on them
    Object(ObjectKind),
}

/// Literal value kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// A number
    Numeric,
    /// A quoted string
    String,
    /// A time, span, or time word
    Temporal(TemporalKind),
}

/// Temporal token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    /// A (possibly partial) date or time carrying a [`TemporalPattern`]
    DateTime,
    /// A unit word ("minutes")
    Unit(TimeUnit),
    /// "am" or "pm"
    Meridiem(Meridiem),
}

/// Syntax token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    /// Punctuation mark
    Punctuation(Punctuation),
    /// "the", "a", "an"
    Article(Article),
    /// "in", "for", "with", ...
    Preposition(Preposition),
    /// "every", "all", "next", ...
    Adjective(Adjective),
    /// Typographic marks
    Typography(Typography),
}

/// Punctuation marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Punctuation {
    Comma,
    Period,
    Colon,
    QuestionMark,
    ExclamationMark,
}

/// Articles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Article {
    /// "the"
    Definite,
    /// "a", "an"
    Indefinite,
}

/// Prepositions the grammar rules care about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Preposition {
    In,
    For,
    At,
    By,
    To,
    With,
    From,
    On,
    Of,
    Than,
    Except,
}

/// Quantifying adjectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Adjective {
    Every,
    Next,
    Last,
    This,
    All,
}

/// Typographic marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Typography {
    Possessive,
    Quotation,
    Mention,
}

/// Operator token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// Arithmetic operators and grouping
    Arithmetic(ArithmeticOperator),
    /// "and", "or", "not"
    Logical(LogicalOperator),
    /// Comparisons
    Equality(EqualityOperator),
}

/// Arithmetic operators, grouped by precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ArithmeticOperator {
    OpenParenthesis,
    CloseParenthesis,
    Multiplication,
    Division,
    Power,
    Addition,
    Subtraction,
}

/// Precedence group of an arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithmeticOrder {
    /// Grouping: evaluated before anything else
    First,
    /// Multiplication, division, power
    Second,
    /// Addition, subtraction
    Third,
}

/// Logical operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum LogicalOperator {
    And,
    Or,
    Not,
}

/// Comparison operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum EqualityOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

/// Object token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A set of live entities
    Thing(ThingKind),
    /// A command word
    Method,
    /// A numeric player property ("ping", "score")
    NumericProperty(NumericProperty),
    /// "me", "myself": the speaker
    SelfReflection,
}

/// Entity kinds a thing token can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ThingKind {
    Player,
    Map,
    Item,
    Location,
}

/// Player properties that can be compared against a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum NumericProperty {
    Ping,
    Score,
    Kills,
    Deaths,
    Kdr,
}

fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| *v)
}

impl Punctuation {
    /// Looks up a punctuation mark by its vocabulary name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        lookup(
            &[
                ("Comma", Self::Comma),
                ("Period", Self::Period),
                ("Colon", Self::Colon),
                ("QuestionMark", Self::QuestionMark),
                ("ExclamationMark", Self::ExclamationMark),
            ],
            name,
        )
    }
}

impl Article {
    /// Looks up an article by its vocabulary name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        lookup(
            &[("Definite", Self::Definite), ("Indefinite", Self::Indefinite)],
            name,
        )
    }
}

impl Preposition {
    /// Looks up a preposition by its vocabulary name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        lookup(
            &[
                ("In", Self::In),
                ("For", Self::For),
                ("At", Self::At),
                ("By", Self::By),
                ("To", Self::To),
                ("With", Self::With),
                ("From", Self::From),
                ("On", Self::On),
                ("Of", Self::Of),
                ("Than", Self::Than),
                ("Except", Self::Except),
            ],
            name,
        )
    }
}

impl Adjective {
    /// Looks up an adjective by its vocabulary name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        lookup(
            &[
                ("Every", Self::Every),
                ("Next", Self::Next),
                ("Last", Self::Last),
                ("This", Self::This),
                ("All", Self::All),
            ],
            name,
        )
    }
}

impl Typography {
    /// Looks up a typographic mark by its vocabulary name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        lookup(
            &[
                ("Possessive", Self::Possessive),
                ("Quotation", Self::Quotation),
                ("Mention", Self::Mention),
            ],
            name,
        )
    }
}

impl ArithmeticOperator {
    /// Looks up an arithmetic operator by its vocabulary name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        lookup(
            &[
                ("OpenParenthesis", Self::OpenParenthesis),
                ("CloseParenthesis", Self::CloseParenthesis),
                ("Multiplication", Self::Multiplication),
                ("Division", Self::Division),
                ("Power", Self::Power),
                ("Addition", Self::Addition),
                ("Subtraction", Self::Subtraction),
            ],
            name,
        )
    }

    /// The precedence group of this operator.
    #[must_use]
    pub const fn order(self) -> ArithmeticOrder {
        match self {
            Self::OpenParenthesis | Self::CloseParenthesis => ArithmeticOrder::First,
            Self::Multiplication | Self::Division | Self::Power => ArithmeticOrder::Second,
            Self::Addition | Self::Subtraction => ArithmeticOrder::Third,
        }
    }

    /// Applies a binary operator. Grouping operators and undefined results
    /// (division by zero, non-finite powers) yield `None`.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> Option<f64> {
        let result = match self {
            Self::Multiplication => left * right,
            Self::Division if right == 0.0 => return None,
            Self::Division => left / right,
            Self::Power => left.powf(right),
            Self::Addition => left + right,
            Self::Subtraction => left - right,
            Self::OpenParenthesis | Self::CloseParenthesis => return None,
        };
        result.is_finite().then_some(result)
    }
}

impl LogicalOperator {
    /// Looks up a logical operator by its vocabulary name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        lookup(
            &[("And", Self::And), ("Or", Self::Or), ("Not", Self::Not)],
            name,
        )
    }
}

impl EqualityOperator {
    /// Looks up a comparison by its vocabulary name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        lookup(
            &[
                ("Equals", Self::Equals),
                ("NotEquals", Self::NotEquals),
                ("GreaterThan", Self::GreaterThan),
                ("GreaterThanOrEqual", Self::GreaterThanOrEqual),
                ("LessThan", Self::LessThan),
                ("LessThanOrEqual", Self::LessThanOrEqual),
            ],
            name,
        )
    }

    /// Evaluates `left <op> right`.
    #[must_use]
    pub fn holds(self, left: f64, right: f64) -> bool {
        match self {
            Self::Equals => (left - right).abs() < f64::EPSILON,
            Self::NotEquals => (left - right).abs() >= f64::EPSILON,
            Self::GreaterThan => left > right,
            Self::GreaterThanOrEqual => left >= right,
            Self::LessThan => left < right,
            Self::LessThanOrEqual => left <= right,
        }
    }
}

impl NumericProperty {
    /// Looks up a property by its vocabulary name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        lookup(
            &[
                ("Ping", Self::Ping),
                ("Score", Self::Score),
                ("Kills", Self::Kills),
                ("Deaths", Self::Deaths),
                ("Kdr", Self::Kdr),
            ],
            name,
        )
    }

    /// Reads this property off a player.
    #[must_use]
    pub fn of(self, player: &Player) -> f64 {
        match self {
            Self::Ping => f64::from(player.ping),
            Self::Score => f64::from(player.score),
            Self::Kills => f64::from(player.kills),
            Self::Deaths => f64::from(player.deaths),
            Self::Kdr => player.kdr(),
        }
    }
}

impl ThingKind {
    /// Looks up a thing kind by the plural group name used in vocabulary
    /// documents ("Players", "Maps", "Items").
    #[must_use]
    pub fn from_group_name(name: &str) -> Option<Self> {
        lookup(
            &[
                ("Players", Self::Player),
                ("Maps", Self::Map),
                ("Items", Self::Item),
                ("Locations", Self::Location),
            ],
            name,
        )
    }
}

impl TokenVariant {
    /// Shorthand for a number token.
    pub const NUMERIC: Self = Self::Primitive(PrimitiveKind::Numeric);
    /// Shorthand for a date/time token.
    pub const DATE_TIME: Self = Self::Primitive(PrimitiveKind::Temporal(TemporalKind::DateTime));
    /// Shorthand for a method token.
    pub const METHOD: Self = Self::Object(ObjectKind::Method);

    /// Shorthand for a thing token of the given kind.
    #[must_use]
    pub const fn thing(kind: ThingKind) -> Self {
        Self::Object(ObjectKind::Thing(kind))
    }

    /// Returns true if both tokens could describe parts of the same thing.
    ///
    /// Syntax and operators fit next to anything. Things only combine with
    /// things of the same kind, and "me" counts as a player. Primitives
    /// combine within their own family.
    #[must_use]
    pub fn is_compatible(self, other: Self) -> bool {
        use ObjectKind::{SelfReflection, Thing};
        match (self, other) {
            (Self::Syntax(_) | Self::Operator(_), _) | (_, Self::Syntax(_) | Self::Operator(_)) => {
                true
            }
            (Self::Object(Thing(a)), Self::Object(Thing(b))) => a == b,
            (Self::Object(Thing(ThingKind::Player)), Self::Object(SelfReflection))
            | (Self::Object(SelfReflection), Self::Object(Thing(ThingKind::Player))) => true,
            (Self::Object(Thing(_)), Self::Object(_)) | (Self::Object(_), Self::Object(Thing(_))) => {
                false
            }
            (Self::Object(a), Self::Object(b)) => {
                std::mem::discriminant(&a) == std::mem::discriminant(&b)
            }
            (Self::Primitive(a), Self::Primitive(b)) => match (a, b) {
                (PrimitiveKind::Temporal(_), PrimitiveKind::Temporal(_)) => true,
                _ => a == b,
            },
            _ => false,
        }
    }
}

// =============================================================================
// Values
// =============================================================================

/// A condition on a numeric player property ("ping > 100").
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyCondition {
    /// Property being compared
    pub property: NumericProperty,
    /// Comparison
    pub operator: EqualityOperator,
    /// Right-hand side
    pub operand: f64,
}

impl PropertyCondition {
    /// Returns true if the player satisfies the condition.
    #[must_use]
    pub fn holds(&self, player: &Player) -> bool {
        self.operator
            .holds(self.property.of(player), self.operand)
    }
}

/// The evaluated payload of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A number
    Number(f64),
    /// Quoted text with the quotes removed
    Text(String),
    /// A date, time, or span
    Temporal(TemporalPattern),
    /// A property comparison
    Condition(PropertyCondition),
    /// A command's canonical name
    Command(String),
    /// Players
    Players(Vec<Player>),
    /// Maps
    Maps(Vec<Map>),
    /// Items
    Items(Vec<Item>),
    /// Country names
    Locations(Vec<String>),
}

impl Value {
    /// The number, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The pattern, if this is temporal.
    #[must_use]
    pub fn as_temporal(&self) -> Option<&TemporalPattern> {
        match self {
            Self::Temporal(t) => Some(t),
            _ => None,
        }
    }

    /// The players, if this is a player set.
    #[must_use]
    pub fn as_players(&self) -> Option<&[Player]> {
        match self {
            Self::Players(p) => Some(p),
            _ => None,
        }
    }
}

// =============================================================================
// Token
// =============================================================================

/// One interpretation of a span of input.
#[derive(Clone, Debug)]
pub struct Token {
    /// Source text the token covers
    pub text: String,
    /// Vocabulary name or entity name that produced the match
    pub name: Option<String>,
    /// What the token stands for
    pub variant: TokenVariant,
    /// What the token evaluates to
    pub value: Option<Value>,
    similarity: f32,
}

impl Token {
    /// Creates a token. Similarity is clamped to `0..=100`.
    #[must_use]
    pub fn new(variant: TokenVariant, text: impl Into<String>, similarity: f32) -> Self {
        Self {
            text: text.into(),
            name: None,
            variant,
            value: None,
            similarity: clamp_similarity(similarity),
        }
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the name if one is given.
    #[must_use]
    pub fn with_optional_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Sets the value.
    #[must_use]
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the covered text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Match confidence in `0..=100`.
    #[must_use]
    pub fn similarity(&self) -> f32 {
        self.similarity
    }

    /// The numeric value, if any.
    #[must_use]
    pub fn number(&self) -> Option<f64> {
        self.value.as_ref().and_then(Value::as_number)
    }

    /// The temporal value, if any.
    #[must_use]
    pub fn temporal(&self) -> Option<&TemporalPattern> {
        self.value.as_ref().and_then(Value::as_temporal)
    }

    /// Returns true if both tokens mean the same thing, regardless of how
    /// confidently each was matched or which text produced it.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.variant == other.variant && self.name == other.name && self.value == other.value
    }

    /// Ranking order inside a phrase: higher similarity first, then longer
    /// covered text first.
    #[must_use]
    pub fn rank(&self, other: &Self) -> Ordering {
        other
            .similarity
            .total_cmp(&self.similarity)
            .then_with(|| other.text.len().cmp(&self.text.len()))
    }
}

fn clamp_similarity(similarity: f32) -> f32 {
    if similarity.is_nan() {
        0.0
    } else {
        similarity.clamp(0.0, 100.0)
    }
}
