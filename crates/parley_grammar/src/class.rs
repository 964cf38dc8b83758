//! The token type lattice.
//!
//! Rule signatures name the kind of token they accept as a [`TokenClass`].
//! A class is either a leaf ([`TokenClass::Is`], exactly one variant) or an
//! interior family such as [`TokenClass::Thing`] or
//! [`TokenClass::SecondOrder`]. Every class has at most one parent, so
//! "is-a" is a walk up the chain.

use crate::token::{
    ArithmeticOperator, ArithmeticOrder, Article, LogicalOperator, ObjectKind, OperatorKind,
    Preposition, PrimitiveKind, Punctuation, SyntaxKind, TemporalKind, ThingKind, TokenVariant,
};

/// A node in the token type lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TokenClass {
    Primitive,
    Temporal,
    TimeUnit,
    Meridiem,
    Syntax,
    Punctuation,
    Article,
    Preposition,
    Adjective,
    Typography,
    Operator,
    Arithmetic,
    FirstOrder,
    SecondOrder,
    ThirdOrder,
    Logical,
    Equality,
    Object,
    Thing,
    NumericProperty,
    /// Exactly this variant
    Is(TokenVariant),
}

impl TokenClass {
    /// Numbers.
    pub const NUMERIC: Self = Self::Is(TokenVariant::NUMERIC);
    /// Quoted strings.
    pub const STRING: Self = Self::Is(TokenVariant::Primitive(PrimitiveKind::String));
    /// Dates, times, and spans.
    pub const DATE_TIME: Self = Self::Is(TokenVariant::DATE_TIME);
    /// Player sets.
    pub const PLAYER: Self = Self::Is(TokenVariant::thing(ThingKind::Player));
    /// Map sets.
    pub const MAP: Self = Self::Is(TokenVariant::thing(ThingKind::Map));
    /// Item sets.
    pub const ITEM: Self = Self::Is(TokenVariant::thing(ThingKind::Item));
    /// Country sets.
    pub const LOCATION: Self = Self::Is(TokenVariant::thing(ThingKind::Location));
    /// Command words.
    pub const METHOD: Self = Self::Is(TokenVariant::METHOD);
    /// "me".
    pub const SELF_REFLECTION: Self = Self::Is(TokenVariant::Object(ObjectKind::SelfReflection));
    /// "and".
    pub const AND: Self = Self::Is(TokenVariant::Operator(OperatorKind::Logical(
        LogicalOperator::And,
    )));
    /// ",".
    pub const COMMA: Self = Self::Is(TokenVariant::Syntax(SyntaxKind::Punctuation(
        Punctuation::Comma,
    )));
    /// "(".
    pub const OPEN_PARENTHESIS: Self = Self::Is(TokenVariant::Operator(OperatorKind::Arithmetic(
        ArithmeticOperator::OpenParenthesis,
    )));
    /// ")".
    pub const CLOSE_PARENTHESIS: Self = Self::Is(TokenVariant::Operator(
        OperatorKind::Arithmetic(ArithmeticOperator::CloseParenthesis),
    ));
    /// "by".
    pub const BY: Self = Self::Is(TokenVariant::Syntax(SyntaxKind::Preposition(
        Preposition::By,
    )));
    /// "than".
    pub const THAN: Self = Self::Is(TokenVariant::Syntax(SyntaxKind::Preposition(
        Preposition::Than,
    )));
    /// "a", "an".
    pub const INDEFINITE: Self = Self::Is(TokenVariant::Syntax(SyntaxKind::Article(
        Article::Indefinite,
    )));

    /// The class directly above this one, or `None` for a root.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Primitive | Self::Syntax | Self::Operator | Self::Object => None,
            Self::Temporal => Some(Self::Primitive),
            Self::TimeUnit | Self::Meridiem => Some(Self::Temporal),
            Self::Punctuation
            | Self::Article
            | Self::Preposition
            | Self::Adjective
            | Self::Typography => Some(Self::Syntax),
            Self::Arithmetic | Self::Logical | Self::Equality => Some(Self::Operator),
            Self::FirstOrder | Self::SecondOrder | Self::ThirdOrder => Some(Self::Arithmetic),
            Self::Thing | Self::NumericProperty => Some(Self::Object),
            Self::Is(variant) => Some(family_of(variant)),
        }
    }

    /// Returns true if `variant` belongs to this class.
    #[must_use]
    pub fn contains(self, variant: TokenVariant) -> bool {
        let mut class = Some(Self::Is(variant));
        while let Some(current) = class {
            if current == self {
                return true;
            }
            class = current.parent();
        }
        false
    }

    /// Returns true if `variant` is exactly this class.
    #[must_use]
    pub fn is_exactly(self, variant: TokenVariant) -> bool {
        self == Self::Is(variant)
    }
}

/// The innermost family a variant belongs to.
const fn family_of(variant: TokenVariant) -> TokenClass {
    match variant {
        TokenVariant::Primitive(PrimitiveKind::Numeric | PrimitiveKind::String) => {
            TokenClass::Primitive
        }
        TokenVariant::Primitive(PrimitiveKind::Temporal(kind)) => match kind {
            TemporalKind::DateTime => TokenClass::Temporal,
            TemporalKind::Unit(_) => TokenClass::TimeUnit,
            TemporalKind::Meridiem(_) => TokenClass::Meridiem,
        },
        TokenVariant::Syntax(kind) => match kind {
            SyntaxKind::Punctuation(_) => TokenClass::Punctuation,
            SyntaxKind::Article(_) => TokenClass::Article,
            SyntaxKind::Preposition(_) => TokenClass::Preposition,
            SyntaxKind::Adjective(_) => TokenClass::Adjective,
            SyntaxKind::Typography(_) => TokenClass::Typography,
        },
        TokenVariant::Operator(kind) => match kind {
            OperatorKind::Arithmetic(op) => match op.order() {
                ArithmeticOrder::First => TokenClass::FirstOrder,
                ArithmeticOrder::Second => TokenClass::SecondOrder,
                ArithmeticOrder::Third => TokenClass::ThirdOrder,
            },
            OperatorKind::Logical(_) => TokenClass::Logical,
            OperatorKind::Equality(_) => TokenClass::Equality,
        },
        TokenVariant::Object(kind) => match kind {
            ObjectKind::Thing(_) => TokenClass::Thing,
            ObjectKind::NumericProperty(_) => TokenClass::NumericProperty,
            ObjectKind::Method | ObjectKind::SelfReflection => TokenClass::Object,
        },
    }
}
