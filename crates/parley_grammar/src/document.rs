//! Vocabulary shipped with the engine.
//!
//! Hosts that want different words load their own document with
//! [`PatternCatalog::from_json`](crate::PatternCatalog::from_json); this one
//! covers English game-server chat.

/// The default match-pattern document.
pub const DEFAULT_DOCUMENT: &str = r##"{
    "Primitive.Numeric": [
        { "regex": "^(?P<value>-?\\d+(?:\\.\\d+)?)$" },
        { "text": "zero", "value": 0 },
        { "text": "one", "value": 1 },
        { "text": "two", "value": 2 },
        { "text": "three", "value": 3 },
        { "text": "four", "value": 4 },
        { "text": "five", "value": 5 },
        { "text": "six", "value": 6 },
        { "text": "seven", "value": 7 },
        { "text": "eight", "value": 8 },
        { "text": "nine", "value": 9 },
        { "text": "ten", "value": 10 },
        { "text": "eleven", "value": 11 },
        { "text": "twelve", "value": 12 },
        { "text": "thirteen", "value": 13 },
        { "text": "fourteen", "value": 14 },
        { "text": "fifteen", "value": 15 },
        { "text": "sixteen", "value": 16 },
        { "text": "seventeen", "value": 17 },
        { "text": "eighteen", "value": 18 },
        { "text": "nineteen", "value": 19 },
        { "text": "twenty", "value": 20 },
        { "text": "thirty", "value": 30 },
        { "text": "forty", "value": 40 },
        { "text": "fifty", "value": 50 },
        { "text": "sixty", "value": 60 },
        { "text": "seventy", "value": 70 },
        { "text": "eighty", "value": 80 },
        { "text": "ninety", "value": 90 },
        { "text": "hundred", "value": 100 },
        { "text": "thousand", "value": 1000 },
        { "text": "million", "value": 1000000 },
        { "text": "dozen", "value": 12 }
    ],
    "Primitive.String": [
        { "regex": "^\"(?P<value>[^\"]*)\"$" }
    ],
    "Primitive.DateTime": [
        { "regex": "^(?P<value>\\d{1,2}:\\d{2}(?::\\d{2})?)$" },
        { "text": "now", "value": { "second": 0 } },
        { "text": "today", "value": { "day": 0 } },
        { "text": "tomorrow", "value": { "day": 1 } },
        { "text": "tonight", "value": { "rule": "definitive", "hour": 20, "minute": 0, "second": 0 } },
        { "text": "noon", "value": { "rule": "definitive", "hour": 12, "minute": 0, "second": 0 } },
        { "text": "midday", "value": { "rule": "definitive", "hour": 12, "minute": 0, "second": 0 } },
        { "text": "midnight", "value": { "rule": "definitive", "hour": 0, "minute": 0, "second": 0 } },
        { "text": "monday", "value": { "rule": "definitive", "day_of_week": "Mon" } },
        { "text": "tuesday", "value": { "rule": "definitive", "day_of_week": "Tue" } },
        { "text": "wednesday", "value": { "rule": "definitive", "day_of_week": "Wed" } },
        { "text": "thursday", "value": { "rule": "definitive", "day_of_week": "Thu" } },
        { "text": "friday", "value": { "rule": "definitive", "day_of_week": "Fri" } },
        { "text": "saturday", "value": { "rule": "definitive", "day_of_week": "Sat" } },
        { "text": "sunday", "value": { "rule": "definitive", "day_of_week": "Sun" } },
        { "text": "january", "value": { "rule": "definitive", "month": 1 } },
        { "text": "february", "value": { "rule": "definitive", "month": 2 } },
        { "text": "march", "value": { "rule": "definitive", "month": 3 } },
        { "text": "april", "value": { "rule": "definitive", "month": 4 } },
        { "text": "june", "value": { "rule": "definitive", "month": 6 } },
        { "text": "july", "value": { "rule": "definitive", "month": 7 } },
        { "text": "august", "value": { "rule": "definitive", "month": 8 } },
        { "text": "september", "value": { "rule": "definitive", "month": 9 } },
        { "text": "october", "value": { "rule": "definitive", "month": 10 } },
        { "text": "november", "value": { "rule": "definitive", "month": 11 } },
        { "text": "december", "value": { "rule": "definitive", "month": 12 } }
    ],
    "Primitive.TimeUnit": [
        { "text": "second", "name": "Second" },
        { "text": "sec", "name": "Second" },
        { "text": "minute", "name": "Minute" },
        { "text": "min", "name": "Minute" },
        { "text": "hour", "name": "Hour" },
        { "text": "hr", "name": "Hour" },
        { "text": "day", "name": "Day" },
        { "text": "week", "name": "Week" },
        { "text": "month", "name": "Month" },
        { "text": "year", "name": "Year" }
    ],
    "Primitive.Meridiem": [
        { "text": "am", "name": "Am" },
        { "text": "pm", "name": "Pm" }
    ],
    "Syntax.Punctuation": [
        { "text": ",", "name": "Comma" },
        { "text": ".", "name": "Period" },
        { "text": ":", "name": "Colon" },
        { "text": "?", "name": "QuestionMark" },
        { "text": "!", "name": "ExclamationMark" }
    ],
    "Syntax.Article": [
        { "text": "the", "name": "Definite" },
        { "text": "a", "name": "Indefinite" },
        { "text": "an", "name": "Indefinite" }
    ],
    "Syntax.Preposition": [
        { "text": "in", "name": "In" },
        { "text": "within", "name": "In" },
        { "text": "for", "name": "For" },
        { "text": "at", "name": "At" },
        { "text": "by", "name": "By" },
        { "text": "to", "name": "To" },
        { "text": "with", "name": "With" },
        { "text": "from", "name": "From" },
        { "text": "on", "name": "On" },
        { "text": "of", "name": "Of" },
        { "text": "than", "name": "Than" },
        { "text": "except", "name": "Except" },
        { "text": "excluding", "name": "Except" },
        { "text": "but", "name": "Except" }
    ],
    "Syntax.Adjective": [
        { "text": "every", "name": "Every" },
        { "text": "each", "name": "Every" },
        { "text": "next", "name": "Next" },
        { "text": "last", "name": "Last" },
        { "text": "this", "name": "This" },
        { "text": "all", "name": "All" }
    ],
    "Syntax.Typography": [
        { "text": "'s", "name": "Possessive" },
        { "text": "'", "name": "Quotation" },
        { "text": "@", "name": "Mention" }
    ],
    "Operator.Arithmetic": [
        { "text": "(", "name": "OpenParenthesis" },
        { "text": ")", "name": "CloseParenthesis" },
        { "text": "*", "name": "Multiplication" },
        { "text": "x", "name": "Multiplication" },
        { "text": "times", "name": "Multiplication" },
        { "text": "multiplied", "name": "Multiplication" },
        { "text": "/", "name": "Division" },
        { "text": "divided", "name": "Division" },
        { "text": "over", "name": "Division" },
        { "text": "^", "name": "Power" },
        { "text": "power", "name": "Power" },
        { "text": "+", "name": "Addition" },
        { "text": "plus", "name": "Addition" },
        { "text": "-", "name": "Subtraction" },
        { "text": "minus", "name": "Subtraction" }
    ],
    "Operator.Logical": [
        { "text": "and", "name": "And" },
        { "text": "&", "name": "And" },
        { "text": "&&", "name": "And" },
        { "text": "or", "name": "Or" },
        { "text": "||", "name": "Or" },
        { "text": "not", "name": "Not" }
    ],
    "Operator.Equality": [
        { "text": "=", "name": "Equals" },
        { "text": "==", "name": "Equals" },
        { "text": "is", "name": "Equals" },
        { "text": "equals", "name": "Equals" },
        { "text": "!=", "name": "NotEquals" },
        { "text": ">", "name": "GreaterThan" },
        { "text": "greater", "name": "GreaterThan" },
        { "text": "more", "name": "GreaterThan" },
        { "text": "above", "name": "GreaterThan" },
        { "text": ">=", "name": "GreaterThanOrEqual" },
        { "text": "<", "name": "LessThan" },
        { "text": "less", "name": "LessThan" },
        { "text": "fewer", "name": "LessThan" },
        { "text": "below", "name": "LessThan" },
        { "text": "under", "name": "LessThan" },
        { "text": "<=", "name": "LessThanOrEqual" }
    ],
    "Object.Thing": [
        { "text": "players", "name": "Players" },
        { "text": "everyone", "name": "Players" },
        { "text": "everybody", "name": "Players" },
        { "text": "maps", "name": "Maps" },
        { "text": "items", "name": "Items" },
        { "text": "weapons", "name": "Items" }
    ],
    "Object.NumericProperty": [
        { "text": "ping", "name": "Ping" },
        { "text": "latency", "name": "Ping" },
        { "text": "score", "name": "Score" },
        { "text": "points", "name": "Score" },
        { "text": "kills", "name": "Kills" },
        { "text": "frags", "name": "Kills" },
        { "text": "deaths", "name": "Deaths" },
        { "text": "kdr", "name": "Kdr" }
    ],
    "Object.SelfReflection": [
        { "text": "me", "name": "Self" },
        { "text": "myself", "name": "Self" },
        { "text": "i", "name": "Self" }
    ]
}"##;
