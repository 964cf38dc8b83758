//! Fuzzy string similarity.
//!
//! All scores are percentages in `0.0..=100.0` and all comparisons are
//! case-insensitive. The base score is the normalized Levenshtein distance
//! from `strsim`; the other functions refine it for names that show up in
//! chat in plural form or typed partially.

/// Weight applied to the shared-prefix / word-subset ratio in
/// [`subset_bonus_similarity`]. At most half of the remaining headroom is
/// granted as a bonus, so only an exact match reaches 100.
const SUBSET_BONUS_WEIGHT: f32 = 0.5;

/// Similarity of two strings as a percentage.
///
/// Two empty strings are identical (100); an empty string against a
/// non-empty one scores 0.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f32 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let score = strsim::normalized_levenshtein(&a, &b) * 100.0;
    (score as f32).clamp(0.0, 100.0)
}

/// Strips a plural or possessive ending from a word.
///
/// Only the final word of a multi-word string is touched. Short words
/// (three characters or fewer) are returned unchanged so "is", "bus" and
/// "gas" survive.
#[must_use]
pub fn de_plural(text: &str) -> String {
    let lower = text.to_lowercase();
    let lower = lower.trim();

    if let Some(stem) = lower.strip_suffix("'s").or_else(|| lower.strip_suffix("s'")) {
        return stem.to_string();
    }

    if lower.chars().count() <= 3 {
        return lower.to_string();
    }

    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{stem}y");
    }

    if lower.ends_with('s') && !lower.ends_with("ss") {
        return lower[..lower.len() - 1].to_string();
    }

    lower.to_string()
}

/// Similarity that ignores plural endings on either side.
///
/// Returns the better of the raw similarity and the similarity of the
/// singular forms, so "snipers" matches a tag "sniper" at 100.
#[must_use]
pub fn de_plural_similarity(a: &str, b: &str) -> f32 {
    let raw = similarity(a, b);
    if raw >= 100.0 {
        return raw;
    }
    raw.max(similarity(&de_plural(a), &de_plural(b)))
}

/// Similarity with a bonus for partial input.
///
/// Someone typing a command alias often types only its start ("chan" for
/// "change map") or only some of its words. The bonus is the fraction of the
/// longer string covered by either the shared leading characters or, when
/// every word of the shorter string appears in the longer one, by the shorter
/// string's words. Half of the headroom above the raw similarity is granted
/// in proportion to that fraction.
#[must_use]
pub fn subset_bonus_similarity(text: &str, candidate: &str) -> f32 {
    let base = similarity(text, candidate);
    if base >= 100.0 {
        return base;
    }

    let a = text.to_lowercase();
    let b = candidate.to_lowercase();
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let longest = a_len.max(b_len);
    if longest == 0 || a_len == 0 || b_len == 0 {
        return base;
    }

    let shared_prefix = a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count();
    let covered = shared_prefix.max(word_subset_coverage(&a, &b));
    let ratio = covered as f32 / longest as f32;

    (base + (100.0 - base) * ratio * SUBSET_BONUS_WEIGHT).clamp(0.0, 100.0)
}

/// Characters of the shorter string if all of its words occur in the longer.
fn word_subset_coverage(a: &str, b: &str) -> usize {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let long_words: Vec<&str> = long.split_whitespace().collect();
    let mut short_words = short.split_whitespace().peekable();
    if short_words.peek().is_none() {
        return 0;
    }

    if short_words.all(|w| long_words.contains(&w)) {
        short.chars().count()
    } else {
        0
    }
}
