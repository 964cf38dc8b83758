//! Picking the command a sentence asks for.

use parley_grammar::{Sentence, Token, TokenVariant};
use parley_state::{FuzzyState, TextCommand};
use tracing::trace;

use crate::config::ParserConfig;

/// Takes every method token out of `sentence` and returns the commands they
/// name, the primary command first.
///
/// The primary command is the most confident method token anywhere in the
/// sentence, ties going to the longer text and then to the earlier token.
/// Other readings of the primary's own phrase are kept as alternates only if
/// they are near exact, since they compete for the same words. Method tokens
/// from other phrases are kept as alternates. Alternates are ordered by
/// descending priority.
///
/// Returns an empty list if the sentence holds no method token.
pub fn extract_command_list(
    sentence: &mut Sentence,
    state: &FuzzyState,
    config: &ParserConfig,
) -> Vec<TextCommand> {
    let Some((primary_phrase, primary)) = primary_method(sentence) else {
        return Vec::new();
    };

    let mut candidates: Vec<String> = Vec::new();
    for (index, phrase) in sentence.phrases().enumerate() {
        for token in phrase.tokens().iter().filter(|t| is_method(t)) {
            if index == primary_phrase && token.similarity() < config.alternate_method_threshold {
                continue;
            }
            if let Some(name) = &token.name {
                candidates.push(name.clone());
            }
        }
    }

    for phrase in sentence.phrases_mut() {
        phrase.retain(|t| !is_method(t));
    }

    let Some(primary) = state.command(&primary) else {
        return Vec::new();
    };
    let mut alternates: Vec<&TextCommand> = Vec::new();
    for name in &candidates {
        if name == &primary.canonical_name || alternates.iter().any(|c| &c.canonical_name == name)
        {
            continue;
        }
        if let Some(command) = state.command(name) {
            alternates.push(command);
        }
    }
    alternates.sort_by(|a, b| b.priority.cmp(&a.priority));
    trace!(
        primary = %primary.canonical_name,
        alternates = alternates.len(),
        "extracted commands"
    );

    std::iter::once(primary)
        .chain(alternates)
        .cloned()
        .collect()
}

fn is_method(token: &Token) -> bool {
    token.variant == TokenVariant::METHOD
}

/// Index of the phrase holding the primary method token, and the command's
/// canonical name.
fn primary_method(sentence: &Sentence) -> Option<(usize, String)> {
    let mut best: Option<(usize, &Token)> = None;
    for (index, phrase) in sentence.phrases().enumerate() {
        for token in phrase.tokens().iter().filter(|t| is_method(t)) {
            let better = best.is_none_or(|(_, current)| {
                token.similarity() > current.similarity()
                    || (token.similarity() == current.similarity()
                        && token.text.len() > current.text.len())
            });
            if better {
                best = Some((index, token));
            }
        }
    }
    let (index, token) = best?;
    Some((index, token.name.clone()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_grammar::{Phrase, Value};

    fn method(text: &str, name: &str, similarity: f32) -> Token {
        Token::new(TokenVariant::METHOD, text, similarity)
            .with_name(name)
            .with_value(Value::Command(name.into()))
    }

    fn state() -> FuzzyState {
        FuzzyState::default()
            .with_command(TextCommand::new("kick").with_alias("kick").with_priority(1))
            .with_command(TextCommand::new("kill").with_alias("kill").with_priority(9))
            .with_command(TextCommand::new("ban").with_alias("ban").with_priority(5))
            .with_command(TextCommand::new("yell").with_alias("yell").with_priority(3))
    }

    fn phrase(text: &str, tokens: Vec<Token>) -> Phrase {
        let mut phrase = Phrase::new(text);
        phrase.extend_distinct(tokens);
        phrase
    }

    fn names(commands: &[TextCommand]) -> Vec<&str> {
        commands.iter().map(|c| c.canonical_name.as_str()).collect()
    }

    #[test]
    fn no_method_no_commands() {
        let mut sentence = Sentence::from_phrases([Phrase::new("phogue")]);
        assert!(extract_command_list(&mut sentence, &state(), &ParserConfig::default()).is_empty());
    }

    #[test]
    fn primary_then_alternates_by_priority() {
        let mut sentence = Sentence::from_phrases([
            phrase("kick", vec![method("kick", "kick", 100.0), method("kick", "kill", 85.0)]),
            phrase("ban", vec![method("ban", "ban", 70.0)]),
            phrase("yell", vec![method("yell", "yell", 65.0)]),
        ]);
        let commands = extract_command_list(&mut sentence, &state(), &ParserConfig::default());
        assert_eq!(names(&commands), vec!["kick", "kill", "ban", "yell"]);
    }

    #[test]
    fn weak_siblings_are_trimmed() {
        let mut sentence = Sentence::from_phrases([phrase(
            "kick",
            vec![method("kick", "kick", 100.0), method("kick", "kill", 70.0)],
        )]);
        let commands = extract_command_list(&mut sentence, &state(), &ParserConfig::default());
        assert_eq!(names(&commands), vec!["kick"]);
    }

    #[test]
    fn ties_prefer_longer_text() {
        let mut sentence = Sentence::from_phrases([
            phrase("ban", vec![method("ban", "ban", 90.0)]),
            phrase("kick now", vec![method("kick now", "kick", 90.0)]),
        ]);
        let commands = extract_command_list(&mut sentence, &state(), &ParserConfig::default());
        assert_eq!(names(&commands), vec!["kick", "ban"]);
    }

    #[test]
    fn method_tokens_are_removed() {
        let mut sentence = Sentence::from_phrases([phrase(
            "kick",
            vec![
                method("kick", "kick", 100.0),
                Token::new(TokenVariant::NUMERIC, "kick", 60.0),
            ],
        )]);
        extract_command_list(&mut sentence, &state(), &ParserConfig::default());
        let phrase = sentence.get(0).unwrap();
        assert_eq!(phrase.len(), 1);
        assert_eq!(phrase.best().unwrap().variant, TokenVariant::NUMERIC);
    }
}
