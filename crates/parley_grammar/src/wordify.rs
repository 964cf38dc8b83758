//! Splitting raw input into words.

/// Splits input into lowercase words.
///
/// - Whitespace separates words
/// - `"quoted text"` stays one word, quotes and case preserved
/// - Brackets, commas, `!`, and `?` become words of their own
/// - `.` and `:` split words except between digits ("2.5", "17:30")
/// - A trailing `am`/`pm` is split off a time ("5pm", "5:30am")
/// - Operator characters (`+ * / ^ = < >`) become words of their own, and
///   `<=`, `>=`, `!=`, `==` stay together
#[must_use]
pub fn wordify(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut chars = input.chars().peekable();
    let mut current = String::new();

    let flush = |current: &mut String, words: &mut Vec<String>| {
        if !current.is_empty() {
            let word = current.to_lowercase();
            match split_meridiem(&word) {
                Some((time, meridiem)) => {
                    words.push(time.to_string());
                    words.push(meridiem.to_string());
                }
                None => words.push(word),
            }
            current.clear();
        }
    };

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                flush(&mut current, &mut words);
                let mut quoted = String::from('"');
                for c in chars.by_ref() {
                    if c == '"' {
                        break;
                    }
                    quoted.push(c);
                }
                quoted.push('"');
                words.push(quoted);
            }
            c if c.is_whitespace() => flush(&mut current, &mut words),
            '.' | ':' => {
                let between_digits = current.chars().last().is_some_and(|c| c.is_ascii_digit())
                    && chars.peek().is_some_and(char::is_ascii_digit);
                if between_digits {
                    current.push(ch);
                } else {
                    flush(&mut current, &mut words);
                    words.push(ch.to_string());
                }
            }
            '(' | ')' | ',' | '?' | '+' | '*' | '/' | '^' => {
                flush(&mut current, &mut words);
                words.push(ch.to_string());
            }
            '<' | '>' | '=' | '!' => {
                flush(&mut current, &mut words);
                if chars.peek() == Some(&'=') {
                    chars.next();
                    words.push(format!("{ch}="));
                } else {
                    words.push(ch.to_string());
                }
            }
            _ => current.push(ch),
        }
    }
    flush(&mut current, &mut words);

    words
}

/// "5pm" -> ("5", "pm"), "17:30am" -> ("17:30", "am").
fn split_meridiem(word: &str) -> Option<(&str, &str)> {
    let time = word.strip_suffix("am").or_else(|| word.strip_suffix("pm"))?;
    let clock = time.starts_with(|c: char| c.is_ascii_digit())
        && time.chars().all(|c| c.is_ascii_digit() || c == ':');
    clock.then(|| word.split_at(time.len()))
}
