//! Token-level helpers shared by the decision walk and the repair passes.
//!
//! Words are whitespace-delimited tokens that may carry leading or trailing
//! punctuation from the recognizer. Every comparison against a language table
//! goes through [`strip_word`] first.

/// Terminal punctuation marks a recognizer or the engine may attach to a word.
pub const TERMINALS: [char; 3] = ['.', '!', '?'];

/// Strip leading/trailing non-alphanumeric characters and case-fold.
///
/// `"¿Cuándo?"` becomes `"cuándo"`, `"147,"` becomes `"147"`.
pub fn strip_word(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Whether the token ends with `.`, `!` or `?` (ignoring closing quotes).
pub fn ends_with_terminal(token: &str) -> bool {
    token
        .trim_end_matches(['"', '\'', '»', ')'])
        .ends_with(TERMINALS)
}

/// Remove trailing terminal punctuation from a token, keeping closing quotes.
pub fn strip_terminal(token: &str) -> String {
    let trailing_quotes: String = token
        .chars()
        .rev()
        .take_while(|c| matches!(c, '"' | '\'' | '»' | ')'))
        .collect();
    let inner = token.trim_end_matches(['"', '\'', '»', ')']);
    let stripped = inner.trim_end_matches(TERMINALS);
    let mut out = String::with_capacity(stripped.len() + trailing_quotes.len());
    out.push_str(stripped);
    out.extend(trailing_quotes.chars().rev());
    out
}

/// Lower-case the first alphabetic character of a token.
pub fn lowercase_first(token: &str) -> String {
    map_first_alphabetic(token, |c| c.to_lowercase().collect::<String>())
}

/// Upper-case the first alphabetic character of a token.
pub fn capitalize_first(token: &str) -> String {
    map_first_alphabetic(token, |c| c.to_uppercase().collect::<String>())
}

fn map_first_alphabetic(token: &str, f: impl Fn(char) -> String) -> String {
    let mut out = String::with_capacity(token.len());
    let mut done = false;
    for c in token.chars() {
        if !done && c.is_alphabetic() {
            out.push_str(&f(c));
            done = true;
        } else {
            out.push(c);
        }
    }
    out
}

/// Whether a token starts lowercase (first alphabetic character, if any).
pub fn starts_lowercase(token: &str) -> bool {
    token
        .chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(|c| c.is_lowercase())
}

/// Whether the stripped token is purely numeric (`"147"`, `"99,"`, `"3."`).
pub fn is_numeric(token: &str) -> bool {
    let stripped = strip_word(token);
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}
