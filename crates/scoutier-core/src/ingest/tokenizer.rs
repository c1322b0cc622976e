//! Candidate token extraction.

use super::is_space;

/// Returns true for characters that separate candidate tokens.
fn is_separator(c: char) -> bool {
    c == ',' || c == ';' || is_space(c)
}

/// Splits raw file text into candidate tokens.
///
/// The text is split into lines first, then each line on runs of commas,
/// semicolons and whitespace. Empty fragments are dropped. Tokens come out
/// in document order, which decides which occurrence of a repeated address
/// counts as the first one.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .flat_map(|line| line.split(is_separator))
        .map(|token| token.trim_matches(is_space))
        .filter(|token| !token.is_empty())
}
