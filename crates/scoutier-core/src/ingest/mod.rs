//! Contact file ingestion.
//!
//! Turns an uploaded text blob into counts of candidate tokens, distinct
//! valid addresses and rejected entries. The pipeline is synchronous and
//! runs to completion once the whole file is in memory.

mod collector;
mod tokenizer;
mod validation;

pub use collector::{Collector, ImportSummary};
pub use tokenizer::tokenize;
pub use validation::is_valid_email;

/// Whitespace as far as tokenizing and validation are concerned. Includes
/// U+FEFF, which `char::is_whitespace` does not.
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Runs the tokenizer, validator and collector over `text`.
#[must_use]
pub fn scan(text: &str) -> ImportSummary {
    let mut collector = Collector::new();
    collector.extend(tokenize(text));
    collector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_mixed_separators() {
        let summary = scan("a@b.com, A@B.COM;c@d");
        assert_eq!(summary.total, 3);
        assert_eq!(summary.valid, 1);
        assert_eq!(summary.duplicates, 2);
    }

    #[test]
    fn test_scan_csv_with_header() {
        let text = "name,email\r\nAlice,alice@example.com\r\nBob,bob@example.com\r\n";
        let summary = scan(text);
        // "name", "email", "Alice", "Bob" are noise but still counted
        assert_eq!(summary.total, 6);
        assert_eq!(summary.valid, 2);
        assert_eq!(summary.duplicates, 4);
    }

    #[test]
    fn test_scan_byte_order_mark_is_space() {
        let summary = scan("\u{feff}bob@test.com\nBob@Test.com");
        assert_eq!(summary.total, 2);
        assert_eq!(summary.valid, 1);
        assert_eq!(summary.duplicates, 1);
    }

    #[test]
    fn test_scan_whitespace_only() {
        let summary = scan(" \n\t \r\n ");
        assert_eq!(summary, ImportSummary::default());
    }
}
