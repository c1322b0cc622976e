//! Case-insensitive deduplication of candidate tokens.

use std::collections::HashSet;

use super::validation::is_valid_email;

/// Counts produced by scanning one file.
///
/// `duplicates` folds syntactically invalid tokens together with repeats of
/// an address that was already accepted, so `valid + duplicates == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Every candidate token encountered.
    pub total: usize,
    /// Distinct valid addresses, compared case-insensitively.
    pub valid: usize,
    /// Invalid tokens plus repeated addresses.
    pub duplicates: usize,
}

/// Accumulates candidate tokens into a set of distinct addresses.
#[derive(Debug, Default)]
pub struct Collector {
    seen: HashSet<String>,
    total: usize,
    duplicates: usize,
}

impl Collector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one candidate token.
    ///
    /// Returns true if the token was accepted as a new address.
    pub fn push(&mut self, token: &str) -> bool {
        self.total += 1;

        if !is_valid_email(token) {
            self.duplicates += 1;
            return false;
        }

        let accepted = self.seen.insert(token.to_lowercase());
        if !accepted {
            self.duplicates += 1;
        }
        accepted
    }

    /// Current counts.
    #[must_use]
    pub fn summary(&self) -> ImportSummary {
        ImportSummary {
            total: self.total,
            valid: self.seen.len(),
            duplicates: self.duplicates,
        }
    }

    /// Consumes the collector and returns the final counts.
    #[must_use]
    pub fn finish(self) -> ImportSummary {
        self.summary()
    }
}

impl<'a> Extend<&'a str> for Collector {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for token in iter {
            self.push(token);
        }
    }
}
