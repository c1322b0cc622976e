//! Time-derived entity identifiers.

use chrono::{DateTime, Utc};

/// Hands out strictly increasing ids based on the wall clock in
/// milliseconds.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Creates a generator that never returns an id at or below `last`.
    #[must_use]
    pub const fn starting_after(last: i64) -> Self {
        Self { last }
    }

    /// Next id for an entity created at `now`.
    pub fn next_at(&mut self, now: DateTime<Utc>) -> i64 {
        self.last = now.timestamp_millis().max(self.last.saturating_add(1));
        self.last
    }

    /// Largest id handed out or seeded so far.
    #[must_use]
    pub const fn last(&self) -> i64 {
        self.last
    }
}
