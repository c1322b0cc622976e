//! Contact list model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ingest::ImportSummary;
use crate::{Error, Result};

/// Unique identifier for a contact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactListId(pub i64);

impl ContactListId {
    /// Create a new contact list ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ContactListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Summary of one ingested file. Never changes once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactList {
    /// Unique identifier.
    pub id: ContactListId,
    /// Display name, taken from the file name.
    pub name: String,
    /// All candidate tokens found in the file.
    pub total: usize,
    /// Distinct valid addresses.
    pub valid: usize,
    /// Invalid tokens plus repeated addresses.
    pub duplicates: usize,
    /// When the list was created.
    pub date: DateTime<Utc>,
}

impl ContactList {
    /// Builds a contact list from scan results.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyResult`] if the scan found no valid address.
    pub fn build(
        id: ContactListId,
        name: impl Into<String>,
        summary: ImportSummary,
        date: DateTime<Utc>,
    ) -> Result<Self> {
        let name = name.into();
        if summary.valid == 0 {
            return Err(Error::EmptyResult { name });
        }

        Ok(Self {
            id,
            name,
            total: summary.total,
            valid: summary.valid,
            duplicates: summary.duplicates,
            date,
        })
    }

    /// The counts this list was built from.
    #[must_use]
    pub const fn summary(&self) -> ImportSummary {
        ImportSummary {
            total: self.total,
            valid: self.valid,
            duplicates: self.duplicates,
        }
    }

    /// Label used when picking a list for a campaign.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({} contacts)", self.name, self.total)
    }

    /// Share of valid addresses among all candidates, in percent with one
    /// decimal. Zero when the list is empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn valid_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let rate = self.valid as f64 / self.total as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    }

    /// Creation date formatted for list views, e.g. "Jan 5, 2026".
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

/// One entry of the contact list picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactOption {
    /// List being offered.
    pub id: ContactListId,
    /// Display label.
    pub label: String,
}

impl From<&ContactList> for ContactOption {
    fn from(list: &ContactList) -> Self {
        Self {
            id: list.id,
            label: list.label(),
        }
    }
}
