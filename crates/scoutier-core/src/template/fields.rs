//! Merge field values.

use std::collections::BTreeMap;

/// Mapping from placeholder name to replacement value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeFields {
    values: BTreeMap<String, String>,
}

impl MergeFields {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed recipient used for previews.
    #[must_use]
    pub fn sample() -> Self {
        [
            ("firstName", "John"),
            ("lastName", "Doe"),
            ("email", "john@example.com"),
            ("company", "Acme Corp"),
            ("position", "CEO"),
        ]
        .into_iter()
        .collect()
    }

    /// Sets the value for `name`, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Value for `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MergeFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}
