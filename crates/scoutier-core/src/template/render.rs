//! Placeholder rendering.

use super::fields::MergeFields;
use crate::{Error, Result};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replaces every `{{name}}` whose name is in `fields` with its value.
///
/// Names must match exactly, with no whitespace inside the braces.
/// Placeholders with unknown names are left as they are. Values are inserted
/// verbatim and never scanned again.
#[must_use]
pub fn render(text: &str, fields: &MergeFields) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let value = after_open
            .find(CLOSE)
            .and_then(|end| fields.get(&after_open[..end]).map(|value| (end, value)));

        if let Some((end, value)) = value {
            out.push_str(value);
            rest = &after_open[end + CLOSE.len()..];
        } else {
            // Step over one brace so "{{{name}}" still finds "{{name}}"
            out.push('{');
            rest = &rest[start + 1..];
        }
    }

    out.push_str(rest);
    out
}

/// A subject/body pair rendered with sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Rendered subject.
    pub subject: String,
    /// Rendered body.
    pub body: String,
}

impl Preview {
    /// Renders `subject` and `body` with `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingContent`] if subject or body is empty.
    pub fn render(subject: &str, body: &str, fields: &MergeFields) -> Result<Self> {
        if subject.is_empty() || body.is_empty() {
            return Err(Error::MissingContent);
        }

        Ok(Self {
            subject: render(subject, fields),
            body: render(body, fields),
        })
    }

    /// Renders with the fixed sample recipient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingContent`] if subject or body is empty.
    pub fn sample(subject: &str, body: &str) -> Result<Self> {
        Self::render(subject, body, &MergeFields::sample())
    }
}
