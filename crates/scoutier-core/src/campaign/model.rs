//! Campaign and template models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Name given to campaigns submitted without one.
pub const UNTITLED_CAMPAIGN: &str = "Untitled Campaign";

/// Name given to every saved template.
pub const CUSTOM_TEMPLATE: &str = "Custom Template";

/// Unique identifier for a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(pub i64);

impl std::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(pub i64);

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Campaign lifecycle state. Campaigns are launched straight into `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    /// Launched.
    #[default]
    Active,
}

impl CampaignStatus {
    /// Get display name for the status.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
        }
    }
}

/// Fields entered in the campaign composer.
#[derive(Debug, Clone, Default)]
pub struct CampaignDraft {
    /// Campaign name, may be blank.
    pub name: String,
    /// Subject line, may contain `{{field}}` placeholders.
    pub subject: String,
    /// Message body, may contain `{{field}}` placeholders.
    pub body: String,
}

/// A launched outreach campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Unique identifier.
    pub id: CampaignId,
    /// Display name.
    pub name: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
    /// Always [`CampaignStatus::Active`].
    pub status: CampaignStatus,
    /// When the campaign was launched.
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    /// Launches a campaign from a draft.
    ///
    /// A blank name is replaced with "Untitled Campaign".
    #[must_use]
    pub fn launch(id: CampaignId, draft: CampaignDraft, created_at: DateTime<Utc>) -> Self {
        let name = if draft.name.trim().is_empty() {
            UNTITLED_CAMPAIGN.to_string()
        } else {
            draft.name
        };

        Self {
            id,
            name,
            subject: draft.subject,
            body: draft.body,
            status: CampaignStatus::Active,
            created_at,
        }
    }
}

/// A saved subject/body pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Unique identifier.
    pub id: TemplateId,
    /// Display name.
    pub name: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
    /// When the template was saved.
    pub created_at: DateTime<Utc>,
}

impl Template {
    /// Creates a template from the composer contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingContent`] if subject or body is empty.
    pub fn new(
        id: TemplateId,
        subject: impl Into<String>,
        body: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        let subject = subject.into();
        let body = body.into();
        if subject.is_empty() || body.is_empty() {
            return Err(Error::MissingContent);
        }

        Ok(Self {
            id,
            name: CUSTOM_TEMPLATE.to_string(),
            subject,
            body,
            created_at,
        })
    }
}
