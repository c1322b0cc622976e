//! Named collections and their storage keys.

/// One of the independently persisted entity groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Launched campaigns.
    Campaigns,
    /// Contact lists.
    Contacts,
    /// Saved templates.
    Templates,
}

impl Collection {
    /// All collections, in load order.
    pub const ALL: [Self; 3] = [Self::Campaigns, Self::Contacts, Self::Templates];

    /// Storage key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Campaigns => "campaigns",
            Self::Contacts => "contacts",
            Self::Templates => "templates",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
