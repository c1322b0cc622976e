//! Key-value storage repository.

use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{debug, warn};

use super::collection::Collection;
use crate::Result;

/// Repository holding serialized collections and settings values.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Create a new store with the given database path.
    ///
    /// Creates the database and tables if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn new(database_path: &str) -> Result<Self> {
        let url = format!("sqlite:{database_path}?mode=rwc");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    /// Create an in-memory store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    /// Initialize database schema.
    async fn initialize(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get the raw stored value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| row.get("value")))
    }

    /// Replace the raw stored value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = CURRENT_TIMESTAMP
            ",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Load every entity of a collection.
    ///
    /// A missing value, or one that does not parse as a sequence of `T`,
    /// yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let Some(raw) = self.get_raw(collection.key()).await? else {
            debug!("No stored {collection}");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => {
                debug!("Loaded {} {collection}", items.len());
                Ok(items)
            }
            Err(e) => {
                warn!("Ignoring corrupt {collection} data: {e}");
                Ok(Vec::new())
            }
        }
    }

    /// Replace a whole collection.
    ///
    /// The write is a single statement, so a later [`load`](Self::load)
    /// sees either the old or the new sequence. Concurrent saves to the same
    /// collection are last-writer-wins.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database query fails.
    pub async fn save<T: Serialize>(&self, collection: Collection, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.put_raw(collection.key(), &raw).await?;
        debug!("Saved {} {collection}", items.len());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::campaign::{Campaign, CampaignDraft, CampaignId, Template, TemplateId};
    use crate::contacts::{ContactList, ContactListId};
    use crate::ingest::scan;

    fn lists() -> Vec<ContactList> {
        let date = Utc.with_ymd_and_hms(2026, 2, 1, 8, 0, 0).unwrap();
        vec![
            ContactList::build(ContactListId(1), "a.csv", scan("a@b.com"), date).unwrap(),
            ContactList::build(ContactListId(2), "b.txt", scan("x@y.io x@y.io"), date).unwrap(),
        ]
    }

    #[tokio::test]
    async fn test_load_missing_is_empty() {
        let store = Store::in_memory().await.unwrap();
        let items: Vec<ContactList> = store.load(Collection::Contacts).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_round_trip() {
        let store = Store::in_memory().await.unwrap();
        let lists = lists();
        store.save(Collection::Contacts, &lists).await.unwrap();

        let loaded: Vec<ContactList> = store.load(Collection::Contacts).await.unwrap();
        assert_eq!(loaded, lists);
    }

    #[tokio::test]
    async fn test_save_replaces_collection() {
        let store = Store::in_memory().await.unwrap();
        let lists = lists();
        store.save(Collection::Contacts, &lists).await.unwrap();
        store.save(Collection::Contacts, &lists[..1]).await.unwrap();

        let loaded: Vec<ContactList> = store.load(Collection::Contacts).await.unwrap();
        assert_eq!(loaded, lists[..1]);
    }

    #[tokio::test]
    async fn test_collections_are_independent() {
        let store = Store::in_memory().await.unwrap();
        let now = Utc::now();
        let campaign = Campaign::launch(CampaignId(10), CampaignDraft::default(), now);
        let template = Template::new(TemplateId(11), "s", "b", now).unwrap();

        store.save(Collection::Contacts, &lists()).await.unwrap();
        store.save(Collection::Campaigns, &[campaign.clone()]).await.unwrap();
        store.save(Collection::Templates, &[template.clone()]).await.unwrap();

        let campaigns: Vec<Campaign> = store.load(Collection::Campaigns).await.unwrap();
        let templates: Vec<Template> = store.load(Collection::Templates).await.unwrap();
        let contacts: Vec<ContactList> = store.load(Collection::Contacts).await.unwrap();
        assert_eq!(campaigns, vec![campaign]);
        assert_eq!(templates, vec![template]);
        assert_eq!(contacts.len(), 2);
    }

    #[tokio::test]
    async fn test_corrupt_data_is_empty() {
        let store = Store::in_memory().await.unwrap();
        store.put_raw("contacts", "{not json").await.unwrap();
        let items: Vec<ContactList> = store.load(Collection::Contacts).await.unwrap();
        assert!(items.is_empty());

        // Valid JSON with the wrong shape
        store.put_raw("contacts", r#"[{"id":1}]"#).await.unwrap();
        let items: Vec<ContactList> = store.load(Collection::Contacts).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_raw_values() {
        let store = Store::in_memory().await.unwrap();
        assert_eq!(store.get_raw("theme").await.unwrap(), None);
        store.put_raw("theme", "light").await.unwrap();
        store.put_raw("theme", "dark").await.unwrap();
        assert_eq!(store.get_raw("theme").await.unwrap().as_deref(), Some("dark"));
    }
}
