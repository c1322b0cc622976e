//! Application state.
//!
//! [`AppState`] owns the three persisted collections together with the
//! store they live in. It is built once at startup from the store, and
//! every mutating operation writes the affected collection back in full.

use chrono::Utc;
use tracing::{debug, info};

use crate::campaign::{Campaign, CampaignDraft, CampaignId, Template, TemplateId};
use crate::contacts::{ContactList, ContactListId, ContactOption};
use crate::ids::IdGenerator;
use crate::ingest::scan;
use crate::settings::{THEME_KEY, ThemeMode};
use crate::store::{Collection, Store};
use crate::template::Preview;
use crate::upload::SourceFile;
use crate::Result;

/// Process-wide state handed to the front end.
#[derive(Debug)]
pub struct AppState {
    store: Store,
    ids: IdGenerator,
    campaigns: Vec<Campaign>,
    contacts: Vec<ContactList>,
    templates: Vec<Template>,
    theme: ThemeMode,
}

impl AppState {
    /// Loads all collections and the theme from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails. Corrupt stored data is
    /// not an error and loads as empty.
    pub async fn open(store: Store) -> Result<Self> {
        let campaigns: Vec<Campaign> = store.load(Collection::Campaigns).await?;
        let contacts: Vec<ContactList> = store.load(Collection::Contacts).await?;
        let templates: Vec<Template> = store.load(Collection::Templates).await?;
        let theme = store
            .get_raw(THEME_KEY)
            .await?
            .map_or_else(ThemeMode::default, |raw| ThemeMode::parse(&raw));

        let last_id = campaigns
            .iter()
            .map(|c| c.id.0)
            .chain(contacts.iter().map(|l| l.id.0))
            .chain(templates.iter().map(|t| t.id.0))
            .max()
            .unwrap_or(0);

        info!(
            "Loaded {} campaigns, {} contact lists, {} templates",
            campaigns.len(),
            contacts.len(),
            templates.len()
        );

        Ok(Self {
            store,
            ids: IdGenerator::starting_after(last_id),
            campaigns,
            contacts,
            templates,
            theme,
        })
    }

    /// Contact lists in creation order.
    #[must_use]
    pub fn contact_lists(&self) -> &[ContactList] {
        &self.contacts
    }

    /// Contact lists newest first, as shown in list views.
    pub fn contact_lists_newest_first(&self) -> impl Iterator<Item = &ContactList> {
        self.contacts.iter().rev()
    }

    /// Options for picking a contact list, in creation order.
    #[must_use]
    pub fn contact_options(&self) -> Vec<ContactOption> {
        self.contacts.iter().map(ContactOption::from).collect()
    }

    /// Launched campaigns in creation order.
    #[must_use]
    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    /// Saved templates in creation order.
    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Current theme.
    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Scans an uploaded file and stores the resulting contact list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyResult`](crate::Error::EmptyResult) if the file
    /// holds no valid address; state is left untouched in that case. Also
    /// fails if the store cannot be written.
    pub async fn import_contacts(&mut self, file: &SourceFile) -> Result<ContactList> {
        let summary = scan(&file.text);
        debug!(
            "Scanned {}: {} candidates, {} valid, {} rejected",
            file.name, summary.total, summary.valid, summary.duplicates
        );

        let now = Utc::now();
        let mut ids = self.ids.clone();
        let list = ContactList::build(ContactListId(ids.next_at(now)), &file.name, summary, now)?;

        self.contacts.push(list.clone());
        if let Err(e) = self.store.save(Collection::Contacts, &self.contacts).await {
            self.contacts.pop();
            return Err(e);
        }
        self.ids = ids;

        info!(
            "Imported contact list {} ({}): {} valid of {}",
            list.id, list.name, list.valid, list.total
        );
        Ok(list)
    }

    /// Deletes the contact list with `id`, then saves the remaining lists.
    ///
    /// Returns true if a list was removed. An unknown id leaves the
    /// collection unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub async fn delete_contact_list(&mut self, id: ContactListId) -> Result<bool> {
        let before = self.contacts.len();
        self.contacts.retain(|list| list.id != id);
        let removed = self.contacts.len() != before;

        self.store.save(Collection::Contacts, &self.contacts).await?;

        if removed {
            info!("Deleted contact list {id}");
        } else {
            debug!("No contact list {id} to delete");
        }
        Ok(removed)
    }

    /// Launches a campaign from the composer contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub async fn launch_campaign(&mut self, draft: CampaignDraft) -> Result<Campaign> {
        let now = Utc::now();
        let mut ids = self.ids.clone();
        let campaign = Campaign::launch(CampaignId(ids.next_at(now)), draft, now);

        self.campaigns.push(campaign.clone());
        if let Err(e) = self.store.save(Collection::Campaigns, &self.campaigns).await {
            self.campaigns.pop();
            return Err(e);
        }
        self.ids = ids;

        info!("Launched campaign {} ({})", campaign.id, campaign.name);
        Ok(campaign)
    }

    /// Saves the composer contents as a template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingContent`](crate::Error::MissingContent) if
    /// subject or body is empty, or an error if the store cannot be written.
    pub async fn save_template(&mut self, subject: &str, body: &str) -> Result<Template> {
        let now = Utc::now();
        let mut ids = self.ids.clone();
        let template = Template::new(TemplateId(ids.next_at(now)), subject, body, now)?;

        self.templates.push(template.clone());
        if let Err(e) = self.store.save(Collection::Templates, &self.templates).await {
            self.templates.pop();
            return Err(e);
        }
        self.ids = ids;

        info!("Saved template {}", template.id);
        Ok(template)
    }

    /// Renders the composer contents with the sample recipient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingContent`](crate::Error::MissingContent) if
    /// subject or body is empty.
    #[allow(clippy::unused_self)]
    pub fn preview(&self, subject: &str, body: &str) -> Result<Preview> {
        Preview::sample(subject, body)
    }

    /// Switches between light and dark and persists the choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub async fn toggle_theme(&mut self) -> Result<ThemeMode> {
        self.set_theme(self.theme.toggle()).await?;
        Ok(self.theme)
    }

    /// Sets and persists the theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub async fn set_theme(&mut self, theme: ThemeMode) -> Result<()> {
        self.store.put_raw(THEME_KEY, theme.as_str()).await?;
        self.theme = theme;
        debug!("Theme set to {theme}");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;

    async fn state() -> AppState {
        AppState::open(Store::in_memory().await.unwrap()).await.unwrap()
    }

    #[tokio::test]
    async fn test_open_empty() {
        let state = state().await;
        assert!(state.contact_lists().is_empty());
        assert!(state.campaigns().is_empty());
        assert!(state.templates().is_empty());
        assert_eq!(state.theme(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_import_and_delete() {
        let mut state = state().await;
        let file = SourceFile::new("leads.csv", "a@b.com, A@B.COM;c@d");
        let list = state.import_contacts(&file).await.unwrap();
        assert_eq!(list.summary().valid, 1);
        assert_eq!(state.contact_lists().to_vec(), vec![list.clone()]);

        assert!(!state.delete_contact_list(ContactListId(list.id.0 + 1)).await.unwrap());
        assert_eq!(state.contact_lists().len(), 1);

        assert!(state.delete_contact_list(list.id).await.unwrap());
        assert!(state.contact_lists().is_empty());
    }

    #[tokio::test]
    async fn test_empty_import_leaves_state() {
        let mut state = state().await;
        state
            .import_contacts(&SourceFile::new("a.txt", "x@y.io"))
            .await
            .unwrap();

        let result = state
            .import_contacts(&SourceFile::new("blank.txt", "   \n"))
            .await;
        assert!(matches!(result, Err(Error::EmptyResult { .. })));
        assert_eq!(state.contact_lists().len(), 1);
    }

    #[tokio::test]
    async fn test_ids_strictly_increase() {
        let mut state = state().await;
        let a = state
            .import_contacts(&SourceFile::new("a.txt", "x@y.io"))
            .await
            .unwrap();
        let b = state
            .import_contacts(&SourceFile::new("b.txt", "x@y.io"))
            .await
            .unwrap();
        let c = state
            .launch_campaign(CampaignDraft::default())
            .await
            .unwrap();
        assert!(a.id.0 < b.id.0);
        assert!(b.id.0 < c.id.0);
    }

    #[tokio::test]
    async fn test_options_and_newest_first() {
        let mut state = state().await;
        state
            .import_contacts(&SourceFile::new("first.txt", "x@y.io"))
            .await
            .unwrap();
        state
            .import_contacts(&SourceFile::new("second.txt", "x@y.io z@y.io"))
            .await
            .unwrap();

        let labels: Vec<_> = state
            .contact_options()
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(labels, vec!["first.txt (1 contacts)", "second.txt (2 contacts)"]);

        let names: Vec<_> = state
            .contact_lists_newest_first()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, vec!["second.txt", "first.txt"]);
    }

    #[tokio::test]
    async fn test_template_and_preview() {
        let mut state = state().await;
        assert!(matches!(
            state.save_template("", "body").await,
            Err(Error::MissingContent)
        ));
        assert!(state.templates().is_empty());

        state.save_template("Hi {{firstName}}", "Body").await.unwrap();
        assert_eq!(state.templates().len(), 1);

        let preview = state.preview("Hi {{firstName}}", "Body").unwrap();
        assert_eq!(preview.subject, "Hi John");
    }

    #[tokio::test]
    async fn test_toggle_theme() {
        let mut state = state().await;
        assert_eq!(state.toggle_theme().await.unwrap(), ThemeMode::Light);
        assert_eq!(state.toggle_theme().await.unwrap(), ThemeMode::Dark);
    }
}
