//! # scoutier-core
//!
//! Core logic for the Scoutier outreach tool.
//!
//! This crate provides:
//! - **Contact ingestion** - tokenizing uploaded files, validating and
//!   deduplicating email addresses
//! - **Contact lists** - summaries of each ingested file
//! - **Campaigns and templates** - composer output and saved drafts
//! - **Template rendering** - `{{field}}` placeholder substitution
//! - **Storage** - `SQLite`-backed key-value persistence of all collections
//!
//! ## Example
//!
//! ```
//! use scoutier_core::ingest::scan;
//!
//! let summary = scan("a@b.com, A@B.COM;c@d");
//! assert_eq!((summary.total, summary.valid, summary.duplicates), (3, 1, 2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod campaign;
pub mod contacts;
mod error;
mod ids;
pub mod ingest;
pub mod settings;
mod state;
pub mod store;
pub mod template;
pub mod upload;

pub use campaign::{Campaign, CampaignDraft, CampaignId, CampaignStatus, Template, TemplateId};
pub use contacts::{ContactList, ContactListId, ContactOption};
pub use error::{Error, Result};
pub use ids::IdGenerator;
pub use ingest::{Collector, ImportSummary};
pub use settings::ThemeMode;
pub use state::AppState;
pub use store::{Collection, Store};
pub use template::{MergeFields, Preview};
pub use upload::SourceFile;
