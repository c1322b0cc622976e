//! Contact lists built from uploaded files.

mod model;

pub use model::{ContactList, ContactListId, ContactOption};
