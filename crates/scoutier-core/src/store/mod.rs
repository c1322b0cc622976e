//! Durable key-value storage for the persisted collections.

mod collection;
mod repository;

pub use collection::Collection;
pub use repository::Store;
