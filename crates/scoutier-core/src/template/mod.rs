//! `{{field}}` placeholder substitution for subjects and bodies.

mod fields;
mod render;

pub use fields::MergeFields;
pub use render::{Preview, render};
