//! Common types and traits for all inventory records

pub mod entity_kind;
pub mod list_record;
pub mod serde_helpers;

// Re-exports
pub use entity_kind::EntityKind;
pub use list_record::{draft_from_record, ListRecord};
