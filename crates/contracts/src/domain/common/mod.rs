//! Common types and traits for all catalog entities

pub mod catalog_entity;
pub mod entity_ref;
pub mod entity_status;
pub mod envelope;
pub mod reference_item;

// Re-exports
pub use catalog_entity::CatalogEntity;
pub use entity_ref::EntityRef;
pub use entity_status::EntityStatus;
pub use envelope::DataEnvelope;
pub use reference_item::{ReferenceItem, ReferenceList};

/// Sentinel rendered for optional entity fields that carry no value
pub const NOT_SET: &str = "Not set";

/// Render an optional display value, substituting [`NOT_SET`] for absent or blank values
pub fn display_or_unset(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_SET.to_string(),
    }
}
