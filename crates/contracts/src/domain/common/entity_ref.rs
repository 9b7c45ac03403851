use serde::{Deserialize, Serialize};

use super::ReferenceItem;

/// Reference to another record: the backend sends either a bare id or the populated item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    Populated(ReferenceItem),
    Id(String),
}

impl EntityRef {
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Populated(item) => &item.id,
            EntityRef::Id(id) => id,
        }
    }

    /// Display label when populated, otherwise the id itself
    pub fn label(&self) -> &str {
        match self {
            EntityRef::Populated(item) => &item.label,
            EntityRef::Id(id) => id,
        }
    }
}
