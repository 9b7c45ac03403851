use serde::{Deserialize, Serialize};

/// Reference list entry: identifier plus display label, used only for select options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "name", alias = "label")]
    pub label: String,
}

/// Lookup lists the product form needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceList {
    Categories,
    Suppliers,
    Units,
}

impl ReferenceList {
    pub const ALL: [ReferenceList; 3] = [
        ReferenceList::Categories,
        ReferenceList::Suppliers,
        ReferenceList::Units,
    ];

    /// Backend path of the list
    pub fn path(&self) -> &'static str {
        match self {
            ReferenceList::Categories => "/category/all_category",
            ReferenceList::Suppliers => "/supplier/all_supplier",
            ReferenceList::Units => "/unit/all_units",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReferenceList::Categories => "categories",
            ReferenceList::Suppliers => "suppliers",
            ReferenceList::Units => "units",
        }
    }
}
