use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{display_or_unset, CatalogEntity, EntityRef, EntityStatus, NOT_SET};

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog product as returned by `GET /product/product/{id}`
///
/// Immutable once received: it only seeds a form draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub category: Option<EntityRef>,
    #[serde(default)]
    pub supplier: Option<EntityRef>,
    #[serde(default)]
    pub unit: Option<EntityRef>,

    #[serde(rename = "purchaseprice", alias = "purchasePrice")]
    pub purchase_price: f64,
    #[serde(rename = "saleprice", alias = "salePrice", default)]
    pub sale_price: Option<f64>,

    #[serde(default)]
    pub warranty: Option<String>,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default)]
    pub image: Option<String>,

    // Audit
    #[serde(rename = "regby", default)]
    pub created_by: Option<String>,
    #[serde(rename = "regdate", alias = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "upby", default)]
    pub updated_by: Option<String>,
    #[serde(rename = "update", alias = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn category_label(&self) -> String {
        display_or_unset(self.category.as_ref().map(EntityRef::label))
    }

    pub fn unit_label(&self) -> String {
        display_or_unset(self.unit.as_ref().map(EntityRef::label))
    }

    pub fn supplier_label(&self) -> String {
        display_or_unset(self.supplier.as_ref().map(EntityRef::label))
    }

    pub fn sale_price_label(&self) -> String {
        self.sale_price
            .map(|p| p.to_string())
            .unwrap_or_else(|| NOT_SET.to_string())
    }
}

impl CatalogEntity for Product {
    fn collection_path() -> &'static str {
        "/product/product"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn entity_id(&self) -> &str {
        &self.id
    }
}
