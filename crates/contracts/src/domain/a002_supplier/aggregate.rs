use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{CatalogEntity, EntityStatus};

/// Поставщик из `GET /supplier/supplier/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    /// Associated company name
    #[serde(rename = "company", alias = "companyname", default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Running balance; negative means the amount owed to the supplier
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(rename = "regdate", alias = "createdAt", default)]
    pub registered_at: Option<DateTime<Utc>>,
}

/// Sign of the running balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceState {
    Owed,
    Settled,
    Credit,
}

impl Supplier {
    pub fn balance_state(&self) -> BalanceState {
        if self.balance < 0.0 {
            BalanceState::Owed
        } else if self.balance > 0.0 {
            BalanceState::Credit
        } else {
            BalanceState::Settled
        }
    }
}

impl CatalogEntity for Supplier {
    fn collection_path() -> &'static str {
        "/supplier/supplier"
    }

    fn element_name() -> &'static str {
        "Supplier"
    }

    fn entity_id(&self) -> &str {
        &self.id
    }
}
