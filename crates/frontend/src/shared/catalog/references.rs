//! Reference lists (categories, suppliers, units) for select options
//!
//! Lists resolve independently. A list that fails is logged and left empty;
//! it never blocks or clears the others.

use contracts::domain::common::{ReferenceItem, ReferenceList};

use super::api::{decode_envelope, CatalogApi};
use super::timer::{with_timeout, Timer};
use super::CatalogError;

/// Options for every reference list the product form uses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceOptions {
    pub categories: Vec<ReferenceItem>,
    pub suppliers: Vec<ReferenceItem>,
    pub units: Vec<ReferenceItem>,
}

impl ReferenceOptions {
    pub fn get(&self, list: ReferenceList) -> &[ReferenceItem] {
        match list {
            ReferenceList::Categories => &self.categories,
            ReferenceList::Suppliers => &self.suppliers,
            ReferenceList::Units => &self.units,
        }
    }

    pub fn set(&mut self, list: ReferenceList, items: Vec<ReferenceItem>) {
        match list {
            ReferenceList::Categories => self.categories = items,
            ReferenceList::Suppliers => self.suppliers = items,
            ReferenceList::Units => self.units = items,
        }
    }
}

pub async fn fetch_list<A>(api: &A, list: ReferenceList) -> Result<Vec<ReferenceItem>, CatalogError>
where
    A: CatalogApi + ?Sized,
{
    let body = api.get_json(list.path()).await?;
    decode_envelope(body)
}

/// Resolve one list, degrading to no options on any failure
pub async fn resolve_list<A, W>(
    api: &A,
    timer: &W,
    timeout_ms: u32,
    list: ReferenceList,
) -> Vec<ReferenceItem>
where
    A: CatalogApi + ?Sized,
    W: Timer + ?Sized,
{
    match with_timeout(timer, timeout_ms, fetch_list(api, list)).await {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Failed to load {}: {}", list.name(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::testing::{FakeApi, NeverTimer};
    use futures::executor::block_on;
    use serde_json::json;

    fn item(id: &str, label: &str) -> ReferenceItem {
        ReferenceItem {
            id: id.into(),
            label: label.into(),
        }
    }

    #[test]
    fn test_failed_supplier_list_leaves_others_populated() {
        let api = FakeApi::new()
            .with_json(
                "/category/all_category",
                json!({"data": [{"_id": "c1", "name": "Tools"}]}),
            )
            .with_error(
                "/supplier/all_supplier",
                CatalogError::FetchFailed("HTTP 503".into()),
            )
            .with_json(
                "/unit/all_units",
                json!({"data": [{"_id": "u1", "name": "Piece"}, {"_id": "u2", "name": "Box"}]}),
            );

        let mut options = ReferenceOptions::default();
        for list in ReferenceList::ALL {
            options.set(list, block_on(resolve_list(&api, &NeverTimer, 15_000, list)));
        }

        assert_eq!(options.categories, vec![item("c1", "Tools")]);
        assert!(options.suppliers.is_empty());
        assert_eq!(options.units.len(), 2);
        assert_eq!(api.requested_paths().len(), 3);
    }

    #[test]
    fn test_malformed_list_degrades_to_empty() {
        let api = FakeApi::new().with_json("/unit/all_units", json!({"data": "nope"}));
        let units = block_on(resolve_list(&api, &NeverTimer, 15_000, ReferenceList::Units));
        assert!(units.is_empty());
    }

    #[test]
    fn test_options_get_and_set() {
        let mut options = ReferenceOptions::default();
        options.set(ReferenceList::Suppliers, vec![item("s1", "Acme")]);
        assert_eq!(options.get(ReferenceList::Suppliers), &[item("s1", "Acme")]);
        assert!(options.get(ReferenceList::Units).is_empty());
    }
}
