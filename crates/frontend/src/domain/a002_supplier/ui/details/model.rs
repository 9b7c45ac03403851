use contracts::domain::a002_supplier::aggregate::Supplier;

use crate::shared::catalog::lifecycle::fetch_with_timeout;
use crate::shared::catalog::{BrowserTimer, CatalogError};
use crate::shared::services::AppServices;

pub async fn fetch_by_id(services: &AppServices, id: &str) -> Result<Supplier, CatalogError> {
    fetch_with_timeout(&services.api, &BrowserTimer, services.timeout_ms(), id).await
}
