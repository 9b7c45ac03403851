use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::form::ProductDraft;
use contracts::domain::a001_product::submission::{PendingUploads, SubmitTarget};
use contracts::domain::common::{ReferenceItem, ReferenceList};

use crate::routes::PRODUCT_LIST_PATH;
use crate::shared::catalog::lifecycle::fetch_with_timeout;
use crate::shared::catalog::references::resolve_list;
use crate::shared::catalog::submission::submit_product;
use crate::shared::catalog::{BrowserTimer, CatalogError};
use crate::shared::services::AppServices;

pub async fn fetch_by_id(services: &AppServices, id: &str) -> Result<Product, CatalogError> {
    fetch_with_timeout(&services.api, &BrowserTimer, services.timeout_ms(), id).await
}

pub async fn fetch_reference_list(
    services: &AppServices,
    list: ReferenceList,
) -> Vec<ReferenceItem> {
    resolve_list(&services.api, &BrowserTimer, services.timeout_ms(), list).await
}

/// Submit the draft; navigates to the product list on success
pub async fn save_form(
    services: &AppServices,
    draft: &ProductDraft,
    uploads: &PendingUploads<web_sys::File>,
    target: SubmitTarget,
) -> Result<(), CatalogError> {
    submit_product(
        &services.api,
        &services.navigator,
        &services.session.submission_context(),
        draft,
        uploads,
        target,
        PRODUCT_LIST_PATH,
    )
    .await
}
