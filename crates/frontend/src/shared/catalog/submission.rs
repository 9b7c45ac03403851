//! Product submit flow: validate -> encode -> one multipart request -> navigate
//!
//! Validation failures never reach the network and never navigate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::domain::a001_product::form::{validate, ProductDraft};
use contracts::domain::a001_product::submission::{
    encode_product, PendingUploads, SubmissionContext, SubmitTarget, MAX_ATTACHMENTS,
};

use super::{CatalogApi, CatalogError};
use crate::shared::navigation::Navigator;

/// Re-entry guard: at most one submission in flight per form
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    in_flight: Arc<AtomicBool>,
}

/// Held for the duration of a submission; dropping it releases the guard
#[derive(Debug)]
pub struct SubmitPermit {
    in_flight: Arc<AtomicBool>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_begin(&self) -> Option<SubmitPermit> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(SubmitPermit {
            in_flight: self.in_flight.clone(),
        })
    }

}

impl Drop for SubmitPermit {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

/// Submit a product draft
///
/// On success navigates to `success_path` exactly once. On failure the draft and
/// uploads are left untouched so the user can retry.
pub async fn submit_product<A, N>(
    api: &A,
    navigator: &N,
    context: &SubmissionContext,
    draft: &ProductDraft,
    uploads: &PendingUploads<A::Attachment>,
    target: SubmitTarget,
    success_path: &str,
) -> Result<(), CatalogError>
where
    A: CatalogApi + ?Sized,
    N: Navigator + ?Sized,
{
    let validated = validate(draft).map_err(CatalogError::ValidationFailed)?;

    let payload = encode_product(&validated, context, uploads, &target);
    if payload.dropped_attachments > 0 {
        log::warn!(
            "Only {} image(s) per product are sent, {} attachment(s) dropped",
            MAX_ATTACHMENTS,
            payload.dropped_attachments
        );
    }

    if let Err(e) = api.send_multipart(&payload).await {
        let e = e.into_submission();
        log::error!("Product submission to {} failed: {}", payload.path, e);
        return Err(e);
    }

    navigator.navigate_to(success_path);
    Ok(())
}

/// Abandon the form: drop pending uploads, then leave for `exit_path`
pub fn cancel_product_form<A, N>(navigator: &N, uploads: &mut PendingUploads<A>, exit_path: &str)
where
    N: Navigator + ?Sized,
{
    uploads.clear();
    navigator.navigate_to(exit_path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::testing::{FakeApi, RecordingNavigator};
    use contracts::domain::a001_product::form::ProductField;
    use contracts::domain::a001_product::submission::SubmitMethod;
    use futures::executor::block_on;

    fn widget() -> ProductDraft {
        ProductDraft {
            name: "Widget".into(),
            purchase_price: "10".into(),
            status: "active".into(),
            supplier: "S1".into(),
            ..ProductDraft::default()
        }
    }

    fn context() -> SubmissionContext {
        SubmissionContext {
            user_id: Some("U1".into()),
            company_id: Some("C1".into()),
        }
    }

    #[test]
    fn test_end_to_end_create() {
        let api = FakeApi::new();
        let nav = RecordingNavigator::default();

        block_on(submit_product(
            &api,
            &nav,
            &context(),
            &widget(),
            &PendingUploads::new(),
            SubmitTarget::Create,
            "/product",
        ))
        .unwrap();

        let submissions = api.submissions();
        assert_eq!(submissions.len(), 1);
        let payload = &submissions[0];
        assert_eq!(payload.method, SubmitMethod::Post);
        assert_eq!(payload.path, "/product/product");

        let mut names = payload.field_names();
        names.sort_unstable();
        assert_eq!(
            names,
            vec!["compid", "name", "purchasePrice", "regby", "status", "supplier", "upby"]
        );
        assert_eq!(nav.visited(), vec!["/product".to_string()]);
    }

    #[test]
    fn test_invalid_draft_never_reaches_network() {
        let api = FakeApi::new();
        let nav = RecordingNavigator::default();
        let draft = ProductDraft {
            name: String::new(),
            purchase_price: String::new(),
            ..widget()
        };

        let err = block_on(submit_product(
            &api,
            &nav,
            &context(),
            &draft,
            &PendingUploads::new(),
            SubmitTarget::Create,
            "/product",
        ))
        .unwrap_err();

        let fields = err.field_errors().map(|f| f.fields()).unwrap_or_default();
        assert_eq!(fields, vec![ProductField::Name, ProductField::PurchasePrice]);
        assert!(api.submissions().is_empty());
        assert!(nav.visited().is_empty());
    }

    #[test]
    fn test_two_images_send_only_the_first() {
        let api = FakeApi::new();
        let nav = RecordingNavigator::default();
        let mut uploads = PendingUploads::new();
        uploads.push("first.jpg".to_string());
        uploads.push("second.jpg".to_string());

        block_on(submit_product(
            &api,
            &nav,
            &context(),
            &widget(),
            &uploads,
            SubmitTarget::Update { id: "p1".into() },
            "/product",
        ))
        .unwrap();

        let payload = &api.submissions()[0];
        assert_eq!(payload.image.as_deref(), Some("first.jpg"));
        assert_eq!(payload.method, SubmitMethod::Put);
        assert_eq!(payload.path, "/product/product/p1");
        assert_eq!(uploads.len(), 2);
    }

    #[test]
    fn test_backend_rejection_is_submission_failed() {
        let api = FakeApi::new()
            .with_submit_result(Err(CatalogError::SubmissionFailed("Code already used".into())));
        let nav = RecordingNavigator::default();

        let err = block_on(submit_product(
            &api,
            &nav,
            &context(),
            &widget(),
            &PendingUploads::new(),
            SubmitTarget::Create,
            "/product",
        ))
        .unwrap_err();

        assert_eq!(err, CatalogError::SubmissionFailed("Code already used".into()));
        assert!(nav.visited().is_empty());
    }

    #[test]
    fn test_transport_failure_maps_to_submission_failed() {
        let api = FakeApi::new()
            .with_submit_result(Err(CatalogError::FetchFailed("Failed to send request".into())));
        let nav = RecordingNavigator::default();

        let err = block_on(submit_product(
            &api,
            &nav,
            &context(),
            &widget(),
            &PendingUploads::new(),
            SubmitTarget::Create,
            "/product",
        ))
        .unwrap_err();

        assert!(matches!(err, CatalogError::SubmissionFailed(_)));
    }

    #[test]
    fn test_guard_blocks_reentry_until_permit_dropped() {
        let guard = SubmitGuard::new();
        let permit = guard.try_begin().unwrap();
        assert!(guard.try_begin().is_none());
        assert!(guard.clone().try_begin().is_none());

        drop(permit);
        assert!(guard.try_begin().is_some());
    }

    #[test]
    fn test_cancel_clears_uploads_and_navigates_once() {
        let nav = RecordingNavigator::default();
        let mut uploads = PendingUploads::new();
        uploads.push("front.png".to_string());
        uploads.push("back.png".to_string());

        cancel_product_form(&nav, &mut uploads, "/product");

        assert!(uploads.is_empty());
        assert_eq!(nav.visited(), vec!["/product".to_string()]);
    }
}
