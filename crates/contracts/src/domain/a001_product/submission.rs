//! Multipart encoding of a validated product
//!
//! Pure: builds the payload description, the transport layer turns it into a request.
//! No validation happens here.

use super::aggregate::Product;
use super::form::ValidatedProduct;
use crate::domain::common::CatalogEntity;

/// Only one image is sent per submission
pub const MAX_ATTACHMENTS: usize = 1;

/// Multipart part name of the attached image
pub const IMAGE_PART: &str = "image";

// ============================================================================
// Pending uploads
// ============================================================================

/// Files attached to the form, in the order they were picked
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUploads<A> {
    items: Vec<A>,
}

impl<A> Default for PendingUploads<A> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<A> PendingUploads<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: A) {
        self.items.push(item);
    }

    /// Remove the attachment at `index`; out-of-range indexes are ignored
    pub fn remove(&mut self, index: usize) -> Option<A> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.items.iter()
    }

    /// Attachments that fit under [`MAX_ATTACHMENTS`]
    pub fn submitted(&self) -> &[A] {
        &self.items[..self.items.len().min(MAX_ATTACHMENTS)]
    }

    /// Number of attachments that will not be sent
    pub fn overflow(&self) -> usize {
        self.items.len().saturating_sub(MAX_ATTACHMENTS)
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Acting user and company, merged into every submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionContext {
    pub user_id: Option<String>,
    pub company_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMethod {
    Post,
    Put,
}

/// Everything needed to issue the multipart request
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPayload<A> {
    pub method: SubmitMethod,
    pub path: String,
    pub fields: Vec<(&'static str, String)>,
    pub image: Option<A>,
    /// Attachments over the cap, not included in the request
    pub dropped_attachments: usize,
}

impl<A> MultipartPayload<A> {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(n, _)| *n).collect()
    }
}

/// Build the create/update payload for a validated product
///
/// The acting user fills both `regby` and `upby`, on create and on update alike.
pub fn encode_product<A: Clone>(
    product: &ValidatedProduct,
    context: &SubmissionContext,
    uploads: &PendingUploads<A>,
    target: &SubmitTarget,
) -> MultipartPayload<A> {
    let mut fields = product.text_fields();

    if let Some(user_id) = &context.user_id {
        fields.push(("regby", user_id.clone()));
        fields.push(("upby", user_id.clone()));
    }
    if let Some(company_id) = &context.company_id {
        fields.push(("compid", company_id.clone()));
    }

    let (method, path) = match target {
        SubmitTarget::Create => (SubmitMethod::Post, Product::collection_path().to_string()),
        SubmitTarget::Update { id } => (SubmitMethod::Put, Product::resource_path(id)),
    };

    MultipartPayload {
        method,
        path,
        fields,
        image: uploads.submitted().first().cloned(),
        dropped_attachments: uploads.overflow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::form::{validate, ProductDraft};

    fn validated() -> ValidatedProduct {
        validate(&ProductDraft {
            name: "Widget".into(),
            purchase_price: "10".into(),
            status: "active".into(),
            supplier: "S1".into(),
            ..ProductDraft::default()
        })
        .unwrap()
    }

    fn context() -> SubmissionContext {
        SubmissionContext {
            user_id: Some("U1".into()),
            company_id: Some("C1".into()),
        }
    }

    #[test]
    fn test_create_payload_fields() {
        let payload = encode_product::<&str>(
            &validated(),
            &context(),
            &PendingUploads::new(),
            &SubmitTarget::Create,
        );
        assert_eq!(payload.method, SubmitMethod::Post);
        assert_eq!(payload.path, "/product/product");

        let mut names = payload.field_names();
        names.sort_unstable();
        assert_eq!(
            names,
            vec!["compid", "name", "purchasePrice", "regby", "status", "supplier", "upby"]
        );
        assert_eq!(payload.field("regby"), Some("U1"));
        assert_eq!(payload.field("upby"), Some("U1"));
        assert_eq!(payload.image, None);
    }

    #[test]
    fn test_update_payload_targets_resource() {
        let payload = encode_product::<&str>(
            &validated(),
            &context(),
            &PendingUploads::new(),
            &SubmitTarget::Update { id: "p1".into() },
        );
        assert_eq!(payload.method, SubmitMethod::Put);
        assert_eq!(payload.path, "/product/product/p1");
        assert_eq!(payload.field("regby"), Some("U1"));
    }

    #[test]
    fn test_missing_context_fields_are_omitted() {
        let payload = encode_product::<&str>(
            &validated(),
            &SubmissionContext::default(),
            &PendingUploads::new(),
            &SubmitTarget::Create,
        );
        assert_eq!(payload.field("regby"), None);
        assert_eq!(payload.field("upby"), None);
        assert_eq!(payload.field("compid"), None);
    }

    #[test]
    fn test_only_first_image_is_attached() {
        let mut uploads = PendingUploads::new();
        uploads.push("front.png");
        uploads.push("back.png");

        let payload = encode_product(&validated(), &context(), &uploads, &SubmitTarget::Create);
        assert_eq!(payload.image, Some("front.png"));
        assert_eq!(payload.dropped_attachments, 1);
    }

    #[test]
    fn test_pending_uploads_remove_by_index() {
        let mut uploads = PendingUploads::new();
        uploads.push("a");
        uploads.push("b");
        uploads.push("c");
        assert_eq!(uploads.remove(1), Some("b"));
        assert_eq!(uploads.remove(5), None);
        assert_eq!(uploads.iter().copied().collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(uploads.submitted(), &["a"]);
        uploads.clear();
        assert!(uploads.is_empty());
        assert!(uploads.submitted().is_empty());
        assert_eq!(uploads.overflow(), 0);
    }
}
