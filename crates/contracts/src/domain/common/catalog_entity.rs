use serde::de::DeserializeOwned;

/// Catalog entity fetched by identifier
///
/// Describes where an entity lives on the backend. The collection path is the
/// create target, the resource path (collection + id) is the fetch/update target.
pub trait CatalogEntity: DeserializeOwned + Clone + 'static {
    /// Collection path, e.g. "/product/product"
    fn collection_path() -> &'static str;

    /// Name for UI (singular, e.g. "Product")
    fn element_name() -> &'static str;

    /// Identifier of this record as sent by the backend
    fn entity_id(&self) -> &str;

    /// Resource path for a single record; the identifier is percent-encoded
    fn resource_path(id: &str) -> String {
        format!("{}/{}", Self::collection_path(), urlencoding::encode(id))
    }
}
