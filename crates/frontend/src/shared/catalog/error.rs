use contracts::domain::a001_product::form::FieldErrors;
use thiserror::Error;

/// Catalog layer errors
///
/// Every variant is recoverable and reported as state; none of them is fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Identifier is required")]
    InvalidIdentifier,

    #[error("Failed to load: {0}")]
    FetchFailed(String),

    #[error("Request timed out after {after_ms} ms")]
    TimedOut { after_ms: u32 },

    #[error("Validation failed: {0}")]
    ValidationFailed(FieldErrors),

    #[error("Failed to save: {0}")]
    SubmissionFailed(String),

    #[error("Not authenticated")]
    NotAuthenticated,
}

impl CatalogError {
    /// Per-field messages when the error came from validation
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CatalogError::ValidationFailed(errors) => Some(errors),
            _ => None,
        }
    }

    /// Turn a fetch-side failure into a submission failure, keeping the message
    pub fn into_submission(self) -> Self {
        match self {
            CatalogError::FetchFailed(msg) => CatalogError::SubmissionFailed(msg),
            CatalogError::TimedOut { after_ms } => {
                CatalogError::SubmissionFailed(format!("request timed out after {} ms", after_ms))
            }
            other => other,
        }
    }
}
