use contracts::domain::a001_product::submission::SubmissionContext;

use super::storage;

/// Credentials persisted by the login flow, read once at start
///
/// Never refreshed mid-session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
    pub user_id: Option<String>,
    pub company_id: Option<String>,
}

impl Session {
    /// Restore session from localStorage
    pub fn restore() -> Self {
        let session = Self {
            access_token: storage::get_access_token(),
            user_id: storage::get_user_id(),
            company_id: storage::get_company_id(),
        };
        if session.access_token.is_none() {
            log::warn!("No access token in localStorage; catalog requests will be rejected");
        }
        session
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Acting user and company merged into every submission
    pub fn submission_context(&self) -> SubmissionContext {
        SubmissionContext {
            user_id: self.user_id.clone(),
            company_id: self.company_id.clone(),
        }
    }
}
