//! Application-wide services provided through Leptos context

use leptos::prelude::*;

use super::api_utils::api_base;
use super::catalog::HttpCatalogApi;
use super::config::ClientConfig;
use super::navigation::HistoryNavigator;
use crate::system::auth::session::Session;

#[derive(Clone)]
pub struct AppServices {
    pub api: HttpCatalogApi,
    pub config: ClientConfig,
    pub navigator: HistoryNavigator,
    pub session: Session,
}

impl AppServices {
    /// Build services from config and the session restored at start
    pub fn new(config: ClientConfig, session: Session) -> Self {
        let api = HttpCatalogApi::new(api_base(&config.api), session.access_token.clone());
        Self {
            api,
            config,
            navigator: HistoryNavigator::new(),
            session,
        }
    }

    pub fn timeout_ms(&self) -> u32 {
        self.config.fetch.timeout_ms
    }
}

/// Hook to access app services
pub fn use_services() -> AppServices {
    use_context::<AppServices>().expect("AppServices not provided in component tree")
}
