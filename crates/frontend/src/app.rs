use crate::routes::AppRoutes;
use crate::shared::config::{load_config, ClientConfig};
use crate::shared::services::AppServices;
use crate::system::auth::session::Session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Invalid client config, using defaults: {:#}", e);
        ClientConfig::default()
    });
    let services = AppServices::new(config, Session::restore());
    services.navigator.init_popstate_listener();

    provide_context(services);

    view! {
        <AppRoutes />
    }
}
