use crate::domain::a001_product::ui::details::ProductDetails;
use crate::domain::a002_supplier::ui::details::SupplierDetails;
use crate::shared::navigation::Navigator;
use crate::shared::services::use_services;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    ProductList,
    ProductNew,
    ProductEdit { id: String },
    SupplierDetails { id: String },
    NotFound,
}

/// Map a location path onto a page
pub fn parse_route(path: &str) -> AppRoute {
    let segments: Vec<&str> = path
        .split('?')
        .next()
        .unwrap_or_default()
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match segments.as_slice() {
        ["product"] => AppRoute::ProductList,
        ["product", "new"] => AppRoute::ProductNew,
        ["product", id, "edit"] => AppRoute::ProductEdit {
            id: decode_segment(id),
        },
        ["supplier", id] => AppRoute::SupplierDetails {
            id: decode_segment(id),
        },
        _ => AppRoute::NotFound,
    }
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

#[component]
fn ProductLanding() -> impl IntoView {
    let navigator = use_services().navigator;

    view! {
        <div class="details-container">
            <h3>"Products"</h3>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| navigator.navigate_to("/product/new")
            >
                "New product"
            </Button>
        </div>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="details-container">
            <h3>"Page not found"</h3>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let services = use_services();
    let path = services.navigator.path;
    let authenticated = services.session.is_authenticated();
    let route = Memo::new(move |_| parse_route(&path.get()));

    view! {
        <Show when=move || !authenticated>
            <MessageBar intent=MessageBarIntent::Warning>
                "You are not signed in. Catalog requests will be rejected."
            </MessageBar>
        </Show>
        {move || match route.get() {
            AppRoute::ProductList => view! { <ProductLanding /> }.into_any(),
            AppRoute::ProductNew => view! { <ProductDetails id=None /> }.into_any(),
            AppRoute::ProductEdit { id } => view! { <ProductDetails id=Some(id) /> }.into_any(),
            AppRoute::SupplierDetails { id } => view! { <SupplierDetails id=id /> }.into_any(),
            AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
        }}
    }
}
