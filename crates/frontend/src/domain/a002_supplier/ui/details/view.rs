use super::view_model::SupplierDetailsVm;
use contracts::domain::a002_supplier::aggregate::{BalanceState, Supplier};
use contracts::domain::common::display_or_unset;
use leptos::prelude::*;
use thaw::*;

use crate::shared::catalog::FetchState;
use crate::shared::format::{format_datetime, format_money};
use crate::shared::services::use_services;

#[component]
pub fn SupplierDetails(id: String) -> impl IntoView {
    let vm = SupplierDetailsVm::new(use_services());
    vm.load(id);
    let state = vm.state();

    view! {
        <div class="details-container supplier-details">
            <div class="modal-header">
                <h3 class="modal-title">"Supplier"</h3>
            </div>
            <div class="modal-body">
                {move || match state.get() {
                    FetchState::Idle | FetchState::Loading => view! { <Spinner /> }.into_any(),
                    FetchState::Failed(e) => view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            {format!("Failed to load supplier: {}", e)}
                        </MessageBar>
                    }
                    .into_any(),
                    FetchState::Ready(supplier) => view! { <SupplierCard supplier=supplier /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn SupplierCard(supplier: Supplier) -> impl IntoView {
    let (balance_label, badge_color) = match supplier.balance_state() {
        BalanceState::Owed => ("Owed", BadgeColor::Danger),
        BalanceState::Settled => ("Settled", BadgeColor::Informative),
        BalanceState::Credit => ("Credit", BadgeColor::Success),
    };

    view! {
        <div class="details-section">
            <h4 class="details-section__title">{supplier.name.clone()}</h4>
            <div class="details-grid--3col">
                <Field label="Company" value=display_or_unset(supplier.company_name.as_deref()) />
                <Field label="Email" value=display_or_unset(supplier.email.as_deref()) />
                <Field label="Phone" value=display_or_unset(supplier.phone.as_deref()) />
                <Field label="Address" value=display_or_unset(supplier.address.as_deref()) />
                <Field label="Status" value=supplier.status.as_str().to_string() />
                <Field label="Registered" value=format_datetime(supplier.registered_at.as_ref()) />
                <div class="form__group">
                    <label class="form__label">"Balance"</label>
                    <span>
                        {format_money(supplier.balance)}
                        " "
                        <Badge appearance=BadgeAppearance::Tint color=badge_color>{balance_label}</Badge>
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <span>{value}</span>
        </div>
    }
}
