use super::view_model::ProductDetailsVm;
use contracts::domain::a001_product::form::ProductField;
use contracts::domain::a001_product::submission::MAX_ATTACHMENTS;
use contracts::domain::common::{ReferenceItem, ReferenceList, NOT_SET};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::shared::format::format_datetime;
use crate::shared::services::use_services;

/// Product form; `id` switches between create and edit mode
#[component]
pub fn ProductDetails(id: Option<String>) -> impl IntoView {
    let vm = ProductDetailsVm::new(use_services());

    vm.load_references();
    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    view! {
        <div class="details-container product-details">
            <Header vm=vm.clone() />

            <div class="modal-body">
                <ErrorDisplay vm=vm.clone() />
                <ProductSummary vm=vm.clone() />
                <Show
                    when={
                        let loading = vm.is_loading();
                        move || !loading.get()
                    }
                    fallback=|| view! { <Spinner /> }
                >
                    <GeneralSection vm=vm.clone() />
                    <PricingSection vm=vm.clone() />
                    <ImageSection vm=vm.clone() />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn Header(vm: ProductDetailsVm) -> impl IntoView {
    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();
    let saving = vm.saving;

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.save()
    };
    let handle_cancel = {
        let vm = vm.clone();
        move |_| vm.cancel()
    };

    view! {
        <div class="modal-header">
            <h3 class="modal-title">
                {move || if is_edit_mode.get() { "Edit product" } else { "New product" }}
            </h3>
            <div class="modal-header-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_save
                    disabled=is_save_disabled
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=handle_cancel>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn ErrorDisplay(vm: ProductDetailsVm) -> impl IntoView {
    let error = vm.error;
    let load_error = vm.load_error();

    view! {
        {move || load_error.get().map(|e| view! {
            <MessageBar intent=MessageBarIntent::Error>
                {format!("Failed to load product: {}", e)}
            </MessageBar>
        })}
        {move || error.get().map(|e| view! {
            <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
        })}
    }
}

/// Stored values of the product being edited, as the backend returned them
#[component]
fn ProductSummary(vm: ProductDetailsVm) -> impl IntoView {
    let lifecycle = vm.lifecycle;

    view! {
        {move || lifecycle.with(|lc| lc.data().cloned()).map(|product| view! {
            <div class="details-section product-summary">
                <div class="details-grid--3col">
                    <SummaryItem label="Category" value=product.category_label() />
                    <SummaryItem label="Supplier" value=product.supplier_label() />
                    <SummaryItem label="Unit" value=product.unit_label() />
                    <SummaryItem label="Sale price" value=product.sale_price_label() />
                    <SummaryItem label="Created" value=format_datetime(product.created_at.as_ref()) />
                    <SummaryItem label="Updated" value=format_datetime(product.updated_at.as_ref()) />
                </div>
            </div>
        })}
    }
}

#[component]
fn SummaryItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="form__group">
            <span class="form__label">{label}</span>
            <span>{value}</span>
        </div>
    }
}

/// Message under an input after a failed submit
#[component]
fn FieldError(vm: ProductDetailsVm, field: ProductField) -> impl IntoView {
    let message = vm.field_error(field);
    view! {
        {move || message.get().map(|m| view! {
            <span class="form__error">{format!("{} {}", field.wire_name(), m)}</span>
        })}
    }
}

/// Native select over one reference list; an empty list renders "No options"
#[component]
fn ReferenceSelect(value: RwSignal<String>, options: Signal<Vec<ReferenceItem>>) -> impl IntoView {
    view! {
        <select
            class="form__select"
            prop:value=move || value.get()
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            <option value="">{NOT_SET}</option>
            {move || options.with(Vec::is_empty).then(|| view! {
                <option value="" disabled=true>"No options"</option>
            })}
            <For
                each=move || options.get()
                key=|item| item.id.clone()
                children=move |item: ReferenceItem| {
                    let selected = {
                        let id = item.id.clone();
                        move || value.get() == id
                    };
                    view! {
                        <option value=item.id.clone() selected=selected>{item.label}</option>
                    }
                }
            />
        </select>
    }
}

#[component]
fn GeneralSection(vm: ProductDetailsVm) -> impl IntoView {
    let status = vm.status;

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"General"</h4>
            <div class="details-grid--3col">
                <div class="form__group" style="grid-column: 1 / -1;">
                    <label class="form__label">"Name *"</label>
                    <Input value=vm.name placeholder="Product name" />
                    <FieldError vm=vm.clone() field=ProductField::Name />
                </div>

                <div class="form__group">
                    <label class="form__label">"Code"</label>
                    <Input value=vm.code placeholder="Optional" />
                    <FieldError vm=vm.clone() field=ProductField::Code />
                </div>

                <div class="form__group">
                    <label class="form__label">"Category"</label>
                    <ReferenceSelect
                        value=vm.category
                        options=vm.options_for(ReferenceList::Categories)
                    />
                </div>

                <div class="form__group">
                    <label class="form__label">"Subcategory"</label>
                    <Input value=vm.subcategory placeholder="Optional, numeric" />
                    <FieldError vm=vm.clone() field=ProductField::Subcategory />
                </div>

                <div class="form__group">
                    <label class="form__label">"Supplier *"</label>
                    <ReferenceSelect
                        value=vm.supplier
                        options=vm.options_for(ReferenceList::Suppliers)
                    />
                    <FieldError vm=vm.clone() field=ProductField::Supplier />
                </div>

                <div class="form__group">
                    <label class="form__label">"Unit"</label>
                    <ReferenceSelect value=vm.unit options=vm.options_for(ReferenceList::Units) />
                </div>

                <div class="form__group">
                    <label class="form__label">"Warranty"</label>
                    <Input value=vm.warranty placeholder="Optional" />
                    <FieldError vm=vm.clone() field=ProductField::Warranty />
                </div>

                <div class="form__group">
                    <label class="form__label">"Status *"</label>
                    <select
                        class="form__select"
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        <option value="active">"Active"</option>
                        <option value="inactive">"Inactive"</option>
                    </select>
                    <FieldError vm=vm.clone() field=ProductField::Status />
                </div>
            </div>
        </div>
    }
}

#[component]
fn PricingSection(vm: ProductDetailsVm) -> impl IntoView {
    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Pricing"</h4>
            <div class="details-grid--3col">
                <div class="form__group">
                    <label class="form__label">"Purchase price *"</label>
                    <Input value=vm.purchase_price placeholder="0.00" />
                    <FieldError vm=vm.clone() field=ProductField::PurchasePrice />
                </div>
                <div class="form__group">
                    <label class="form__label">"Sale price"</label>
                    <Input value=vm.sale_price placeholder=NOT_SET />
                    <FieldError vm=vm.clone() field=ProductField::SalePrice />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ImageSection(vm: ProductDetailsVm) -> impl IntoView {
    let handle_file_select = {
        let vm = vm.clone();
        move |ev: web_sys::Event| {
            let input = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
            let Some(input) = input else {
                return;
            };
            if let Some(files) = input.files() {
                for index in 0..files.length() {
                    if let Some(file) = files.get(index) {
                        vm.add_upload(file);
                    }
                }
            }
            input.set_value("");
        }
    };

    let uploads = vm.uploads;
    let vm_list = vm.clone();

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Image"</h4>
            <div class="form__group">
                <label class="form__label">"Image path"</label>
                <Input value=vm.image placeholder="Optional" />
                <FieldError vm=vm.clone() field=ProductField::Image />
            </div>

            <div class="form__group">
                <input type="file" accept="image/*" multiple=true on:change=handle_file_select />
                <span class="form__hint">
                    {format!("Only the first {} attached image is sent with the product", MAX_ATTACHMENTS)}
                </span>
            </div>

            <ul class="upload-list">
                {move || {
                    uploads.with(|u| {
                        u.iter()
                            .enumerate()
                            .map(|(index, file)| {
                                let vm = vm_list.clone();
                                let name = file.name();
                                let dropped = index >= MAX_ATTACHMENTS;
                                view! {
                                    <li class:upload-list__item--dropped=dropped>
                                        <span>{name}</span>
                                        {dropped.then(|| view! { <span class="form__hint">" (not sent)"</span> })}
                                        <Button
                                            appearance=ButtonAppearance::Transparent
                                            size=ButtonSize::Small
                                            on_click=move |_| vm.remove_upload(index)
                                        >
                                            "Remove"
                                        </Button>
                                    </li>
                                }
                            })
                            .collect_view()
                    })
                }}
            </ul>
        </div>
    }
}
