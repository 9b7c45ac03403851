//! ViewModel for the product create/edit form
//!
//! Form fields are individual RwSignals for THAW two-way binding. The fetched
//! product lives in a [`FetchLifecycle`]; the draft is only seeded from it when
//! the result is still current.

use super::model;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::form::{FieldErrors, ProductDraft, ProductField};
use contracts::domain::a001_product::submission::{PendingUploads, SubmitTarget};
use contracts::domain::common::{CatalogEntity, ReferenceItem, ReferenceList};
use leptos::prelude::*;

use crate::routes::PRODUCT_LIST_PATH;
use crate::shared::catalog::references::ReferenceOptions;
use crate::shared::catalog::submission::{cancel_product_form, SubmitGuard};
use crate::shared::catalog::{CatalogError, FetchLifecycle};
use crate::shared::services::AppServices;

#[derive(Clone)]
pub struct ProductDetailsVm {
    // === Form fields ===
    pub id: RwSignal<Option<String>>,
    pub name: RwSignal<String>,
    pub code: RwSignal<String>,
    pub category: RwSignal<String>,
    pub subcategory: RwSignal<String>,
    pub supplier: RwSignal<String>,
    pub unit: RwSignal<String>,
    pub purchase_price: RwSignal<String>,
    pub sale_price: RwSignal<String>,
    pub warranty: RwSignal<String>,
    pub status: RwSignal<String>,
    pub image: RwSignal<String>,

    // === Attachments ===
    pub uploads: RwSignal<PendingUploads<web_sys::File>, LocalStorage>,

    // === Reference data (select options) ===
    pub options: RwSignal<ReferenceOptions>,

    // === Fetch + UI state ===
    pub lifecycle: RwSignal<FetchLifecycle<Product>>,
    pub field_errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,

    guard: SubmitGuard,
    services: AppServices,
}

impl ProductDetailsVm {
    pub fn new(services: AppServices) -> Self {
        let vm = Self {
            id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            code: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            subcategory: RwSignal::new(String::new()),
            supplier: RwSignal::new(String::new()),
            unit: RwSignal::new(String::new()),
            purchase_price: RwSignal::new(String::new()),
            sale_price: RwSignal::new(String::new()),
            warranty: RwSignal::new(String::new()),
            status: RwSignal::new(String::new()),
            image: RwSignal::new(String::new()),

            uploads: RwSignal::new_local(PendingUploads::new()),
            options: RwSignal::new(ReferenceOptions::default()),

            lifecycle: RwSignal::new(FetchLifecycle::new()),
            field_errors: RwSignal::new(FieldErrors::default()),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),

            guard: SubmitGuard::new(),
            services,
        };
        vm.from_draft(&ProductDraft::for_create());
        vm
    }

    // === Derived signals ===

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let id = self.id;
        Signal::derive(move || id.get().is_some())
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let lifecycle = self.lifecycle;
        Signal::derive(move || lifecycle.with(|lc| lc.is_loading()))
    }

    /// Fetch failure message, if the current load failed
    pub fn load_error(&self) -> Signal<Option<String>> {
        let lifecycle = self.lifecycle;
        Signal::derive(move || lifecycle.with(|lc| lc.error().map(|e| e.to_string())))
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let saving = self.saving;
        let loading = self.is_loading();
        Signal::derive(move || saving.get() || loading.get())
    }

    /// Error message for one field from the last submit attempt
    pub fn field_error(&self, field: ProductField) -> Signal<Option<String>> {
        let field_errors = self.field_errors;
        Signal::derive(move || field_errors.with(|errors| errors.get(field).map(str::to_string)))
    }

    pub fn options_for(&self, list: ReferenceList) -> Signal<Vec<ReferenceItem>> {
        let options = self.options;
        Signal::derive(move || options.with(|o| o.get(list).to_vec()))
    }

    // === Data loading ===

    /// Resolve every reference list; each one lands on its own
    pub fn load_references(&self) {
        for list in ReferenceList::ALL {
            let this = self.clone();
            leptos::task::spawn_local(async move {
                let items = model::fetch_reference_list(&this.services, list).await;
                this.options.update(|o| o.set(list, items));
            });
        }
    }

    /// Load a product for editing, superseding any load still in flight
    pub fn load(&self, id: String) {
        self.id.set(Some(id.clone()));
        self.error.set(None);

        let ticket = match self.lifecycle.try_update(|lc| lc.begin(&id)) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                log::warn!("Product load rejected: {}", e);
                return;
            }
            None => return,
        };

        let this = self.clone();
        leptos::task::spawn_local(async move {
            let result = model::fetch_by_id(&this.services, &id).await;
            let fetched = result.is_ok();
            match this.lifecycle.try_update(|lc| lc.settle(ticket, result)).flatten() {
                Some(product) => this.from_product(&product),
                None if fetched => {
                    log::debug!("Discarding superseded product response for {}", id);
                }
                None => {}
            }
        });
    }

    // === Commands ===

    pub fn save(&self) {
        let Some(permit) = self.guard.try_begin() else {
            log::debug!("Submit ignored, another one is in flight");
            return;
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);
        this.field_errors.set(FieldErrors::default());

        let draft = this.to_draft();
        let target = match this.id.get_untracked() {
            Some(id) => SubmitTarget::Update { id },
            None => SubmitTarget::Create,
        };
        let uploads = this.uploads.get_untracked();

        leptos::task::spawn_local(async move {
            let _permit = permit;
            match model::save_form(&this.services, &draft, &uploads, target).await {
                Ok(()) => {
                    this.uploads.update(PendingUploads::clear);
                }
                Err(CatalogError::ValidationFailed(errors)) => {
                    this.field_errors.set(errors);
                }
                Err(e) => {
                    this.error.set(Some(e.to_string()));
                }
            }
            this.saving.set(false);
        });
    }

    /// Drop the draft and its attachments and leave the form
    pub fn cancel(&self) {
        self.field_errors.set(FieldErrors::default());
        let mut uploads = self.uploads.try_update(std::mem::take).unwrap_or_default();
        cancel_product_form(&self.services.navigator, &mut uploads, PRODUCT_LIST_PATH);
    }

    pub fn add_upload(&self, file: web_sys::File) {
        self.uploads.update(|u| u.push(file));
    }

    pub fn remove_upload(&self, index: usize) {
        self.uploads.update(|u| {
            u.remove(index);
        });
    }

    // === Private helpers ===

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.get_untracked(),
            code: self.code.get_untracked(),
            category: self.category.get_untracked(),
            subcategory: self.subcategory.get_untracked(),
            supplier: self.supplier.get_untracked(),
            unit: self.unit.get_untracked(),
            purchase_price: self.purchase_price.get_untracked(),
            sale_price: self.sale_price.get_untracked(),
            warranty: self.warranty.get_untracked(),
            status: self.status.get_untracked(),
            image: self.image.get_untracked(),
        }
    }

    fn from_draft(&self, draft: &ProductDraft) {
        self.name.set(draft.name.clone());
        self.code.set(draft.code.clone());
        self.category.set(draft.category.clone());
        self.subcategory.set(draft.subcategory.clone());
        self.supplier.set(draft.supplier.clone());
        self.unit.set(draft.unit.clone());
        self.purchase_price.set(draft.purchase_price.clone());
        self.sale_price.set(draft.sale_price.clone());
        self.warranty.set(draft.warranty.clone());
        self.status.set(draft.status.clone());
        self.image.set(draft.image.clone());
    }

    fn from_product(&self, product: &Product) {
        self.id.set(Some(product.entity_id().to_string()));
        self.from_draft(&ProductDraft::from_product(product));
    }
}
