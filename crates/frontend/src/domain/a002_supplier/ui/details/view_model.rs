use super::model;
use contracts::domain::a002_supplier::aggregate::Supplier;
use leptos::prelude::*;

use crate::shared::catalog::{FetchLifecycle, FetchState};
use crate::shared::services::AppServices;

#[derive(Clone)]
pub struct SupplierDetailsVm {
    pub lifecycle: RwSignal<FetchLifecycle<Supplier>>,
    services: AppServices,
}

impl SupplierDetailsVm {
    pub fn new(services: AppServices) -> Self {
        Self {
            lifecycle: RwSignal::new(FetchLifecycle::new()),
            services,
        }
    }

    pub fn state(&self) -> Signal<FetchState<Supplier>> {
        let lifecycle = self.lifecycle;
        Signal::derive(move || lifecycle.with(|lc| lc.state().clone()))
    }

    /// Load by id; a later call supersedes an earlier one still in flight
    pub fn load(&self, id: String) {
        let ticket = match self.lifecycle.try_update(|lc| lc.begin(&id)) {
            Some(Ok(ticket)) => ticket,
            _ => return,
        };

        let this = self.clone();
        leptos::task::spawn_local(async move {
            let result = model::fetch_by_id(&this.services, &id).await;
            if !this
                .lifecycle
                .try_update(|lc| lc.complete(ticket, result))
                .unwrap_or(false)
            {
                log::debug!("Discarding superseded supplier response for {}", id);
            }
        });
    }
}
