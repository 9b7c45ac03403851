//! Product create/edit form
//!
//! - model.rs: catalog calls (fetch, reference lists, submit)
//! - view_model.rs: form state and commands
//! - view.rs: Leptos components

mod model;
mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsVm;
