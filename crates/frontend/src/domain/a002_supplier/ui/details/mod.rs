//! Read-only supplier card

mod model;
mod view;
mod view_model;

pub use view::SupplierDetails;
pub use view_model::SupplierDetailsVm;
