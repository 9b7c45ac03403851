//! Catalog resource layer
//!
//! - `api`: transport seam and its browser implementation
//! - `lifecycle`: single-entity fetch state machine
//! - `references`: lookup lists for select options
//! - `submission`: validated product -> multipart request
//! - `timer`: bounded waiting for requests

pub mod api;
pub mod error;
pub mod lifecycle;
pub mod references;
pub mod submission;
pub mod timer;

#[cfg(test)]
pub mod testing;

pub use api::{CatalogApi, HttpCatalogApi};
pub use error::CatalogError;
pub use lifecycle::{FetchLifecycle, FetchState, FetchTicket};
pub use timer::{BrowserTimer, Timer};
