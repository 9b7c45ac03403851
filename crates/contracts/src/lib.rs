//! Wire contract of the catalog API shared by every client.
//!
//! - `domain::common`: envelope, reference lists, entity metadata trait
//! - `domain::a001_product`: product aggregate, form draft, validation, submission encoding
//! - `domain::a002_supplier`: supplier aggregate

pub mod domain;
