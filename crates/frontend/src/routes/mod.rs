pub mod routes;

pub use routes::{parse_route, AppRoute, AppRoutes};

/// Where the product form returns after save or cancel
pub const PRODUCT_LIST_PATH: &str = "/product";
