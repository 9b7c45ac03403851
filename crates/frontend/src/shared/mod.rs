pub mod api_utils;
pub mod catalog;
pub mod config;
pub mod format;
pub mod navigation;
pub mod services;
