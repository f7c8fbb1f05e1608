//! HTTP handlers.

pub mod sale_handler;

pub use sale_handler::sale_routes;
