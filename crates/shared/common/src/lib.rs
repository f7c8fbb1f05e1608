//! Common utilities shared across both services.
//!
//! This crate provides:
//! - Unified error handling for HTTP
//! - Configuration structures
//! - JSON body extractors
//! - The in-memory entity table
//! - The `/ping` liveness route

pub mod config;
pub mod error;
pub mod extract;
pub mod health;
pub mod memory;

pub use config::*;
pub use error::{AppError, AppResult};
pub use extract::{JsonBody, ValidatedJson};
pub use health::health_routes;
pub use memory::MemoryTable;
