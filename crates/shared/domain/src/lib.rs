//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Both the user and sales services build on these types.

pub mod constants;
pub mod entity;
pub mod error;
pub mod report;
pub mod sale;
pub mod user;

pub use constants::*;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use report::{ReportMetadata, SalesReport};
pub use sale::{parse_status_filter, CreateSale, Sale, SaleStatus, SalesPolicy, UpdateSale};
pub use user::{CreateUser, UpdateUser, User, UserStatus};
