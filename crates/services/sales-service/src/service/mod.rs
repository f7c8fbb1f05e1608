//! Service layer for business logic.

mod sale_service;
mod status_picker;

#[cfg(any(test, feature = "test-utils"))]
pub use sale_service::MockSaleService;
pub use sale_service::{SaleManager, SaleService};
pub use status_picker::{FixedStatusPicker, RandomStatusPicker, StatusPicker};
