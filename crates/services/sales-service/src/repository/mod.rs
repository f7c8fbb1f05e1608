//! Repository layer for data access.

mod sale_repository;

#[cfg(any(test, feature = "test-utils"))]
pub use sale_repository::MockSaleRepository;
pub use sale_repository::{SaleRepository, SaleStore};
