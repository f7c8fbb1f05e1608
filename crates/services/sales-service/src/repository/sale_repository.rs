//! Sale repository implementation backed by process memory.

use async_trait::async_trait;

use common::MemoryTable;
use domain::{DomainError, DomainResult, Sale};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Sale repository trait for dependency injection.
///
/// Sales are never deleted.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Insert or overwrite by ID (last write wins)
    async fn put(&self, sale: Sale) -> DomainResult<Sale>;

    /// Overwrite only if the stored version still equals `expected_version`
    async fn put_if_version(&self, sale: Sale, expected_version: u64) -> DomainResult<Sale>;

    /// Find sale by ID
    async fn get_by_id(&self, id: &str) -> DomainResult<Sale>;

    /// Snapshot of every sale. Fails with `NotFound` when the store is empty.
    async fn get_all(&self) -> DomainResult<Vec<Sale>>;
}

/// Concrete in-memory implementation of SaleRepository
#[derive(Debug, Default)]
pub struct SaleStore {
    table: MemoryTable<Sale>,
}

impl SaleStore {
    /// Create new, empty repository instance
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SaleRepository for SaleStore {
    async fn put(&self, sale: Sale) -> DomainResult<Sale> {
        self.table.put(sale)
    }

    async fn put_if_version(&self, sale: Sale, expected_version: u64) -> DomainResult<Sale> {
        self.table.put_if_version(sale, expected_version)
    }

    async fn get_by_id(&self, id: &str) -> DomainResult<Sale> {
        self.table.get(id)
    }

    async fn get_all(&self) -> DomainResult<Vec<Sale>> {
        let sales = self.table.snapshot()?;
        if sales.is_empty() {
            return Err(DomainError::not_found("sales"));
        }
        Ok(sales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::SaleStatus;

    #[tokio::test]
    async fn test_get_all_on_empty_store() {
        let store = SaleStore::new();

        assert_eq!(store.get_all().await, Err(DomainError::not_found("sales")));
    }

    #[tokio::test]
    async fn test_get_all_is_a_snapshot() {
        let store = SaleStore::new();
        store
            .put(Sale::new("u1".to_string(), 10.0, SaleStatus::Pending))
            .await
            .unwrap();

        let snapshot = store.get_all().await.unwrap();
        store
            .put(Sale::new("u1".to_string(), 20.0, SaleStatus::Pending))
            .await
            .unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_put_requires_identifier() {
        let store = SaleStore::new();
        let mut sale = Sale::new("u1".to_string(), 10.0, SaleStatus::Pending);
        sale.id = String::new();

        assert_eq!(store.put(sale).await, Err(DomainError::EmptyIdentifier));
    }
}
