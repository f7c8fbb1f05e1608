//! User repository implementation backed by process memory.

use async_trait::async_trait;

use common::MemoryTable;
use domain::{DomainResult, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups return soft-deleted records too; hiding them is the service's job.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or overwrite by ID (last write wins)
    async fn put(&self, user: User) -> DomainResult<User>;

    /// Overwrite only if the stored version still equals `expected_version`
    async fn put_if_version(&self, user: User, expected_version: u64) -> DomainResult<User>;

    /// Find user by ID including soft-deleted
    async fn get_by_id(&self, id: &str) -> DomainResult<User>;

    /// Permanently remove user from the store (hard delete)
    async fn hard_delete(&self, id: &str) -> DomainResult<()>;
}

/// Concrete in-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct UserStore {
    table: MemoryTable<User>,
}

impl UserStore {
    /// Create new, empty repository instance
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn put(&self, user: User) -> DomainResult<User> {
        self.table.put(user)
    }

    async fn put_if_version(&self, user: User, expected_version: u64) -> DomainResult<User> {
        self.table.put_if_version(user, expected_version)
    }

    async fn get_by_id(&self, id: &str) -> DomainResult<User> {
        self.table.get(id)
    }

    async fn hard_delete(&self, id: &str) -> DomainResult<()> {
        self.table.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{CreateUser, DomainError};

    fn user() -> User {
        User::new(CreateUser {
            name: "Ana".to_string(),
            address: "Main St".to_string(),
            nickname: None,
        })
    }

    #[tokio::test]
    async fn test_soft_deleted_user_still_readable() {
        let store = UserStore::new();
        let mut stored = store.put(user()).await.unwrap();
        stored.soft_delete();
        store.put(stored.clone()).await.unwrap();

        let found = store.get_by_id(&stored.id).await.unwrap();
        assert!(found.is_deleted());
    }

    #[tokio::test]
    async fn test_hard_delete_removes_record() {
        let store = UserStore::new();
        let stored = store.put(user()).await.unwrap();

        store.hard_delete(&stored.id).await.unwrap();
        assert_eq!(
            store.get_by_id(&stored.id).await,
            Err(DomainError::not_found("user"))
        );
        assert!(store.hard_delete(&stored.id).await.is_err());
    }
}
