//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;

use domain::{CreateUser, DomainError, DomainResult, UpdateUser, User};

use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
///
/// Soft-deleted users are invisible to lookups and updates.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and store a new active user
    async fn create_user(&self, input: CreateUser) -> DomainResult<User>;

    /// Get active user by ID (excludes soft-deleted)
    async fn get_user(&self, id: &str) -> DomainResult<User>;

    /// Apply a partial update to an active user
    async fn update_user(&self, id: &str, update: UpdateUser) -> DomainResult<User>;

    /// Soft delete user (status set to deleted, record kept)
    async fn delete_user(&self, id: &str) -> DomainResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUser) -> DomainResult<User> {
        let input = input.normalized();
        input.validate()?;

        let user = self.repo.put(User::new(input)).await.map_err(|e| {
            error!(error = %e, "failed to store user");
            e
        })?;

        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> DomainResult<User> {
        let user = self.repo.get_by_id(id).await?;
        if user.is_deleted() {
            warn!(user_id = %id, "lookup of deleted user");
            return Err(DomainError::not_found("user"));
        }
        Ok(user)
    }

    async fn update_user(&self, id: &str, update: UpdateUser) -> DomainResult<User> {
        let mut user = self.get_user(id).await?;

        // Validate every supplied field before touching the entity
        update.validate()?;

        let expected = user.version;
        if !user.apply(update) {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let user = self.repo.put_if_version(user, expected).await?;
        info!(user_id = %user.id, version = user.version, "user updated");
        Ok(user)
    }

    async fn delete_user(&self, id: &str) -> DomainResult<()> {
        // Deleted users are deleted again: no "already deleted" guard
        let mut user = self.repo.get_by_id(id).await?;
        let expected = user.version;
        user.soft_delete();

        self.repo.put_if_version(user, expected).await.map_err(|e| {
            error!(user_id = %id, error = %e, "failed to mark user as deleted");
            e
        })?;

        info!(user_id = %id, "user deleted");
        Ok(())
    }
}
