//! In-process user check for the co-located deployment.

use std::sync::Arc;

use async_trait::async_trait;

use domain::{DomainError, DomainResult};
use user_service_lib::service::UserService;

use super::UserDirectory;

/// Resolves users through the user service running in the same process.
pub struct LocalUserDirectory {
    users: Arc<dyn UserService>,
}

impl LocalUserDirectory {
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for LocalUserDirectory {
    async fn ensure_user(&self, user_id: &str) -> DomainResult<()> {
        match self.users.get_user(user_id).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Err(DomainError::user_not_found(user_id)),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::CreateUser;

    #[tokio::test]
    async fn test_active_deleted_and_missing_users() {
        let users = user_service_lib::in_memory_service();
        let directory = LocalUserDirectory::new(users.clone());

        let ana = users
            .create_user(CreateUser {
                name: "Ana".to_string(),
                address: "Main St".to_string(),
                nickname: None,
            })
            .await
            .unwrap();
        assert_eq!(directory.ensure_user(&ana.id).await, Ok(()));

        users.delete_user(&ana.id).await.unwrap();
        assert_eq!(
            directory.ensure_user(&ana.id).await,
            Err(DomainError::user_not_found(ana.id.clone()))
        );
        assert_eq!(
            directory.ensure_user("missing").await,
            Err(DomainError::user_not_found("missing"))
        );
    }
}
