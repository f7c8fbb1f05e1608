//! Repository layer for data access.

mod user_repository;

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserStore};
