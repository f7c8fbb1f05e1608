//! User-existence checks used when registering a sale.

#[cfg(feature = "embedded")]
mod local_directory;
mod user_directory;

#[cfg(feature = "embedded")]
pub use local_directory::LocalUserDirectory;
#[cfg(any(test, feature = "test-utils"))]
pub use user_directory::MockUserDirectory;
pub use user_directory::{HttpUserDirectory, UserDirectory};
