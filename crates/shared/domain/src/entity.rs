//! Identity and versioning shared by every stored entity.

use crate::sale::Sale;
use crate::user::User;

/// An entity owned by a store, keyed by an opaque identifier.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Entity name used in error messages ("user", "sale")
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Bumped on every mutation; used for compare-and-swap writes
    fn version(&self) -> u64;
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Entity for Sale {
    const KIND: &'static str = "sale";

    fn id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
