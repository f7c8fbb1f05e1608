//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// User Status
// =============================================================================

/// Status of a user that can be looked up and mutated
pub const USER_STATUS_ACTIVE: &str = "active";

/// Status of a logically deleted user (record kept in storage)
pub const USER_STATUS_DELETED: &str = "deleted";

// =============================================================================
// Sale Status
// =============================================================================

/// Initial, only mutable sale status
pub const SALE_STATUS_PENDING: &str = "pending";

/// Terminal status: sale approved
pub const SALE_STATUS_APPROVED: &str = "approved";

/// Terminal status: sale rejected
pub const SALE_STATUS_REJECTED: &str = "rejected";

// =============================================================================
// Validation
// =============================================================================

/// Names and nicknames: ASCII letters only, at least one.
pub static LETTERS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("static letters-only pattern compiles"));

/// First version assigned to a newly created entity
pub const INITIAL_VERSION: u64 = 1;
