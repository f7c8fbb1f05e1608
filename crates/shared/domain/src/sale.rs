//! Sale domain entity, its status state machine and the variant policy.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{
    INITIAL_VERSION, SALE_STATUS_APPROVED, SALE_STATUS_PENDING, SALE_STATUS_REJECTED,
};
use crate::error::{DomainError, DomainResult};

/// Sale status lifecycle.
///
/// `Pending` is the only initial and only mutable state; `Approved` and
/// `Rejected` are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Pending,
    Approved,
    Rejected,
}

impl SaleStatus {
    /// Every status, in declaration order
    pub const ALL: [SaleStatus; 3] = [
        SaleStatus::Pending,
        SaleStatus::Approved,
        SaleStatus::Rejected,
    ];

    /// Check if no further transition is allowed
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SaleStatus::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Pending => SALE_STATUS_PENDING,
            SaleStatus::Approved => SALE_STATUS_APPROVED,
            SaleStatus::Rejected => SALE_STATUS_REJECTED,
        }
    }
}

impl FromStr for SaleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SALE_STATUS_PENDING => Ok(SaleStatus::Pending),
            SALE_STATUS_APPROVED => Ok(SaleStatus::Approved),
            SALE_STATUS_REJECTED => Ok(SaleStatus::Rejected),
            other => Err(DomainError::invalid_input(format!(
                "unknown sale status '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a report status filter. The empty string means "no filter".
pub fn parse_status_filter(raw: &str) -> DomainResult<Option<SaleStatus>> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some)
}

/// Deployment-variant rules for sales.
///
/// The co-located and remote deployments disagree on the initial status set
/// and on how a request against a terminal sale is reported, so both are
/// carried explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesPolicy {
    /// Statuses a new sale is drawn from, uniformly
    pub initial_statuses: Vec<SaleStatus>,
    /// When set, a terminal sale reports a request for anything other than
    /// approved/rejected as `InvalidInput` rather than `TransactionInvalid`.
    pub strict_terminal_requests: bool,
}

impl SalesPolicy {
    /// Sales and users served by the same process.
    pub fn co_located() -> Self {
        Self {
            initial_statuses: SaleStatus::ALL.to_vec(),
            strict_terminal_requests: false,
        }
    }

    /// Sales service checking users over HTTP.
    pub fn remote() -> Self {
        Self {
            initial_statuses: vec![SaleStatus::Pending, SaleStatus::Rejected],
            strict_terminal_requests: true,
        }
    }

    /// Replace the initial status set. An empty set is rejected.
    pub fn with_initial_statuses(mut self, statuses: Vec<SaleStatus>) -> DomainResult<Self> {
        if statuses.is_empty() {
            return Err(DomainError::invalid_input(
                "initial status set must not be empty",
            ));
        }
        self.initial_statuses = statuses;
        Ok(self)
    }
}

impl Default for SalesPolicy {
    fn default() -> Self {
        Self::co_located()
    }
}

/// Sale domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Sale {
    pub id: String,
    /// Identifier of the user the sale belongs to
    pub user_id: String,
    /// Strictly positive
    pub amount: f64,
    pub status: SaleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: u64,
}

impl Sale {
    /// Create a new sale with a generated id.
    pub fn new(user_id: String, amount: f64, status: SaleStatus) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            amount,
            status,
            created_at: now,
            updated_at: now,
            version: INITIAL_VERSION,
        }
    }

    /// Move a pending sale to a terminal status.
    ///
    /// `requested` is the raw status value from the caller.
    pub fn transition(&mut self, requested: &str, policy: &SalesPolicy) -> DomainResult<()> {
        let target = requested.parse::<SaleStatus>().ok().filter(SaleStatus::is_terminal);

        if self.status.is_terminal() {
            if target.is_none() && policy.strict_terminal_requests {
                return Err(DomainError::invalid_input(format!(
                    "status must be approved or rejected, got '{}'",
                    requested
                )));
            }
            return Err(DomainError::transaction_invalid(format!(
                "sale {} is already {}",
                self.id, self.status
            )));
        }

        let target = target.ok_or_else(|| {
            DomainError::invalid_input(format!(
                "status must be approved or rejected, got '{}'",
                requested
            ))
        })?;

        self.status = target;
        self.updated_at = Utc::now();
        self.version += 1;
        Ok(())
    }
}

/// Sale creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateSale {
    #[cfg_attr(feature = "openapi", schema(example = "2f1c0d9e-5b7a-4c3e-9a43-0d6f3b2a1e77"))]
    pub user_id: String,
    /// Must be greater than zero
    #[validate(range(exclusive_min = 0.0, message = "amount must be greater than zero"))]
    #[cfg_attr(feature = "openapi", schema(example = 100.0))]
    pub amount: f64,
}

impl CreateSale {
    /// Validate the amount, including values JSON cannot carry (NaN, inf).
    pub fn check_amount(&self) -> DomainResult<()> {
        if !self.amount.is_finite() {
            return Err(DomainError::invalid_input("amount must be a finite number"));
        }
        self.validate()?;
        Ok(())
    }
}

/// Sale status update data transfer object
///
/// The status stays a raw string: what an unknown value means depends on the
/// sale's current status and the policy.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateSale {
    /// Requested status: approved or rejected
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "approved"))]
    pub status: String,
}
