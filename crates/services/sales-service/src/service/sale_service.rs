//! Sale service - Handles sale registration, status changes and reports.
//!
//! SOLID (SRP): Handles sale-related use cases only.
//! User existence is delegated to a `UserDirectory`.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use domain::{
    parse_status_filter, CreateSale, DomainResult, Sale, SalesPolicy, SalesReport, UpdateSale,
};

use crate::client::UserDirectory;
use crate::repository::SaleRepository;
use crate::service::{RandomStatusPicker, StatusPicker};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Sale service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SaleService: Send + Sync {
    /// Register a sale for an existing user
    async fn create_sale(&self, input: CreateSale) -> DomainResult<Sale>;

    /// Get sale by ID
    async fn get_sale(&self, id: &str) -> DomainResult<Sale>;

    /// Report on a user's sales. An empty `status` means no filter.
    async fn get_sales_report(&self, user_id: &str, status: &str) -> DomainResult<SalesReport>;

    /// Move a pending sale to approved or rejected
    async fn update_sale(&self, id: &str, update: UpdateSale) -> DomainResult<Sale>;
}

/// Concrete implementation of SaleService.
pub struct SaleManager {
    repo: Arc<dyn SaleRepository>,
    users: Arc<dyn UserDirectory>,
    picker: Arc<dyn StatusPicker>,
    policy: SalesPolicy,
}

impl SaleManager {
    /// Create new sale service with a random initial status picker
    pub fn new(
        repo: Arc<dyn SaleRepository>,
        users: Arc<dyn UserDirectory>,
        policy: SalesPolicy,
    ) -> Self {
        Self {
            repo,
            users,
            picker: Arc::new(RandomStatusPicker),
            policy,
        }
    }

    /// Replace the initial status picker
    pub fn with_picker(mut self, picker: Arc<dyn StatusPicker>) -> Self {
        self.picker = picker;
        self
    }
}

#[async_trait]
impl SaleService for SaleManager {
    async fn create_sale(&self, input: CreateSale) -> DomainResult<Sale> {
        self.users.ensure_user(&input.user_id).await?;
        input.check_amount()?;

        let status = self.picker.pick(&self.policy.initial_statuses)?;
        let sale = Sale::new(input.user_id, input.amount, status);

        let sale = self.repo.put(sale).await.map_err(|e| {
            error!(error = %e, "failed to store sale");
            e
        })?;

        info!(sale_id = %sale.id, user_id = %sale.user_id, status = %sale.status, "sale created");
        Ok(sale)
    }

    async fn get_sale(&self, id: &str) -> DomainResult<Sale> {
        self.repo.get_by_id(id).await.map_err(|e| {
            warn!(sale_id = %id, error = %e, "sale lookup failed");
            e
        })
    }

    async fn get_sales_report(&self, user_id: &str, status: &str) -> DomainResult<SalesReport> {
        let filter = parse_status_filter(status)?;

        let sales = match self.repo.get_all().await {
            Ok(sales) => sales,
            // Nothing stored yet
            Err(e) if e.is_not_found() => Vec::new(),
            Err(e) => return Err(e),
        };

        Ok(SalesReport::build(sales, user_id, filter))
    }

    async fn update_sale(&self, id: &str, update: UpdateSale) -> DomainResult<Sale> {
        let mut sale = self.get_sale(id).await?;
        let expected = sale.version;

        sale.transition(&update.status, &self.policy).map_err(|e| {
            warn!(sale_id = %id, requested = %update.status, error = %e, "transition rejected");
            e
        })?;

        let sale = self.repo.put_if_version(sale, expected).await?;
        info!(sale_id = %sale.id, status = %sale.status, "sale updated");
        Ok(sale)
    }
}
