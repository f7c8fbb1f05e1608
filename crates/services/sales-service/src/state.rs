//! Application state for dependency injection.

use std::sync::Arc;

use crate::service::SaleService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub sale_service: Arc<dyn SaleService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(sale_service: Arc<dyn SaleService>) -> Self {
        Self { sale_service }
    }
}
