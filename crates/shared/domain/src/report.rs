//! Sales report: a read-only aggregation over a user's sales.

use serde::{Deserialize, Serialize};

use crate::sale::{Sale, SaleStatus};

/// Aggregated figures over the matched sales
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReportMetadata {
    /// Number of matched sales
    pub quantity: usize,
    pub approved: usize,
    pub rejected: usize,
    pub pending: usize,
    /// Sum of matched amounts
    pub total_amount: f64,
}

/// Report returned by the sales listing endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SalesReport {
    pub metadata: ReportMetadata,
    /// Matched sales, oldest first
    pub results: Vec<Sale>,
}

impl SalesReport {
    /// Filter `sales` by owner and optional status, then aggregate.
    pub fn build<I>(sales: I, user_id: &str, status: Option<SaleStatus>) -> Self
    where
        I: IntoIterator<Item = Sale>,
    {
        let mut results: Vec<Sale> = sales
            .into_iter()
            .filter(|sale| sale.user_id == user_id)
            .filter(|sale| status.map_or(true, |wanted| sale.status == wanted))
            .collect();
        results.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        let mut metadata = ReportMetadata {
            quantity: results.len(),
            ..Default::default()
        };
        for sale in &results {
            match sale.status {
                SaleStatus::Approved => metadata.approved += 1,
                SaleStatus::Rejected => metadata.rejected += 1,
                SaleStatus::Pending => metadata.pending += 1,
            }
            metadata.total_amount += sale.amount;
        }

        Self { metadata, results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales() -> Vec<Sale> {
        vec![
            Sale::new("ana".to_string(), 50.0, SaleStatus::Approved),
            Sale::new("ana".to_string(), 20.5, SaleStatus::Pending),
            Sale::new("ana".to_string(), 10.0, SaleStatus::Rejected),
            Sale::new("ana".to_string(), 5.0, SaleStatus::Approved),
            Sale::new("bob".to_string(), 999.0, SaleStatus::Approved),
        ]
    }

    #[test]
    fn test_unfiltered_report_covers_all_user_sales() {
        let report = SalesReport::build(sales(), "ana", None);
        let meta = &report.metadata;

        assert_eq!(meta.quantity, 4);
        assert_eq!(meta.approved + meta.rejected + meta.pending, meta.quantity);
        assert_eq!(meta.total_amount, 85.5);
        assert!(report.results.iter().all(|s| s.user_id == "ana"));
    }

    #[test]
    fn test_status_filter() {
        let report = SalesReport::build(sales(), "ana", Some(SaleStatus::Approved));

        assert_eq!(report.metadata.quantity, 2);
        assert_eq!(report.metadata.approved, 2);
        assert_eq!(report.metadata.pending, 0);
        assert_eq!(report.metadata.total_amount, 55.0);
    }

    #[test]
    fn test_results_sorted_by_creation() {
        let mut input = sales();
        input.reverse();
        let report = SalesReport::build(input, "ana", None);

        assert!(report
            .results
            .windows(2)
            .all(|w| w[0].created_at <= w[1].created_at));
    }

    #[test]
    fn test_empty_input_gives_empty_report() {
        let report = SalesReport::build(Vec::new(), "ana", None);

        assert_eq!(report, SalesReport::default());
    }
}
