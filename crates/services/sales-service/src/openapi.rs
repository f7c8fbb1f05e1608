//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{CreateSale, ReportMetadata, Sale, SaleStatus, SalesReport, UpdateSale};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::sale_handler::create_sale,
        crate::handlers::sale_handler::get_sales_report,
        crate::handlers::sale_handler::get_sale,
        crate::handlers::sale_handler::update_sale,
    ),
    components(
        schemas(
            Sale,
            SaleStatus,
            CreateSale,
            UpdateSale,
            SalesReport,
            ReportMetadata,
        )
    ),
    tags(
        (name = "Sales", description = "Sales ledger endpoints"),
    )
)]
pub struct ApiDoc;
