use axum::{routing::get, Router};
use contracts::domain::a001_sales_dataset::{
    AccountIndustryRow, AcvRangeRow, CustomerTypeRow, TeamRow,
};

use crate::handlers;
use crate::shared::app_state::AppState;

/// All application routes
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 DATASETS (static JSON files)
        // ========================================
        .route(
            "/api/customer-type",
            get(handlers::a001_sales_dataset::get_dataset::<CustomerTypeRow>),
        )
        .route(
            "/api/acv-range",
            get(handlers::a001_sales_dataset::get_dataset::<AcvRangeRow>),
        )
        .route(
            "/api/account-industry",
            get(handlers::a001_sales_dataset::get_dataset::<AccountIndustryRow>),
        )
        .route(
            "/api/team",
            get(handlers::a001_sales_dataset::get_dataset::<TeamRow>),
        )
        // ========================================
        // D100 SALES ANALYTICS DASHBOARD
        // ========================================
        .route(
            "/api/quarters",
            get(handlers::d100_sales_analytics::get_quarters),
        )
        .route(
            "/api/d100/summary",
            get(handlers::d100_sales_analytics::get_sales_summary),
        )
        .with_state(state)
}
