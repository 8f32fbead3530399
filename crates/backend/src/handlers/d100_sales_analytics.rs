use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d100_sales_analytics::{DashboardSnapshot, SalesSummaryRequest};

use crate::dashboards::d100_sales_analytics::service;
use crate::shared::app_state::AppState;
use crate::shared::error::ApiError;

/// GET /api/quarters
pub async fn get_quarters(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    match service::get_quarters(&state.data_dir).await {
        Ok(quarters) => {
            tracing::info!("D100 Dashboard: Returning {} quarters", quarters.len());
            Ok(Json(quarters))
        }
        Err(e) => {
            tracing::error!("D100 Dashboard: Failed to get quarters: {:#}", e);
            Err(ApiError::FetchFailed)
        }
    }
}

/// GET /api/d100/summary?quarter=2023-Q1
pub async fn get_sales_summary(
    State(state): State<AppState>,
    Query(request): Query<SalesSummaryRequest>,
) -> Result<Json<DashboardSnapshot>, ApiError> {
    tracing::info!(
        "D100 Dashboard: Getting sales summary for {}",
        request.quarter.as_deref().unwrap_or("latest quarter")
    );

    match service::get_sales_summary(&state.data_dir, request).await {
        Ok(snapshot) => {
            tracing::info!(
                "D100 Dashboard: Returning {} sections for {}",
                snapshot.sections.len(),
                snapshot.selected_quarter.as_deref().unwrap_or("no quarter")
            );
            Ok(Json(snapshot))
        }
        Err(e) => {
            tracing::error!("D100 Dashboard: Failed to get sales summary: {:#}", e);
            Err(ApiError::FetchFailed)
        }
    }
}
