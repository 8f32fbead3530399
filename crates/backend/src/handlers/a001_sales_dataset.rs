use axum::{extract::State, Json};
use contracts::domain::a001_sales_dataset::DatasetRow;

use crate::dashboards::d100_sales_analytics::repository;
use crate::shared::app_state::AppState;
use crate::shared::error::ApiError;

/// GET /api/team, /api/customer-type, /api/acv-range, /api/account-industry
///
/// Returns the dataset file as parsed, every column included. `R` only
/// selects the file.
pub async fn get_dataset<R: DatasetRow>(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match repository::load_raw(&state.data_dir, R::KIND).await {
        Ok(value) => {
            tracing::info!(
                "A001 Datasets: Returning {} rows of {}",
                value.as_array().map_or(0, |rows| rows.len()),
                R::KIND.file_name()
            );
            Ok(Json(value))
        }
        Err(e) => {
            tracing::error!("A001 Datasets: Failed to load {}: {:#}", R::KIND.file_name(), e);
            Err(ApiError::FetchFailed)
        }
    }
}
