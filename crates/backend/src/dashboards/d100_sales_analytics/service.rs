use anyhow::Result;
use contracts::dashboards::d100_sales_analytics::{
    build_dashboard, DashboardSnapshot, SalesSummaryRequest,
};
use contracts::shared::analytics::QuarterIndex;
use std::path::Path;

use super::repository;

/// Ordered fiscal quarters across all four datasets
pub async fn get_quarters(data_dir: &Path) -> Result<Vec<String>> {
    let datasets = repository::load_all(data_dir).await?;
    let index = QuarterIndex::build(&datasets.all())?;
    Ok(index.to_strings())
}

/// Dashboard snapshot for the requested quarter (latest when omitted)
pub async fn get_sales_summary(
    data_dir: &Path,
    request: SalesSummaryRequest,
) -> Result<DashboardSnapshot> {
    let datasets = repository::load_all(data_dir).await?;
    let snapshot = build_dashboard(&datasets, request.quarter.as_deref())?;
    Ok(snapshot)
}
