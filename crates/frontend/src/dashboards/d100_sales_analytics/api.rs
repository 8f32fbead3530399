use contracts::domain::a001_sales_dataset::{
    AccountIndustryRow, AcvRangeRow, CustomerTypeRow, DatasetKind, DatasetRow, SalesRecord,
    TeamRow,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch one dataset in its wire shape and convert it to records
async fn fetch_rows<R: DatasetRow>() -> Result<Vec<SalesRecord>, String> {
    let url = api_url(&format!("/api/{}", R::KIND.endpoint()));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let rows: Vec<R> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Fetch the records of one dataset
pub async fn fetch_records(kind: DatasetKind) -> Result<Vec<SalesRecord>, String> {
    match kind {
        DatasetKind::Team => fetch_rows::<TeamRow>().await,
        DatasetKind::CustomerType => fetch_rows::<CustomerTypeRow>().await,
        DatasetKind::AcvRange => fetch_rows::<AcvRangeRow>().await,
        DatasetKind::AccountIndustry => fetch_rows::<AccountIndustryRow>().await,
    }
}
