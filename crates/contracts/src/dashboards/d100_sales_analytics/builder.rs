use super::dto::{CategoryBreakdown, DashboardSnapshot, SectionSummary};
use crate::domain::a001_sales_dataset::{DatasetKind, SalesDatasets, SalesRecord};
use crate::shared::analytics::{
    average_deal_size, filter_by_quarter, previous_period, summarize, QuarterError, QuarterIndex,
};

/// Build the dashboard for `selection`, defaulting to the latest quarter.
///
/// A selection that is not in the index produces empty sections rather than
/// an error; only malformed quarter labels in the data fail.
pub fn build_dashboard(
    datasets: &SalesDatasets,
    selection: Option<&str>,
) -> Result<DashboardSnapshot, QuarterError> {
    let index = QuarterIndex::build(&datasets.all())?;

    let selected_quarter = match selection.filter(|quarter| !quarter.is_empty()) {
        Some(quarter) => Some(quarter.to_string()),
        None => index.latest().map(|label| label.to_string()),
    };
    let previous_quarter = selected_quarter
        .as_deref()
        .and_then(|quarter| index.previous(quarter))
        .map(|label| label.to_string());

    let sections: Vec<SectionSummary> = DatasetKind::ALL
        .iter()
        .map(|kind| build_section(*kind, datasets.get(*kind), selected_quarter.as_deref(), &index))
        .collect();

    let headline = sections
        .iter()
        .find(|section| section.kind == DatasetKind::Team)
        .map(|section| section.summary)
        .unwrap_or_default();

    Ok(DashboardSnapshot {
        quarters: index.to_strings(),
        selected_quarter,
        previous_quarter,
        headline,
        sections,
    })
}

fn build_section(
    kind: DatasetKind,
    records: &[SalesRecord],
    quarter: Option<&str>,
    index: &QuarterIndex,
) -> SectionSummary {
    let current = filter_by_quarter(records, quarter);
    let previous = match quarter {
        Some(quarter) => previous_period(records, quarter, index),
        None => Vec::new(),
    };
    let summary = summarize(&current, &previous);

    let rows = current
        .iter()
        .map(|record| CategoryBreakdown {
            category: record.category.name().to_string(),
            count: record.count,
            acv: record.acv,
            closed_fiscal_quarter: record.closed_fiscal_quarter.clone(),
            average_deal_size: average_deal_size(record),
            share_percent: summary.share_of(record),
        })
        .collect();

    SectionSummary {
        kind,
        title: kind.title().to_string(),
        category_count: current.len(),
        summary,
        rows,
    }
}
