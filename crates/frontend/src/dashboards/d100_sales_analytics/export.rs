use contracts::dashboards::d100_sales_analytics::{CategoryBreakdown, SectionSummary};
use contracts::domain::a001_sales_dataset::DatasetKind;

use crate::shared::export::{export_csv, CsvExportable};

impl CsvExportable for CategoryBreakdown {
    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            self.count.to_string(),
            self.acv.to_string(),
            self.closed_fiscal_quarter.clone(),
            self.share_percent
                .map(|share| format!("{:.1}", share))
                .unwrap_or_default(),
        ]
    }
}

/// Column headers of an exported section, named as in the source files
pub fn section_headers(kind: DatasetKind) -> [&'static str; 5] {
    [
        kind.category_column(),
        "count",
        "acv",
        "closed_fiscal_quarter",
        "share",
    ]
}

/// e.g. "team_2024-Q2.csv"
pub fn section_filename(kind: DatasetKind, quarter: Option<&str>) -> String {
    let name = kind.endpoint().replace('-', "_");
    match quarter {
        Some(quarter) => format!("{}_{}.csv", name, quarter),
        None => format!("{}.csv", name),
    }
}

/// Downloads the detail rows of one section
pub fn export_section(section: &SectionSummary, quarter: Option<&str>) -> Result<(), String> {
    export_csv(
        &section_headers(section.kind),
        &section.rows,
        &section_filename(section.kind, quarter),
    )
}
