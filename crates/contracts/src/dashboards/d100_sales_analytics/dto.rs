use serde::{Deserialize, Serialize};

use crate::domain::a001_sales_dataset::DatasetKind;
use crate::shared::analytics::AggregateSummary;

/// Query for the sales analytics dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesSummaryRequest {
    /// Fiscal quarter, e.g. "2023-Q1". Latest available quarter when omitted.
    #[serde(default)]
    pub quarter: Option<String>,
}

/// Everything the dashboard renders for one quarter selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// All quarters across the four datasets, oldest first
    pub quarters: Vec<String>,
    /// Active quarter, None when no data is loaded
    pub selected_quarter: Option<String>,
    /// Quarter used for the change figures, None for the earliest quarter
    pub previous_quarter: Option<String>,
    /// Headline cards (Total ACV, Total Deals, Avg Deal Size, Growth Rate),
    /// computed over the team dataset
    pub headline: AggregateSummary,
    /// One section per dataset, in tab order
    pub sections: Vec<SectionSummary>,
}

impl DashboardSnapshot {
    pub fn section(&self, kind: DatasetKind) -> Option<&SectionSummary> {
        self.sections.iter().find(|section| section.kind == kind)
    }
}

/// Summary block and detail rows of one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub kind: DatasetKind,
    pub title: String,
    /// Number of rows in the active quarter (teams, customer types, ...)
    pub category_count: usize,
    pub summary: AggregateSummary,
    pub rows: Vec<CategoryBreakdown>,
}

/// Single detail row with its derived figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub count: u64,
    pub acv: f64,
    pub closed_fiscal_quarter: String,
    /// ACV per deal, None when the row has no deals
    pub average_deal_size: Option<f64>,
    /// Share of the section's total ACV, in percent
    pub share_percent: Option<f64>,
}
