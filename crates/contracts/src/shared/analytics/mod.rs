//! Quarter filtering and derived metrics over sales records.
//!
//! Everything here is a pure function of its inputs: no I/O, no shared state.

pub mod error;
pub mod metrics;
pub mod period_comparator;
pub mod quarter_filter;
pub mod quarter_index;

pub use error::QuarterError;
pub use metrics::{average_deal_size, percent_change, share, summarize, AggregateSummary};
pub use period_comparator::previous_period;
pub use quarter_filter::filter_by_quarter;
pub use quarter_index::{QuarterIndex, QuarterLabel};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::a001_sales_dataset::{Category, SalesRecord};

    pub fn team(name: &str, count: u64, acv: f64, quarter: &str) -> SalesRecord {
        SalesRecord::new(Category::Team(name.to_string()), count, acv, quarter)
    }

    /// Records of the reference scenario: two in 2023-Q1, one in 2023-Q2.
    pub fn scenario() -> Vec<SalesRecord> {
        vec![
            team("A", 2, 100.0, "2023-Q1"),
            team("B", 3, 200.0, "2023-Q1"),
            team("A", 1, 50.0, "2023-Q2"),
        ]
    }
}
