use serde::{Deserialize, Serialize};

use crate::domain::a001_sales_dataset::SalesRecord;

/// Summary metrics of a filtered record set against a comparison period.
///
/// Ratios with a zero (or missing) denominator are `None`; a summary never
/// carries `NaN` or infinities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Sum of ACV over the current set
    pub total_value: f64,
    /// Sum of deal counts over the current set
    pub total_count: u64,
    /// Average deal size, `total_value / total_count`
    pub average_value: Option<f64>,

    pub previous_total_value: f64,
    pub previous_total_count: u64,
    pub previous_average_value: Option<f64>,

    /// ACV change vs the comparison period, in percent
    pub change_percent: Option<f64>,
    /// Deal count change vs the comparison period, in percent
    pub count_change_percent: Option<f64>,
    /// Average deal size change vs the comparison period, in percent
    pub average_change_percent: Option<f64>,
}

impl AggregateSummary {
    /// Share of `record` in this summary's total value, in percent.
    pub fn share_of(&self, record: &SalesRecord) -> Option<f64> {
        share(record, self.total_value)
    }
}

/// Reduce `current` into totals and compare them against `previous`.
pub fn summarize(current: &[SalesRecord], previous: &[SalesRecord]) -> AggregateSummary {
    let (total_value, total_count) = totals(current);
    let (previous_total_value, previous_total_count) = totals(previous);

    let average_value = ratio(total_value, total_count as f64);
    let previous_average_value = ratio(previous_total_value, previous_total_count as f64);

    AggregateSummary {
        total_value,
        total_count,
        average_value,
        previous_total_value,
        previous_total_count,
        previous_average_value,
        change_percent: percent_change(total_value, previous_total_value),
        count_change_percent: percent_change(total_count as f64, previous_total_count as f64),
        average_change_percent: match (average_value, previous_average_value) {
            (Some(current), Some(previous)) => percent_change(current, previous),
            _ => None,
        },
    }
}

/// `(current - previous) / previous * 100`, or `None` when `previous` is not positive.
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous > 0.0 {
        finite((current - previous) / previous * 100.0)
    } else {
        None
    }
}

/// Share of `record.acv` in `total_value`, in percent.
pub fn share(record: &SalesRecord, total_value: f64) -> Option<f64> {
    ratio(record.acv, total_value).map(|ratio| ratio * 100.0)
}

/// ACV per deal of a single record.
pub fn average_deal_size(record: &SalesRecord) -> Option<f64> {
    ratio(record.acv, record.count as f64)
}

fn totals(records: &[SalesRecord]) -> (f64, u64) {
    records
        .iter()
        .fold((0.0, 0), |(value, count), record| (value + record.acv, count + record.count))
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        finite(numerator / denominator)
    } else {
        None
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::period_comparator::previous_period;
    use crate::shared::analytics::quarter_filter::filter_by_quarter;
    use crate::shared::analytics::quarter_index::QuarterIndex;
    use crate::shared::analytics::test_support::{scenario, team};

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("value should be present");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_summarize_scenario_q1() {
        let records = scenario();
        let q1 = filter_by_quarter(&records, Some("2023-Q1"));

        let summary = summarize(&q1, &[]);
        assert_eq!(summary.total_value, 300.0);
        assert_eq!(summary.total_count, 5);
        assert_close(summary.average_value, 60.0);
        assert_eq!(summary.change_percent, None);
    }

    #[test]
    fn test_summarize_scenario_q2_against_q1() {
        let records = scenario();
        let index = QuarterIndex::build(&[&records]).unwrap();
        let current = filter_by_quarter(&records, Some("2023-Q2"));
        let previous = previous_period(&records, "2023-Q2", &index);

        let summary = summarize(&current, &previous);
        assert_eq!(summary.total_value, 50.0);
        assert_eq!(summary.previous_total_value, 300.0);
        assert_close(summary.change_percent, (50.0 - 300.0) / 300.0 * 100.0);
        assert_close(summary.change_percent.map(|pct| (pct * 100.0).round() / 100.0), -83.33);
        assert_close(summary.count_change_percent, (1.0 - 5.0) / 5.0 * 100.0);
        // 50/1 against 300/5
        assert_close(summary.average_change_percent, (50.0 - 60.0) / 60.0 * 100.0);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.average_value, None);
        assert_eq!(summary.change_percent, None);
        assert_eq!(summary.count_change_percent, None);
        assert_eq!(summary.average_change_percent, None);
        assert_eq!(summary, AggregateSummary::default());
    }

    #[test]
    fn test_zero_counts_and_values_never_leak_nan() {
        let current = vec![team("A", 0, 120.0, "2023-Q2")];
        let previous = vec![team("A", 0, 0.0, "2023-Q1")];

        let summary = summarize(&current, &previous);
        assert_eq!(summary.average_value, None);
        assert_eq!(summary.change_percent, None);
        assert_eq!(summary.count_change_percent, None);
        assert_eq!(summary.average_change_percent, None);
        assert_eq!(average_deal_size(&current[0]), None);
    }

    #[test]
    fn test_shares() {
        let records = scenario();
        let q1 = filter_by_quarter(&records, Some("2023-Q1"));
        let summary = summarize(&q1, &[]);

        let shares: Vec<Option<f64>> = q1.iter().map(|record| summary.share_of(record)).collect();
        assert_close(shares[0], 100.0 / 3.0);
        assert_close(shares[1], 200.0 / 3.0);

        let zero = team("Z", 1, 0.0, "2023-Q1");
        assert_eq!(share(&zero, 0.0), None);
    }

    #[test]
    fn test_percent_change() {
        assert_close(percent_change(150.0, 100.0), 50.0);
        assert_close(percent_change(0.0, 100.0), -100.0);
        assert_eq!(percent_change(10.0, 0.0), None);
        assert_eq!(percent_change(10.0, -5.0), None);
        assert_eq!(percent_change(10.0, f64::NAN), None);
    }

    #[test]
    fn test_average_deal_size() {
        assert_close(average_deal_size(&team("A", 4, 1000.0, "2023-Q1")), 250.0);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let records = scenario();
        assert_eq!(summarize(&records, &records[..1]), summarize(&records, &records[..1]));
    }
}
