use super::quarter_filter::filter_by_quarter;
use super::quarter_index::QuarterIndex;
use crate::domain::a001_sales_dataset::SalesRecord;

/// Records of the quarter preceding `current_quarter` in `index`.
///
/// Empty when there is nothing to compare against: no records, a quarter
/// missing from the index, or the earliest indexed quarter.
pub fn previous_period(records: &[SalesRecord], current_quarter: &str, index: &QuarterIndex) -> Vec<SalesRecord> {
    if records.is_empty() {
        return Vec::new();
    }

    match index.previous(current_quarter) {
        Some(previous) => filter_by_quarter(records, Some(previous.as_str())).into_owned(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::test_support::{scenario, team};

    #[test]
    fn test_previous_period_scenario() {
        let records = scenario();
        let index = QuarterIndex::build(&[&records]).unwrap();

        let previous = previous_period(&records, "2023-Q2", &index);
        assert_eq!(previous, records[..2].to_vec());
    }

    #[test]
    fn test_earliest_quarter_has_no_previous_period() {
        let records = scenario();
        let index = QuarterIndex::build(&[&records]).unwrap();
        let earliest = index.earliest().unwrap().as_str();

        assert!(previous_period(&records, earliest, &index).is_empty());
    }

    #[test]
    fn test_unknown_quarter_and_empty_inputs() {
        let records = scenario();
        let index = QuarterIndex::build(&[&records]).unwrap();

        assert!(previous_period(&records, "2022-Q4", &index).is_empty());
        assert!(previous_period(&[], "2023-Q2", &index).is_empty());
        assert!(previous_period(&records, "2023-Q2", &QuarterIndex::default()).is_empty());
    }

    #[test]
    fn test_index_spans_other_datasets() {
        // The index may contain quarters this dataset has no rows for.
        let team_rows = vec![team("A", 1, 10.0, "2023-Q1"), team("A", 2, 20.0, "2023-Q3")];
        let other_rows = vec![team("X", 1, 1.0, "2023-Q2")];
        let index = QuarterIndex::build(&[&team_rows, &other_rows]).unwrap();

        assert!(previous_period(&team_rows, "2023-Q3", &index).is_empty());
        assert_eq!(previous_period(&other_rows, "2023-Q3", &index), other_rows);
    }
}
