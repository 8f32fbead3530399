use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::error::QuarterError;
use crate::domain::a001_sales_dataset::SalesRecord;

// ---------------------------------------------------------------------------
// Quarter label
// ---------------------------------------------------------------------------

/// A parsed fiscal quarter label such as `"2023-Q1"`.
///
/// Ordered by year (numeric), then by the quarter token (lexical), so
/// `"999-Q4" < "2023-Q1" < "2023-Q2"`. Years are unsigned and must fit
/// in a `u64`; longer digit runs are malformed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuarterLabel {
    // Field order drives the derived ordering.
    year: u64,
    token: String,
    label: String,
}

impl QuarterLabel {
    /// Split on the first `-` into `(year, token)`.
    pub fn parse(label: &str) -> Result<Self, QuarterError> {
        let malformed = || QuarterError::MalformedQuarterLabel(label.to_string());

        let (year, token) = label.split_once('-').ok_or_else(malformed)?;
        let year = year.parse::<u64>().map_err(|_| malformed())?;
        if token.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            year,
            token: token.to_string(),
            label: label.to_string(),
        })
    }

    pub fn year(&self) -> u64 {
        self.year
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn as_str(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for QuarterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl TryFrom<String> for QuarterLabel {
    type Error = QuarterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<QuarterLabel> for String {
    fn from(value: QuarterLabel) -> Self {
        value.label
    }
}

// ---------------------------------------------------------------------------
// Quarter index
// ---------------------------------------------------------------------------

/// Distinct quarter labels present in one or more datasets, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuarterIndex {
    labels: Vec<QuarterLabel>,
}

impl QuarterIndex {
    /// Collect and order the quarters of every record in `datasets`.
    ///
    /// Fails on the first label (in lexical order) that cannot be parsed.
    pub fn build(datasets: &[&[SalesRecord]]) -> Result<Self, QuarterError> {
        Self::from_labels(
            datasets
                .iter()
                .flat_map(|records| records.iter())
                .map(|record| record.closed_fiscal_quarter.as_str()),
        )
    }

    pub fn from_labels<'a, I>(labels: I) -> Result<Self, QuarterError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: BTreeSet<&str> = labels.into_iter().collect();

        let mut labels = distinct
            .into_iter()
            .map(QuarterLabel::parse)
            .collect::<Result<Vec<_>, _>>()?;
        labels.sort();

        Ok(Self { labels })
    }

    pub fn labels(&self) -> &[QuarterLabel] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuarterLabel> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn position(&self, quarter: &str) -> Option<usize> {
        self.labels.iter().position(|label| label.as_str() == quarter)
    }

    pub fn contains(&self, quarter: &str) -> bool {
        self.position(quarter).is_some()
    }

    pub fn earliest(&self) -> Option<&QuarterLabel> {
        self.labels.first()
    }

    /// Most recent quarter; the dashboard's default selection.
    pub fn latest(&self) -> Option<&QuarterLabel> {
        self.labels.last()
    }

    /// Quarter immediately before `quarter`, if it is indexed and not the first.
    pub fn previous(&self, quarter: &str) -> Option<&QuarterLabel> {
        match self.position(quarter)? {
            0 => None,
            pos => self.labels.get(pos - 1),
        }
    }

    /// Labels as plain strings, for DTOs and selectors.
    pub fn to_strings(&self) -> Vec<String> {
        self.labels.iter().map(|label| label.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::test_support::{scenario, team};

    #[test]
    fn test_build_scenario() {
        let records = scenario();
        let index = QuarterIndex::build(&[&records]).unwrap();
        assert_eq!(index.to_strings(), vec!["2023-Q1", "2023-Q2"]);
    }

    #[test]
    fn test_build_dedups_and_sorts_across_datasets() {
        let first = vec![
            team("A", 1, 1.0, "2024-Q1"),
            team("A", 1, 1.0, "2023-Q4"),
            team("B", 1, 1.0, "2024-Q1"),
        ];
        let second = vec![
            team("C", 1, 1.0, "2023-Q3"),
            team("C", 1, 1.0, "2023-Q4"),
        ];

        let index = QuarterIndex::build(&[&first, &second]).unwrap();
        assert_eq!(index.to_strings(), vec!["2023-Q3", "2023-Q4", "2024-Q1"]);

        for pair in index.labels().windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_year_is_compared_numerically() {
        let index = QuarterIndex::from_labels(["2023-Q1", "999-Q4", "10000-Q1"]).unwrap();
        assert_eq!(index.to_strings(), vec!["999-Q4", "2023-Q1", "10000-Q1"]);
    }

    #[test]
    fn test_long_years_parse_and_order() {
        let index =
            QuarterIndex::from_labels(["12345678901-Q1", "2023-Q1", "99999999999999999999-Q1"]);
        assert_eq!(
            index.unwrap_err(),
            QuarterError::MalformedQuarterLabel("99999999999999999999-Q1".to_string())
        );

        let index = QuarterIndex::from_labels(["12345678901-Q1", "2023-Q1"]).unwrap();
        assert_eq!(index.to_strings(), vec!["2023-Q1", "12345678901-Q1"]);
        assert_eq!(index.latest().unwrap().year(), 12_345_678_901);
    }

    #[test]
    fn test_token_is_compared_lexically() {
        let index = QuarterIndex::from_labels(["2023-Q4", "2023-Q2", "2023-H1", "2023-Q1"]).unwrap();
        assert_eq!(
            index.to_strings(),
            vec!["2023-H1", "2023-Q1", "2023-Q2", "2023-Q4"]
        );
    }

    #[test]
    fn test_label_splits_on_first_separator() {
        let label = QuarterLabel::parse("2023-Q1-late").unwrap();
        assert_eq!(label.year(), 2023);
        assert_eq!(label.token(), "Q1-late");
        assert_eq!(label.as_str(), "2023-Q1-late");
    }

    #[test]
    fn test_malformed_labels_are_rejected() {
        for bad in ["2023Q1", "FY23-Q1", "2023-", ""] {
            assert_eq!(
                QuarterLabel::parse(bad),
                Err(QuarterError::MalformedQuarterLabel(bad.to_string())),
                "label {bad:?}"
            );
        }

        let records = vec![team("A", 1, 1.0, "2023-Q1"), team("B", 1, 1.0, "Q2 2023")];
        let err = QuarterIndex::build(&[&records]).unwrap_err();
        assert_eq!(err, QuarterError::MalformedQuarterLabel("Q2 2023".to_string()));
    }

    #[test]
    fn test_empty_input() {
        let index = QuarterIndex::build(&[]).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.latest(), None);

        let empty: Vec<SalesRecord> = Vec::new();
        assert!(QuarterIndex::build(&[&empty, &empty]).unwrap().is_empty());
    }

    #[test]
    fn test_sorting_again_is_identity() {
        let index = QuarterIndex::from_labels(["2024-Q2", "2023-Q3", "2024-Q1", "2023-Q4"]).unwrap();
        let mut resorted = index.labels().to_vec();
        resorted.sort();
        assert_eq!(resorted, index.labels());

        let rebuilt = QuarterIndex::from_labels(index.iter().map(|label| label.as_str())).unwrap();
        assert_eq!(rebuilt, index);
    }

    #[test]
    fn test_navigation() {
        let index = QuarterIndex::from_labels(["2023-Q2", "2023-Q1", "2023-Q3"]).unwrap();
        assert_eq!(index.position("2023-Q2"), Some(1));
        assert!(index.contains("2023-Q3"));
        assert!(!index.contains("2022-Q4"));
        assert_eq!(index.earliest().map(QuarterLabel::as_str), Some("2023-Q1"));
        assert_eq!(index.latest().map(QuarterLabel::as_str), Some("2023-Q3"));
        assert_eq!(index.previous("2023-Q3").map(QuarterLabel::as_str), Some("2023-Q2"));
        assert_eq!(index.previous("2023-Q1"), None);
        assert_eq!(index.previous("2030-Q1"), None);
    }

    #[test]
    fn test_serializes_as_plain_strings() {
        let index = QuarterIndex::from_labels(["2023-Q2", "2023-Q1"]).unwrap();
        assert_eq!(
            serde_json::to_string(&index).unwrap(),
            r#"["2023-Q1","2023-Q2"]"#
        );

        let label: QuarterLabel = serde_json::from_str(r#""2024-Q3""#).unwrap();
        assert_eq!(label.year(), 2024);
        assert!(serde_json::from_str::<QuarterLabel>(r#""2024Q3""#).is_err());
    }
}
