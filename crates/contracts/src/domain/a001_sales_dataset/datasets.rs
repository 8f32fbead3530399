use serde::{Deserialize, Serialize};

use super::aggregate::{DatasetKind, SalesRecord};

/// The four loaded datasets, held immutably for the session.
///
/// Passed explicitly into the analytics functions instead of living in a
/// global store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesDatasets {
    pub team: Vec<SalesRecord>,
    pub customer_type: Vec<SalesRecord>,
    pub acv_range: Vec<SalesRecord>,
    pub account_industry: Vec<SalesRecord>,
}

impl SalesDatasets {
    pub fn get(&self, kind: DatasetKind) -> &[SalesRecord] {
        match kind {
            DatasetKind::Team => &self.team,
            DatasetKind::CustomerType => &self.customer_type,
            DatasetKind::AcvRange => &self.acv_range,
            DatasetKind::AccountIndustry => &self.account_industry,
        }
    }

    /// Replace one dataset, returning the updated value.
    pub fn with(mut self, kind: DatasetKind, records: Vec<SalesRecord>) -> Self {
        match kind {
            DatasetKind::Team => self.team = records,
            DatasetKind::CustomerType => self.customer_type = records,
            DatasetKind::AcvRange => self.acv_range = records,
            DatasetKind::AccountIndustry => self.account_industry = records,
        }
        self
    }

    /// All datasets in `DatasetKind::ALL` order.
    pub fn all(&self) -> [&[SalesRecord]; 4] {
        DatasetKind::ALL.map(|kind| self.get(kind))
    }

    pub fn is_empty(&self) -> bool {
        self.all().iter().all(|records| records.is_empty())
    }
}
