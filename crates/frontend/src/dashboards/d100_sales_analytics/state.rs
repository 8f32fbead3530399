use std::collections::HashMap;

use contracts::dashboards::d100_sales_analytics::{build_dashboard, DashboardSnapshot};
use contracts::domain::a001_sales_dataset::{DatasetKind, SalesDatasets, SalesRecord};
use contracts::shared::analytics::QuarterError;
use leptos::prelude::*;

/// Fetch state of a single dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Fetch state of all four datasets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetLoads {
    states: HashMap<DatasetKind, LoadState>,
}

impl DatasetLoads {
    pub fn state(&self, kind: DatasetKind) -> LoadState {
        self.states.get(&kind).cloned().unwrap_or_default()
    }

    pub fn begin(&mut self, kind: DatasetKind) {
        self.states.insert(kind, LoadState::Loading);
    }

    pub fn succeed(&mut self, kind: DatasetKind) {
        self.states.insert(kind, LoadState::Loaded);
    }

    pub fn fail(&mut self, kind: DatasetKind, error: String) {
        self.states.insert(kind, LoadState::Failed(error));
    }

    pub fn is_loading(&self) -> bool {
        self.states.values().any(|s| *s == LoadState::Loading)
    }

    /// Failed datasets in tab order
    pub fn errors(&self) -> Vec<(DatasetKind, String)> {
        DatasetKind::ALL
            .into_iter()
            .filter_map(|kind| match self.state(kind) {
                LoadState::Failed(error) => Some((kind, error)),
                _ => None,
            })
            .collect()
    }
}

/// Dashboard store, provided through context.
///
/// Datasets are written once per fetch; everything shown is derived from
/// them and the current selection.
#[derive(Clone, Copy)]
pub struct DashboardStore {
    pub datasets: RwSignal<SalesDatasets>,
    pub loads: RwSignal<DatasetLoads>,
    /// Explicit quarter choice; None follows the latest quarter
    pub selected_quarter: RwSignal<Option<String>>,
    pub active_tab: RwSignal<DatasetKind>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self {
            datasets: RwSignal::new(SalesDatasets::default()),
            loads: RwSignal::new(DatasetLoads::default()),
            selected_quarter: RwSignal::new(None),
            active_tab: RwSignal::new(DatasetKind::Team),
        }
    }

    pub fn begin_load(&self, kind: DatasetKind) {
        self.loads.update(|loads| loads.begin(kind));
    }

    /// Stores a fetched dataset, or records why it failed
    pub fn finish_load(&self, kind: DatasetKind, result: Result<Vec<SalesRecord>, String>) {
        match result {
            Ok(records) => {
                self.datasets
                    .update(|datasets| *datasets = std::mem::take(datasets).with(kind, records));
                self.loads.update(|loads| loads.succeed(kind));
            }
            Err(error) => {
                self.loads.update(|loads| loads.fail(kind, error));
            }
        }
    }

    /// Snapshot for the current selection, recomputed when datasets or selection change
    pub fn snapshot(&self) -> Memo<Result<DashboardSnapshot, QuarterError>> {
        let datasets = self.datasets;
        let selected_quarter = self.selected_quarter;
        Memo::new(move |_| {
            let quarter = selected_quarter.get();
            datasets.with(|datasets| build_dashboard(datasets, quarter.as_deref()))
        })
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}
