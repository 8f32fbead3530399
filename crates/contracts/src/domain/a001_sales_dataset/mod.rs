//! Sales dataset domain module
//!
//! Records of the four static datasets (team, customer type, ACV range,
//! account industry) and their per-dataset wire shapes.

pub mod aggregate;
pub mod datasets;

pub use aggregate::{
    AccountIndustryRow, AcvRangeRow, Category, CustomerTypeRow, DatasetKind, DatasetRow,
    SalesRecord, TeamRow,
};
pub use datasets::SalesDatasets;
