mod dashboard;
mod section;

pub use dashboard::SalesDashboard;
