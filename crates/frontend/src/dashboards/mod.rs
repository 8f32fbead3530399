pub mod d100_sales_analytics;

pub use d100_sales_analytics::ui::SalesDashboard;
