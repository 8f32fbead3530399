pub mod a001_sales_dataset;
pub mod d100_sales_analytics;
