pub mod a001_sales_dataset;
