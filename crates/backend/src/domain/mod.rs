pub mod a001_sales;
