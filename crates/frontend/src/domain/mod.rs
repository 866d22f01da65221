pub mod a001_sales_search;
pub mod a002_account_detail;
pub mod a003_ticket_check;
pub mod a004_sale_form_fields;
