pub mod common;
pub mod u001_sales_search;
pub mod u002_account_detail;
pub mod u003_ticket_check;
pub mod u004_toggle_status;
