pub mod a001_account;
pub mod a002_service;
pub mod a003_ticket;
pub mod common;
