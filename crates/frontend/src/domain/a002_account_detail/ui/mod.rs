pub mod details;

pub use details::AccountDetailPanel;
