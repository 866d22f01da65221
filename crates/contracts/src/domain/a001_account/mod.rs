pub mod aggregate;

pub use aggregate::{Account, AccountDetail, AccountId};
