pub mod list;

pub use list::SalesSearchPage;
