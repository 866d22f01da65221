//! Common types and traits shared by the sales aggregates

pub mod aggregate_id;
pub mod lenient;

pub use aggregate_id::AggregateId;
