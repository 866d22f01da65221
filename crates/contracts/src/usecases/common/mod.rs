//! Common types and traits for the sales use cases

pub mod payload;
pub mod usecase_metadata;

pub use payload::Payload;
pub use usecase_metadata::UseCaseMetadata;
