pub mod fixtures;
pub mod service;
