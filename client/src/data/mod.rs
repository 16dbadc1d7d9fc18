pub mod fixtures;
pub mod types;
