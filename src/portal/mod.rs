pub mod compliance;
pub mod fixtures;
