//! Game statistics and their persistence

mod statistics;
pub mod store;

pub use statistics::{Statistics, Tally};
pub use store::{JsonFileStore, MemoryStore, Store, StoreError};

/// File name used for persisted statistics
pub const STATISTICS_FILE: &str = "statistics.json";
