pub mod achievements;
pub mod catalogue;
pub mod config;
pub mod countdown;
pub mod reset;
pub mod stats;
pub mod storage;
pub mod store;
pub mod types;

pub use config::{ConfigError, TrackerConfig};
pub use countdown::{remaining, to_arabic_digits, Countdown, Phase};
pub use stats::Stats;
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use store::{ProgressError, ProgressStore};
pub use types::*;
