pub mod accounts;
pub mod config;
pub mod defaults;
pub mod error;
pub mod merge;
pub mod models;
pub mod presentation;
pub mod stats;
pub mod store;
pub mod traits;

#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

pub use accounts::{Account, AccountService, PendingSignup, PublicUser};
pub use config::ProviderConfig;
pub use error::AppError;
pub use models::{CombinedStatistics, Provider, ProviderReport, ProviderStatistics};
pub use stats::{CombinedReport, StatsService};
pub use store::MemoryStore;
pub use traits::{Fetcher, KeyValueStore, StatsExtractor};
