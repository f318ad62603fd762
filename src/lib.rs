//! DLMM Pool Screener
//!
//! Aggregates liquidity-pool metadata from the paginated Meteora DLMM API,
//! enriches each surviving candidate with near-real-time trade data from
//! DexScreener, applies numeric filters and serves the ranked, derived-metric
//! dataset over a small JSON API.

pub mod aggregator;
pub mod config;
pub mod errors;
pub mod network;
pub mod server;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::{CONFIG, Config};
pub use errors::{ScreenerError, ScreenerResult};
pub use types::*;
