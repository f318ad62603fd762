//! HTTP clients for the upstream market-data APIs

pub mod dexscreener;
pub mod primary;

pub use dexscreener::*;
pub use primary::*;
