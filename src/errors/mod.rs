//! Error handling for the screener pipeline

pub mod screener_error;

pub use screener_error::*;
