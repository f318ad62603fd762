//! Utility functions and helpers

pub mod logging;
pub mod math;

pub use logging::*;
pub use math::*;
