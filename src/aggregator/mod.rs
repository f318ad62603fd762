//! Pagination, filtering and enrichment pipeline

pub mod outcome;
pub mod pipeline;

pub use outcome::*;
pub use pipeline::*;
