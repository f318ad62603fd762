//! Core data types and structures

pub mod enrichment;
pub mod filters;
pub mod output;
pub mod pools;

pub use enrichment::*;
pub use filters::*;
pub use output::*;
pub use pools::*;
