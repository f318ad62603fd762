//! Per-pool processing outcomes

use crate::types::EnrichedPool;

/// Explicit result of processing one raw pool, consumed by the driving
/// loop. A skipped pool is logged and dropped; it never aborts the rest of
/// the batch.
#[derive(Debug)]
pub enum PoolOutcome {
    /// Passed the filter; carries the assembled output record.
    Kept(EnrichedPool),
    /// Failed the numeric predicate.
    Filtered,
    /// Could not be processed (malformed field, missing address).
    Skipped { reason: String },
}
