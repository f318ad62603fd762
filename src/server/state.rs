//! Shared application state

use crate::{aggregator::Aggregator, config::Config, errors::ScreenerResult};

/// Request-independent state shared across handlers. The pipeline itself is
/// stateless across invocations; this only holds the configured clients.
pub struct AppState {
    pub config: Config,
    pub aggregator: Aggregator,
}

impl AppState {
    pub fn new(config: Config) -> ScreenerResult<Self> {
        let aggregator = Aggregator::new(config.clone())?;
        Ok(Self { config, aggregator })
    }
}
