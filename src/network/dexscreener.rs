//! Enrichment lookups against the secondary API (DexScreener)

use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    config::Config,
    errors::{ScreenerError, ScreenerResult},
    types::{EnrichmentRecord, PairsEnvelope},
};

/// Per-address pair lookup. Infallible from the caller's perspective:
/// missing enrichment is expected and common, so every transport or parse
/// failure collapses to the zeroed record.
pub struct EnrichmentClient {
    client: reqwest::Client,
    base_url: String,
}

impl EnrichmentClient {
    pub fn new(config: &Config) -> ScreenerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.enrich_timeout_secs))
            .build()
            .map_err(|e| ScreenerError::Network {
                message: "Failed to build HTTP client".to_string(),
                source: Some(e.into()),
            })?;

        Ok(Self {
            client,
            base_url: config.dexscreener_base_url.clone(),
        })
    }

    /// Fetch the first pair record for a pool address, or the zeroed record
    /// when no pairs exist or the lookup fails.
    pub async fn fetch_pair(&self, address: &str) -> EnrichmentRecord {
        match self.request_pair(address).await {
            Ok(record) => record,
            Err(e) => {
                warn!("Enrichment lookup failed for {}: {}", address, e);
                EnrichmentRecord::default()
            }
        }
    }

    async fn request_pair(&self, address: &str) -> ScreenerResult<EnrichmentRecord> {
        let url = format!("{}/{}", self.base_url, address);
        debug!("Fetching enrichment for {}", address);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ScreenerError::Network {
                message: format!("Enrichment request failed for {}", address),
                source: Some(e.into()),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScreenerError::Network {
                message: format!("Enrichment API error {} for {}", status, address),
                source: None,
            });
        }

        let envelope: PairsEnvelope =
            response
                .json()
                .await
                .map_err(|e| ScreenerError::DataParsing {
                    context: format!("Enrichment payload for {}", address),
                    source: e.into(),
                })?;

        Ok(envelope
            .pairs
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(EnrichmentRecord::from)
            .unwrap_or_default())
    }
}
