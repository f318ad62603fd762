//! Page fetching against the primary API (Meteora DLMM grouped listings)

use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    config::Config,
    errors::{ScreenerError, ScreenerResult},
    types::PageResult,
};

/// Fetches one page of grouped pool listings per call. Pages are requested
/// sorted by descending fee/TVL ratio so the highest-value candidates come
/// first; early termination then never drops the best pools.
pub struct PageFetcher {
    client: reqwest::Client,
    base_url: String,
    page_limit: u32,
}

impl PageFetcher {
    pub fn new(config: &Config) -> ScreenerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.primary_timeout_secs))
            .build()
            .map_err(|e| ScreenerError::Network {
                message: "Failed to build HTTP client".to_string(),
                source: Some(e.into()),
            })?;

        Ok(Self {
            client,
            base_url: config.primary_base_url.clone(),
            page_limit: config.page_limit,
        })
    }

    /// Fetch one page. `None` is the terminal signal for the pagination
    /// driver: a non-2xx status, a body that fails to parse, or a page with
    /// zero groups all end the stream. Failures are never retried; a partial
    /// result set is preferred over a retry storm.
    pub async fn fetch_page(&self, page: u32) -> Option<PageResult> {
        match self.request_page(page).await {
            Ok(result) if result.groups.is_empty() => {
                debug!("Page {} has no groups, ending pagination", page);
                None
            }
            Ok(result) => Some(result),
            Err(e) => {
                warn!("Page {} fetch failed, ending pagination: {}", page, e);
                None
            }
        }
    }

    async fn request_page(&self, page: u32) -> ScreenerResult<PageResult> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("page", page.to_string()),
                ("limit", self.page_limit.to_string()),
                ("unknown", "true".to_string()),
                ("sort_key", "feetvlratio".to_string()),
                ("order_by", "desc".to_string()),
            ])
            .send()
            .await
            .map_err(|e| ScreenerError::Network {
                message: format!("Primary API request failed for page {}", page),
                source: Some(e.into()),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScreenerError::Network {
                message: format!("Primary API error {} on page {}: {}", status, page, body),
                source: None,
            });
        }

        response
            .json::<PageResult>()
            .await
            .map_err(|e| ScreenerError::DataParsing {
                context: format!("Primary API payload for page {}", page),
                source: e.into(),
            })
    }
}
