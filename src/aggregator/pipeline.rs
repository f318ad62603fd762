//! The fetch, enrich, filter pipeline driver

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::{
    aggregator::PoolOutcome,
    config::Config,
    errors::ScreenerResult,
    network::{EnrichmentClient, PageFetcher},
    types::{EnrichedPool, EnrichmentRecord, FilterParams, PageResult, RawPool},
    utils::round2,
};

/// 288 five-minute intervals per day; annualizes a 5-minute fee rate into
/// a daily-equivalent percentage of liquidity.
const INTERVALS_PER_DAY: Decimal = dec!(288);
const PERCENT: Decimal = dec!(100);

/// Raw pool metrics after normalization, before filtering.
struct PoolMetrics {
    apr: Decimal,
    volume_24h: Decimal,
    liquidity: Decimal,
    base_fee: Decimal,
    fees_24h: Decimal,
}

/// Drives the whole pipeline: bounded pagination, flatten, filter, per-pool
/// enrichment, metric derivation. One outstanding network call at a time,
/// with fixed pacing delays between upstream calls.
pub struct Aggregator {
    config: Config,
    fetcher: PageFetcher,
    enricher: EnrichmentClient,
}

impl Aggregator {
    pub fn new(config: Config) -> ScreenerResult<Self> {
        let fetcher = PageFetcher::new(&config)?;
        let enricher = EnrichmentClient::new(&config)?;
        Ok(Self {
            config,
            fetcher,
            enricher,
        })
    }

    /// Fetch pages in order until the configured ceiling or the first
    /// terminal page, whichever comes first. Pages already fetched are kept
    /// when a later page fails.
    pub async fn collect_pages(&self) -> Vec<PageResult> {
        let mut pages = Vec::new();

        for page in 0..self.config.max_pages {
            match self.fetcher.fetch_page(page).await {
                Some(result) => {
                    debug!("Fetched page {} with {} groups", page, result.groups.len());
                    pages.push(result);
                }
                None => break,
            }
            // Pacing toward the primary API after each successful page.
            tokio::time::sleep(Duration::from_millis(self.config.page_delay_ms)).await;
        }

        info!("Fetched {} pages from the primary API", pages.len());
        pages
    }

    /// Run the pipeline end to end for one request. Output order matches
    /// page, then group, then pair traversal order of the source data.
    pub async fn build_dataset(&self, filters: &FilterParams) -> ScreenerResult<Vec<EnrichedPool>> {
        let pages = self.collect_pages().await;
        if pages.is_empty() {
            return Ok(Vec::new());
        }

        let mut kept = Vec::new();
        let mut filtered = 0usize;
        let mut skipped = 0usize;

        for page in &pages {
            for group in &page.groups {
                for pool in &group.pairs {
                    match self.process_pool(pool, filters).await {
                        PoolOutcome::Kept(record) => kept.push(record),
                        PoolOutcome::Filtered => filtered += 1,
                        PoolOutcome::Skipped { reason } => {
                            warn!(
                                "Skipping pool '{}' in group '{}': {}",
                                pool.name, group.name, reason
                            );
                            skipped += 1;
                        }
                    }
                    // Pacing toward the secondary API after every pair,
                    // survivor or not.
                    tokio::time::sleep(Duration::from_millis(self.config.pair_delay_ms)).await;
                }
            }
        }

        info!(
            "Screened pools: {} kept, {} filtered, {} skipped",
            kept.len(),
            filtered,
            skipped
        );
        Ok(kept)
    }

    /// Normalize, filter, enrich and assemble one pool. Filtering uses the
    /// raw values; enrichment only runs for survivors.
    async fn process_pool(&self, pool: &RawPool, filters: &FilterParams) -> PoolOutcome {
        let metrics = match normalize(pool) {
            Ok(metrics) => metrics,
            Err(e) => {
                return PoolOutcome::Skipped {
                    reason: e.to_string(),
                };
            }
        };

        if !filters.matches(metrics.apr, metrics.volume_24h, metrics.liquidity) {
            return PoolOutcome::Filtered;
        }

        if pool.address.is_empty() {
            return PoolOutcome::Skipped {
                reason: "missing pool address".to_string(),
            };
        }

        let enrichment = self.enricher.fetch_pair(&pool.address).await;
        PoolOutcome::Kept(self.assemble(pool, &metrics, &enrichment))
    }

    fn assemble(
        &self,
        pool: &RawPool,
        metrics: &PoolMetrics,
        enrichment: &EnrichmentRecord,
    ) -> EnrichedPool {
        let (fees_5min, apd_5min) =
            derive_metrics(enrichment.volume_5min, metrics.base_fee, metrics.liquidity);

        EnrichedPool {
            pair_name: pool.name.clone(),
            pair_link: format!("{}/{}", self.config.explorer_link_base, pool.address),
            address: pool.address.clone(),
            liquidity: round2(metrics.liquidity),
            base_fee: round2(metrics.base_fee),
            trade_volume_24h: round2(metrics.volume_24h),
            fees_24h: round2(metrics.fees_24h),
            volume_5min: round2(enrichment.volume_5min),
            fees_5min: round2(fees_5min),
            apd_5min: round2(apd_5min),
            apr: round2(metrics.apr),
            fdv: round2(enrichment.fdv),
            dex_link: format!("{}/solana/{}", self.config.dexscreener_link_base, pool.address),
        }
    }
}

fn normalize(pool: &RawPool) -> ScreenerResult<PoolMetrics> {
    Ok(PoolMetrics {
        apr: pool.apr()?,
        volume_24h: pool.trade_volume_24h()?,
        liquidity: pool.liquidity()?,
        base_fee: pool.base_fee_percentage()?,
        fees_24h: pool.fees_24h()?,
    })
}

/// Derive the 5-minute fee flow and its daily-equivalent percentage of
/// liquidity. Zero liquidity yields a zero rate rather than a division.
pub fn derive_metrics(
    volume_5min: Decimal,
    base_fee: Decimal,
    liquidity: Decimal,
) -> (Decimal, Decimal) {
    let fees_5min = volume_5min * (base_fee / PERCENT);
    let apd_5min = if liquidity > Decimal::ZERO {
        (fees_5min / liquidity) * INTERVALS_PER_DAY * PERCENT
    } else {
        Decimal::ZERO
    };
    (fees_5min, apd_5min)
}
