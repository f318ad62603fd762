//! DLMM Pool Screener - Main Entry Point

use anyhow::Result;
use dlmm_screener::*;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let _logging_guard = utils::setup_logging()?;

    let config = CONFIG.clone();

    info!("🔭 DLMM Pool Screener v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!("   Primary API: {}", config.primary_base_url);
    info!("   Enrichment API: {}", config.dexscreener_base_url);
    info!(
        "   Pagination: up to {} pages of {}",
        config.max_pages, config.page_limit
    );
    info!(
        "   Pacing: {}ms per page, {}ms per pair",
        config.page_delay_ms, config.pair_delay_ms
    );
    info!(
        "   Default filters: APR {}..{}, volume > {}, liquidity > {}",
        config.default_filters.min_apr,
        config.default_filters.max_apr,
        config.default_filters.min_volume,
        config.default_filters.min_liquidity
    );

    let state = Arc::new(server::AppState::new(config)?);
    server::start_server(state).await
}
