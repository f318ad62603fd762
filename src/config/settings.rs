//! Screener configuration settings and environment variable handling

use rust_decimal::prelude::*;
use std::env;
use std::str::FromStr;

use crate::types::FilterParams;

// Pagination constants. The page size and sort order are part of the
// primary API contract; the page ceiling guarantees termination even when
// the upstream never signals end-of-data.
pub const PAGE_LIMIT: u32 = 100;
pub const DEFAULT_MAX_PAGES: u32 = 10;

// Pacing between upstream calls. These are a rate-limiting discipline
// toward uncontrolled third-party APIs, not a tuning knob.
pub const DEFAULT_PAGE_DELAY_MS: u64 = 500;
pub const DEFAULT_PAIR_DELAY_MS: u64 = 200;

pub const DEFAULT_PRIMARY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ENRICH_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_PRIMARY_BASE_URL: &str = "https://app.meteora.ag/clmm-api/pair/all_by_groups";
pub const DEFAULT_DEXSCREENER_BASE_URL: &str = "https://api.dexscreener.com/latest/dex/pairs/solana";
pub const DEFAULT_EXPLORER_LINK_BASE: &str = "https://app.meteora.ag/dlmm";
pub const DEFAULT_DEXSCREENER_LINK_BASE: &str = "https://dexscreener.com";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    pub primary_base_url: String,
    pub dexscreener_base_url: String,
    pub explorer_link_base: String,
    pub dexscreener_link_base: String,
    pub page_limit: u32,
    pub max_pages: u32,
    pub page_delay_ms: u64,
    pub pair_delay_ms: u64,
    pub primary_timeout_secs: u64,
    pub enrich_timeout_secs: u64,
    pub host: String,
    pub port: u16,
    pub default_filters: FilterParams,
}

impl Config {
    pub fn load() -> Self {
        let defaults = FilterParams::default();
        Self {
            primary_base_url: env::var("PRIMARY_API_URL")
                .unwrap_or_else(|_| DEFAULT_PRIMARY_BASE_URL.to_string()),
            dexscreener_base_url: env::var("DEXSCREENER_API_URL")
                .unwrap_or_else(|_| DEFAULT_DEXSCREENER_BASE_URL.to_string()),
            explorer_link_base: env::var("EXPLORER_LINK_BASE")
                .unwrap_or_else(|_| DEFAULT_EXPLORER_LINK_BASE.to_string()),
            dexscreener_link_base: env::var("DEXSCREENER_LINK_BASE")
                .unwrap_or_else(|_| DEFAULT_DEXSCREENER_LINK_BASE.to_string()),
            page_limit: PAGE_LIMIT,
            max_pages: env::var("MAX_PAGES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_PAGES)
                .max(1),
            page_delay_ms: env::var("PAGE_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PAGE_DELAY_MS),
            pair_delay_ms: env::var("PAIR_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PAIR_DELAY_MS),
            primary_timeout_secs: env::var("PRIMARY_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PRIMARY_TIMEOUT_SECS)
                .max(1),
            enrich_timeout_secs: env::var("ENRICH_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_ENRICH_TIMEOUT_SECS)
                .max(1),
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            default_filters: FilterParams {
                min_apr: env::var("MIN_APR")
                    .ok()
                    .and_then(|s| Decimal::from_str(&s).ok())
                    .unwrap_or(defaults.min_apr),
                max_apr: env::var("MAX_APR")
                    .ok()
                    .and_then(|s| Decimal::from_str(&s).ok())
                    .unwrap_or(defaults.max_apr),
                min_volume: env::var("MIN_VOLUME_24H")
                    .ok()
                    .and_then(|s| Decimal::from_str(&s).ok())
                    .unwrap_or(defaults.min_volume),
                min_liquidity: env::var("MIN_LIQUIDITY")
                    .ok()
                    .and_then(|s| Decimal::from_str(&s).ok())
                    .unwrap_or(defaults.min_liquidity),
            },
        }
    }
}
