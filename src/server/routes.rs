//! HTTP routes: the screener data endpoint and a health probe

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    server::state::AppState,
    types::{DataResponse, FilterParams},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/data", get(get_data))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Optional numeric query parameters for the data endpoint. Missing ones
/// fall back to the configured defaults; no cross-field validation is
/// applied, so inverted bounds just yield an empty set.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub min_apr: Option<f64>,
    pub max_apr: Option<f64>,
    pub min_volume: Option<f64>,
    pub min_liquidity: Option<f64>,
}

impl FilterQuery {
    pub fn resolve(&self, defaults: &FilterParams) -> FilterParams {
        let bound =
            |value: Option<f64>, fallback: Decimal| value.and_then(Decimal::from_f64).unwrap_or(fallback);

        FilterParams {
            min_apr: bound(self.min_apr, defaults.min_apr),
            max_apr: bound(self.max_apr, defaults.max_apr),
            min_volume: bound(self.min_volume, defaults.min_volume),
            min_liquidity: bound(self.min_liquidity, defaults.min_liquidity),
        }
    }
}

/// GET /api/data
///
/// Runs the whole pipeline for this request and always answers with a
/// well-formed envelope; a pipeline failure becomes `status: "error"`.
async fn get_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Json<DataResponse> {
    let request_id = Uuid::new_v4();
    let filters = query.resolve(&state.config.default_filters);

    info!(
        "[{}] Screening request: APR {}..{}, volume > {}, liquidity > {}",
        request_id, filters.min_apr, filters.max_apr, filters.min_volume, filters.min_liquidity
    );

    match state.aggregator.build_dataset(&filters).await {
        Ok(pools) => {
            info!("[{}] Screening finished with {} pools", request_id, pools.len());
            Json(DataResponse::success(pools))
        }
        Err(e) => {
            error!("[{}] Screening pipeline failed: {}", request_id, e);
            Json(DataResponse::error(e.to_string()))
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: String,
    timestamp: DateTime<Utc>,
    version: String,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn missing_parameters_take_the_defaults() {
        let defaults = FilterParams::default();
        let resolved = FilterQuery::default().resolve(&defaults);
        assert_eq!(resolved, defaults);
    }

    #[test]
    fn provided_parameters_override_the_defaults() {
        let defaults = FilterParams::default();
        let query = FilterQuery {
            min_apr: Some(10.0),
            max_apr: None,
            min_volume: Some(1_000.0),
            min_liquidity: None,
        };

        let resolved = query.resolve(&defaults);
        assert_eq!(resolved.min_apr, dec!(10));
        assert_eq!(resolved.max_apr, defaults.max_apr);
        assert_eq!(resolved.min_volume, dec!(1_000));
        assert_eq!(resolved.min_liquidity, defaults.min_liquidity);
    }

    #[test]
    fn inverted_bounds_are_accepted() {
        let query = FilterQuery {
            min_apr: Some(500.0),
            max_apr: Some(50.0),
            ..FilterQuery::default()
        };

        let resolved = query.resolve(&FilterParams::default());
        assert!(resolved.min_apr > resolved.max_apr);
    }
}
