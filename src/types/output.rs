//! Output records and the response envelope

use chrono::Local;
use serde::Serialize;

/// A pool that survived filtering, with enrichment data and derived
/// metrics. All numeric fields are rounded to 2 decimal places for
/// presentation; the filter itself ran on the raw values.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedPool {
    pub pair_name: String,
    pub pair_link: String,
    pub address: String,
    pub liquidity: f64,
    pub base_fee: f64,
    pub trade_volume_24h: f64,
    pub fees_24h: f64,
    pub volume_5min: f64,
    pub fees_5min: f64,
    pub apd_5min: f64,
    pub apr: f64,
    pub fdv: f64,
    pub dex_link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    NoData,
    Error,
}

/// The fixed envelope returned by the data endpoint. Empty results are a
/// success case (`no_data`), never an error.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse {
    pub data: Vec<EnrichedPool>,
    pub last_update: String,
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DataResponse {
    pub fn success(data: Vec<EnrichedPool>) -> Self {
        let status = if data.is_empty() {
            ResponseStatus::NoData
        } else {
            ResponseStatus::Success
        };
        Self {
            data,
            last_update: Self::timestamp(),
            status,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            last_update: Self::timestamp(),
            status: ResponseStatus::Error,
            error: Some(message.into()),
        }
    }

    fn timestamp() -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
