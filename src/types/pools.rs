//! Primary-API payload models (Meteora DLMM grouped pool listings)

use rust_decimal::prelude::*;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

use crate::errors::{ScreenerError, ScreenerResult};

/// One fetched page of grouped pool listings. Created per fetch call and
/// discarded after flattening.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResult {
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// A named collection of pool records as returned by the primary API.
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pairs: Vec<RawPool>,
}

/// A raw pool record. The upstream mixes plain numbers, numeric strings,
/// empty strings and nulls in its metric fields, so they are kept as raw
/// JSON values and normalized per pool. One bad record can then never fail
/// a whole page parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPool {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub apr: Value,
    #[serde(default)]
    pub trade_volume_24h: Value,
    #[serde(default)]
    pub liquidity: Value,
    #[serde(default)]
    pub base_fee_percentage: Value,
    #[serde(default)]
    pub fees_24h: Value,
}

impl RawPool {
    pub fn apr(&self) -> ScreenerResult<Decimal> {
        numeric_field("apr", &self.apr)
    }

    pub fn trade_volume_24h(&self) -> ScreenerResult<Decimal> {
        numeric_field("trade_volume_24h", &self.trade_volume_24h)
    }

    pub fn liquidity(&self) -> ScreenerResult<Decimal> {
        numeric_field("liquidity", &self.liquidity)
    }

    pub fn base_fee_percentage(&self) -> ScreenerResult<Decimal> {
        numeric_field("base_fee_percentage", &self.base_fee_percentage)
    }

    pub fn fees_24h(&self) -> ScreenerResult<Decimal> {
        numeric_field("fees_24h", &self.fees_24h)
    }
}

/// Normalize a raw upstream metric: absent, null and empty-string values are
/// zero; numbers and numeric strings parse to their value; anything else is
/// a malformed field.
pub fn numeric_field(field: &'static str, raw: &Value) -> ScreenerResult<Decimal> {
    match raw {
        Value::Null => Ok(Decimal::ZERO),
        Value::Number(n) => n
            .as_f64()
            .and_then(Decimal::from_f64)
            .ok_or_else(|| ScreenerError::MalformedField {
                field,
                value: n.to_string(),
            }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(Decimal::ZERO);
            }
            Decimal::from_str(trimmed)
                .or_else(|_| Decimal::from_scientific(trimmed))
                .map_err(|_| ScreenerError::MalformedField {
                    field,
                    value: s.clone(),
                })
        }
        other => Err(ScreenerError::MalformedField {
            field,
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn absent_and_null_metrics_normalize_to_zero() {
        assert_eq!(numeric_field("apr", &Value::Null).unwrap(), Decimal::ZERO);

        let pool: RawPool = serde_json::from_value(json!({ "address": "X" })).unwrap();
        assert_eq!(pool.apr().unwrap(), Decimal::ZERO);
        assert_eq!(pool.liquidity().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn empty_string_metric_normalizes_to_zero() {
        assert_eq!(numeric_field("apr", &json!("")).unwrap(), Decimal::ZERO);
        assert_eq!(numeric_field("apr", &json!("  ")).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn numeric_values_parse() {
        assert_eq!(numeric_field("apr", &json!(101.5)).unwrap(), dec!(101.5));
        assert_eq!(numeric_field("apr", &json!("101.5")).unwrap(), dec!(101.5));
        assert_eq!(numeric_field("apr", &json!(42)).unwrap(), dec!(42));
        assert_eq!(numeric_field("apr", &json!("1e3")).unwrap(), dec!(1000));
    }

    #[test]
    fn non_numeric_values_are_malformed() {
        let err = numeric_field("apr", &json!("not-a-number")).unwrap_err();
        assert!(matches!(
            err,
            ScreenerError::MalformedField { field: "apr", .. }
        ));

        assert!(numeric_field("liquidity", &json!(true)).is_err());
        assert!(numeric_field("liquidity", &json!({ "nested": 1 })).is_err());
    }

    #[test]
    fn page_with_missing_arrays_parses() {
        let page: PageResult = serde_json::from_value(json!({})).unwrap();
        assert!(page.groups.is_empty());

        let page: PageResult =
            serde_json::from_value(json!({ "groups": [{ "name": "SOL-USDC" }] })).unwrap();
        assert_eq!(page.groups.len(), 1);
        assert!(page.groups[0].pairs.is_empty());
    }
}
