//! Secondary-API payload models (DexScreener pair lookups)

use rust_decimal::prelude::*;
use serde::Deserialize;

/// `GET {base}/{address}` response body. A null or absent `pairs` array is
/// a normal "no pairs found" answer.
#[derive(Debug, Clone, Deserialize)]
pub struct PairsEnvelope {
    #[serde(default)]
    pub pairs: Option<Vec<PairRecord>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PairRecord {
    #[serde(default)]
    pub volume: VolumeWindows,
    #[serde(default)]
    pub fdv: Option<f64>,
}

/// Trade volume broken down by time window; only the 5-minute window feeds
/// the derived metrics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeWindows {
    #[serde(default)]
    pub m5: Option<f64>,
}

/// Short-window trade data for one pool, keyed by address. The zeroed
/// record is the valid terminal state when no pairs were found, not an
/// error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentRecord {
    pub volume_5min: Decimal,
    pub fdv: Decimal,
}

impl From<PairRecord> for EnrichmentRecord {
    fn from(pair: PairRecord) -> Self {
        Self {
            volume_5min: pair
                .volume
                .m5
                .and_then(Decimal::from_f64)
                .unwrap_or_default(),
            fdv: pair.fdv.and_then(Decimal::from_f64).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn first_pair_converts_to_record() {
        let envelope: PairsEnvelope = serde_json::from_value(json!({
            "pairs": [{ "volume": { "m5": 1000.0, "h24": 9.9 }, "fdv": 5000 }]
        }))
        .unwrap();

        let record: EnrichmentRecord = envelope.pairs.unwrap().remove(0).into();
        assert_eq!(record.volume_5min, dec!(1000));
        assert_eq!(record.fdv, dec!(5000));
    }

    #[test]
    fn null_pairs_is_a_valid_empty_response() {
        let envelope: PairsEnvelope = serde_json::from_value(json!({ "pairs": null })).unwrap();
        assert!(envelope.pairs.is_none());

        let envelope: PairsEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.pairs.is_none());
    }

    #[test]
    fn missing_windows_zero_out() {
        let envelope: PairsEnvelope =
            serde_json::from_value(json!({ "pairs": [{}] })).unwrap();
        let record: EnrichmentRecord = envelope.pairs.unwrap().remove(0).into();
        assert_eq!(record, EnrichmentRecord::default());
    }
}
