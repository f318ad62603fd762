//! Filter bounds for the screening predicate

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const DEFAULT_MIN_APR: Decimal = dec!(50);
pub const DEFAULT_MAX_APR: Decimal = dec!(500);
pub const DEFAULT_MIN_VOLUME_24H: Decimal = dec!(200_000);
pub const DEFAULT_MIN_LIQUIDITY: Decimal = dec!(10_000);

/// Numeric bounds applied to raw pool values before enrichment. Inverted
/// bounds are accepted and simply match nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    pub min_apr: Decimal,
    pub max_apr: Decimal,
    pub min_volume: Decimal,
    pub min_liquidity: Decimal,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            min_apr: DEFAULT_MIN_APR,
            max_apr: DEFAULT_MAX_APR,
            min_volume: DEFAULT_MIN_VOLUME_24H,
            min_liquidity: DEFAULT_MIN_LIQUIDITY,
        }
    }
}

impl FilterParams {
    /// APR bounds are strict on both ends; the volume and liquidity bounds
    /// are strict lower bounds.
    pub fn matches(&self, apr: Decimal, volume_24h: Decimal, liquidity: Decimal) -> bool {
        self.min_apr < apr
            && apr < self.max_apr
            && volume_24h > self.min_volume
            && liquidity > self.min_liquidity
    }
}
