//! Recommendation engine configuration.

use tracing::warn;

/// Environment variable overriding the default result size.
pub const LIMIT_ENV: &str = "STOREFRONT_RELATED_LIMIT";

/// Tuning for related-product lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedConfig {
    /// Maximum number of products returned
    pub limit: usize,
    /// Lower edge of the price band, as a factor of the reference price
    pub price_floor: f64,
    /// Upper edge of the price band, as a factor of the reference price
    pub price_ceiling: f64,
    /// In-band matches needed before out-of-band products are left out
    pub min_price_matches: usize,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            limit: 4,
            price_floor: 0.7,
            price_ceiling: 1.3,
            min_price_matches: 3,
        }
    }
}

impl RelatedConfig {
    /// Defaults, with the limit taken from [`LIMIT_ENV`] when it parses.
    pub fn from_env() -> Self {
        Self::from_limit_var(std::env::var(LIMIT_ENV).ok().as_deref())
    }

    /// Defaults, with the limit taken from `raw` when it parses.
    pub fn from_limit_var(raw: Option<&str>) -> Self {
        let config = Self::default();
        let Some(raw) = raw else {
            return config;
        };
        match raw.trim().parse::<usize>() {
            Ok(limit) => config.with_limit(limit),
            Err(_) => {
                warn!(value = %raw, "ignoring unparseable {LIMIT_ENV}");
                config
            }
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_price_band(mut self, floor: f64, ceiling: f64) -> Self {
        self.price_floor = floor;
        self.price_ceiling = ceiling;
        self
    }

    pub fn with_min_price_matches(mut self, min: usize) -> Self {
        self.min_price_matches = min;
        self
    }

    /// Inclusive price bounds around `reference`.
    pub fn band(&self, reference: f64) -> (f64, f64) {
        (reference * self.price_floor, reference * self.price_ceiling)
    }
}
