//! Data source trait definitions
//!
//! The refresh service is written against these traits so it can be driven
//! by stub sources in tests, without a server or network access.

use anyhow::Result;

use crate::models::{OhlcRow, RateObservation};

/// Provider of daily OHLC history for an equity index.
pub trait EquityHistorySource {
    /// Daily OHLC rows for `symbol` over a trailing window such as `"1y"`,
    /// ordered by trading date.
    async fn daily_ohlc(&self, symbol: &str, range: &str) -> Result<Vec<OhlcRow>>;
}

/// Provider of dated observations for an interest rate series.
pub trait RateHistorySource {
    /// Observations for `series_id` from `observation_start` (YYYY-MM-DD)
    /// to the present, ordered by date.
    async fn observations(
        &self,
        series_id: &str,
        observation_start: &str,
    ) -> Result<Vec<RateObservation>>;
}
