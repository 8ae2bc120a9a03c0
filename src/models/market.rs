//! Equity market data models

use serde::{Deserialize, Serialize};

/// A chartable instrument: the upstream symbol plus a human-readable name.
///
/// Instruments are static, defined once at startup.
#[derive(Debug, Clone, Copy)]
pub struct Instrument {
    /// Upstream ticker symbol (e.g. `^GSPC`)
    pub symbol: &'static str,
    /// Display name used in chart titles
    pub display_name: &'static str,
}

/// One day of OHLC price data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcRow {
    /// Trading date (YYYY-MM-DD)
    pub date: String,
    /// Opening price
    pub open: f64,
    /// Intraday high
    pub high: f64,
    /// Intraday low
    pub low: f64,
    /// Closing price
    pub close: f64,
}
