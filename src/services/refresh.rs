//! Per-tick chart assembly
//!
//! On every refresh tick the dashboard asks for three charts: Russell 2000
//! and S&P 500 candlesticks over the trailing year, and the four short-term
//! T-bill rate series as one multi-line chart. This module fetches the raw
//! series and shapes them into Plotly figure specs. Any fetch failure fails
//! the whole tick; there is no retry and no partial result.

use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use futures::future;

use crate::models::{ChartSpec, Instrument, Layout, Trace};
use crate::services::source::{EquityHistorySource, RateHistorySource};

/// The two equity instruments, in display order.
pub const EQUITY_INSTRUMENTS: [Instrument; 2] = [
    Instrument {
        symbol: "^RUT",
        display_name: "Russell 2000",
    },
    Instrument {
        symbol: "^GSPC",
        display_name: "S&P 500",
    },
];

/// Treasury rate series ids by maturity (1 month to 1 year), in legend order.
pub const RATE_SERIES_IDS: [&str; 4] = ["DGS1MO", "DGS3MO", "DGS6MO", "DGS1"];

/// Trailing window requested from the equity source.
const EQUITY_RANGE: &str = "1y";

/// Build the three chart specs for one tick, in fixed display order:
/// Russell 2000, S&P 500, T-bill rates.
///
/// The tick counter is accepted for parity with the timer contract but does
/// not influence the result; the output is a pure function of the sources.
pub async fn update_graphs<E, R>(
    _tick: u64,
    equities: &E,
    rates: &R,
) -> Result<(ChartSpec, ChartSpec, ChartSpec)>
where
    E: EquityHistorySource,
    R: RateHistorySource,
{
    let r2000 = equity_chart(equities, &EQUITY_INSTRUMENTS[0]).await?;
    let sp500 = equity_chart(equities, &EQUITY_INSTRUMENTS[1]).await?;
    let tbill = rate_chart(rates, &one_year_ago(Utc::now().date_naive())).await?;
    Ok((r2000, sp500, tbill))
}

/// One candlestick chart for a single instrument over the trailing year.
async fn equity_chart<E: EquityHistorySource>(
    source: &E,
    instrument: &Instrument,
) -> Result<ChartSpec> {
    let rows = source.daily_ohlc(instrument.symbol, EQUITY_RANGE).await?;
    Ok(ChartSpec {
        data: vec![Trace::candlestick(&rows)],
        layout: Layout::price_history(&format!("{} - 1 Year History", instrument.display_name)),
    })
}

/// One multi-line chart with all four rate series from `observation_start`.
///
/// The four series are fetched concurrently; the merge order follows
/// [`RATE_SERIES_IDS`] and any failed sub-fetch fails the chart.
async fn rate_chart<R: RateHistorySource>(
    source: &R,
    observation_start: &str,
) -> Result<ChartSpec> {
    let fetches = RATE_SERIES_IDS
        .iter()
        .map(|series_id| source.observations(series_id, observation_start));
    let series = future::try_join_all(fetches).await?;

    let data = RATE_SERIES_IDS
        .iter()
        .zip(series.iter())
        .map(|(series_id, observations)| Trace::lines(series_id, observations))
        .collect();

    Ok(ChartSpec {
        data,
        layout: Layout::rate_history("T-bill Rates - 1 Year History"),
    })
}

/// The rate query start bound: 365 calendar days before `today`, YYYY-MM-DD.
pub fn one_year_ago(today: NaiveDate) -> String {
    (today - Duration::days(365)).format("%Y-%m-%d").to_string()
}
