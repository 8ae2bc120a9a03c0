//! Chart specification models
//!
//! Serializes to the figure JSON consumed by Plotly.js in the browser:
//! a `{data, layout}` pair per chart, with internally tagged trace types.

use serde::Serialize;

use crate::models::{OhlcRow, RateObservation};

/// A single drawable trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// Candlestick trace built from four aligned OHLC arrays.
    Candlestick {
        x: Vec<String>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
    },
    /// Line trace (points connected by straight lines, no markers).
    Scatter {
        x: Vec<String>,
        y: Vec<Option<f64>>,
        mode: String,
        name: String,
    },
}

impl Trace {
    /// Candlestick trace from daily OHLC rows.
    pub fn candlestick(rows: &[OhlcRow]) -> Self {
        Trace::Candlestick {
            x: rows.iter().map(|r| r.date.clone()).collect(),
            open: rows.iter().map(|r| r.open).collect(),
            high: rows.iter().map(|r| r.high).collect(),
            low: rows.iter().map(|r| r.low).collect(),
            close: rows.iter().map(|r| r.close).collect(),
        }
    }

    /// Lines-mode scatter trace from rate observations, labeled by name.
    pub fn lines(name: &str, observations: &[RateObservation]) -> Self {
        Trace::Scatter {
            x: observations.iter().map(|o| o.date.clone()).collect(),
            y: observations.iter().map(|o| o.value).collect(),
            mode: "lines".to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeslider: Option<RangeSlider>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendTitle {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: LegendTitle,
}

/// Chart layout: title, axis labels, display flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

impl Layout {
    /// Layout for a price history chart, with the range slider disabled.
    pub fn price_history(title: &str) -> Self {
        Layout {
            title: title.to_string(),
            xaxis: Axis {
                title: "Date".to_string(),
                rangeslider: Some(RangeSlider { visible: false }),
            },
            yaxis: Axis {
                title: "Price".to_string(),
                rangeslider: None,
            },
            legend: None,
        }
    }

    /// Layout for the multi-line rates chart, with a "Duration" legend.
    pub fn rate_history(title: &str) -> Self {
        Layout {
            title: title.to_string(),
            xaxis: Axis {
                title: "Date".to_string(),
                rangeslider: None,
            },
            yaxis: Axis {
                title: "Rate (%)".to_string(),
                rangeslider: None,
            },
            legend: Some(Legend {
                title: LegendTitle {
                    text: "Duration".to_string(),
                },
            }),
        }
    }
}

/// One renderable chart: traces plus layout. Built fresh on every tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// The three charts of one refresh tick, in fixed display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartsPayload {
    pub r2000: ChartSpec,
    pub sp500: ChartSpec,
    pub tbill: ChartSpec,
}
