//! Yahoo Finance chart API client
//!
//! Fetches daily OHLC history from
//! `https://query1.finance.yahoo.com/v8/finance/chart/<symbol>`.

use anyhow::{anyhow, Result};
use chrono::{TimeZone, Utc};
use reqwest::Client;

use crate::models::OhlcRow;
use crate::services::source::EquityHistorySource;

const CHART_API_BASE: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Client for the Yahoo Finance v8 chart endpoint.
#[derive(Debug, Clone)]
pub struct YahooClient {
    http: Client,
}

impl YahooClient {
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    async fn fetch_history(&self, symbol: &str, range: &str) -> Result<Vec<OhlcRow>> {
        let url = format!("{}/{}", CHART_API_BASE, symbol);

        log::debug!("fetching {} history for {}", range, symbol);
        let response = self
            .http
            .get(&url)
            .query(&[("range", range), ("interval", "1d")])
            .header(
                "User-Agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "failed to fetch history for {}: {}",
                symbol,
                response.status()
            ));
        }

        let body: serde_json::Value = response.json().await?;
        parse_chart_response(&body, symbol)
    }
}

impl EquityHistorySource for YahooClient {
    async fn daily_ohlc(&self, symbol: &str, range: &str) -> Result<Vec<OhlcRow>> {
        self.fetch_history(symbol, range).await
    }
}

/// Parse the v8 chart response into OHLC rows.
///
/// Rows where any of the four prices is null (halted or partial sessions)
/// are dropped so the four arrays stay aligned and equal-length.
fn parse_chart_response(body: &serde_json::Value, symbol: &str) -> Result<Vec<OhlcRow>> {
    let chart = &body["chart"];

    if !chart["error"].is_null() {
        let description = chart["error"]["description"]
            .as_str()
            .unwrap_or("unknown error");
        return Err(anyhow!("chart API error for {}: {}", symbol, description));
    }

    let result = chart["result"]
        .get(0)
        .ok_or_else(|| anyhow!("no chart result for {}", symbol))?;

    // An empty window comes back without a timestamp array.
    let timestamps = match result.get("timestamp").and_then(|t| t.as_array()) {
        Some(t) => t,
        None => return Ok(Vec::new()),
    };

    let quote = result["indicators"]["quote"]
        .get(0)
        .ok_or_else(|| anyhow!("no quote data for {}", symbol))?;

    let mut rows = Vec::with_capacity(timestamps.len());
    for (i, ts) in timestamps.iter().enumerate() {
        let ts = ts
            .as_i64()
            .ok_or_else(|| anyhow!("invalid timestamp for {}", symbol))?;
        let open = quote["open"][i].as_f64();
        let high = quote["high"][i].as_f64();
        let low = quote["low"][i].as_f64();
        let close = quote["close"][i].as_f64();

        if let (Some(open), Some(high), Some(low), Some(close)) = (open, high, low, close) {
            let date = Utc
                .timestamp_opt(ts, 0)
                .single()
                .ok_or_else(|| anyhow!("timestamp out of range for {}", symbol))?
                .format("%Y-%m-%d")
                .to_string();
            rows.push(OhlcRow {
                date,
                open,
                high,
                low,
                close,
            });
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aligned_ohlc_rows() {
        let body = serde_json::json!({
            "chart": {
                "result": [{
                    "timestamp": [1704153600, 1704240000],
                    "indicators": {
                        "quote": [{
                            "open": [4745.2, 4725.1],
                            "high": [4754.3, 4729.3],
                            "low": [4722.7, 4699.7],
                            "close": [4742.8, 4704.8]
                        }]
                    }
                }],
                "error": null
            }
        });

        let rows = parse_chart_response(&body, "^GSPC").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2024-01-02");
        assert_eq!(rows[0].open, 4745.2);
        assert_eq!(rows[1].close, 4704.8);
    }

    #[test]
    fn drops_rows_with_null_prices() {
        let body = serde_json::json!({
            "chart": {
                "result": [{
                    "timestamp": [1704153600, 1704240000, 1704326400],
                    "indicators": {
                        "quote": [{
                            "open": [1.0, null, 3.0],
                            "high": [1.5, 2.5, 3.5],
                            "low": [0.5, 1.5, 2.5],
                            "close": [1.2, 2.2, 3.2]
                        }]
                    }
                }],
                "error": null
            }
        });

        let rows = parse_chart_response(&body, "^RUT").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2024-01-02");
        assert_eq!(rows[1].date, "2024-01-04");
    }

    #[test]
    fn chart_error_propagates() {
        let body = serde_json::json!({
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        });

        let err = parse_chart_response(&body, "^NOPE").unwrap_err();
        assert!(err.to_string().contains("symbol may be delisted"));
    }

    #[test]
    fn missing_timestamps_mean_empty_window() {
        let body = serde_json::json!({
            "chart": {
                "result": [{"meta": {}, "indicators": {"quote": [{}]}}],
                "error": null
            }
        });

        let rows = parse_chart_response(&body, "^GSPC").unwrap();
        assert!(rows.is_empty());
    }
}
