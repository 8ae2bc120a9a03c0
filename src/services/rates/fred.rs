//! FRED observations API client
//!
//! Fetches dated rate series from
//! `https://api.stlouisfed.org/fred/series/observations`.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::models::RateObservation;
use crate::services::source::RateHistorySource;

const OBSERVATIONS_URL: &str = "https://api.stlouisfed.org/fred/series/observations";

/// Client for the FRED series/observations endpoint.
#[derive(Debug, Clone)]
pub struct FredClient {
    http: Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<RawObservation>,
}

#[derive(Debug, Deserialize)]
struct RawObservation {
    date: String,
    value: String,
}

impl FredClient {
    pub fn new(http: Client, api_key: String) -> Self {
        Self { http, api_key }
    }

    async fn fetch_observations(
        &self,
        series_id: &str,
        observation_start: &str,
    ) -> Result<Vec<RateObservation>> {
        log::debug!("fetching {} observations from {}", series_id, observation_start);
        let response = self
            .http
            .get(OBSERVATIONS_URL)
            .query(&[
                ("series_id", series_id),
                ("observation_start", observation_start),
                ("api_key", &self.api_key),
                ("file_type", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "failed to fetch series {}: {}",
                series_id,
                response.status()
            ));
        }

        let body: ObservationsResponse = response.json().await?;
        body.observations
            .into_iter()
            .map(|raw| parse_observation(raw, series_id))
            .collect()
    }
}

impl RateHistorySource for FredClient {
    async fn observations(
        &self,
        series_id: &str,
        observation_start: &str,
    ) -> Result<Vec<RateObservation>> {
        self.fetch_observations(series_id, observation_start).await
    }
}

/// FRED marks missing observations with `"."`; anything else must parse.
fn parse_observation(raw: RawObservation, series_id: &str) -> Result<RateObservation> {
    let value = match raw.value.as_str() {
        "." => None,
        v => Some(v.parse::<f64>().map_err(|_| {
            anyhow!("unparseable value {:?} in series {} on {}", v, series_id, raw.date)
        })?),
    };
    Ok(RateObservation {
        date: raw.date,
        value,
    })
}
