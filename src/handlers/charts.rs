use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;

use crate::models::{ApiResponse, ChartsPayload};
use crate::services::refresh;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChartsQuery {
    /// Refresh tick counter sent by the dashboard timer; informational only.
    pub tick: Option<u64>,
}

/// One refresh tick: fetch everything and return the three chart specs.
///
/// A failure anywhere fails the whole response; the page keeps its previous
/// render and retries on the next tick.
pub async fn get_charts(
    state: web::Data<AppState>,
    query: web::Query<ChartsQuery>,
) -> Result<HttpResponse> {
    let tick = query.tick.unwrap_or(0);

    match refresh::update_graphs(tick, &state.equities, &state.rates).await {
        Ok((r2000, sp500, tbill)) => {
            let payload = ChartsPayload {
                r2000,
                sp500,
                tbill,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(payload)))
        }
        Err(e) => {
            log::error!("chart refresh failed on tick {}: {:#}", tick, e);
            let response = ApiResponse::<ChartsPayload>::error(e.to_string());
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/charts", web::get().to(get_charts));
}
