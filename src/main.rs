//! Economic dashboard backend
//!
//! Serves a browser dashboard with three auto-refreshing charts:
//! Russell 2000 and S&P 500 candlesticks plus short-term T-bill rates.
//! Data sources: Yahoo Finance chart API and the FRED observations API.

mod config;   // JSON file + env configuration
mod handlers; // HTTP request handlers
mod models;   // data model definitions
mod services; // data fetching and chart assembly
mod state;    // shared application state

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use crate::config::AppConfig;
use crate::state::AppState;

/// Application entry point.
///
/// Starts the HTTP server on the configured address (default 0.0.0.0:8080).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::load();
    let bind_addr = config.bind_addr();
    let workers = config.server.workers;

    let state = AppState::new(&config).map_err(std::io::Error::other)?;
    let state = web::Data::new(state);

    log::info!("starting econ dashboard on http://{}", bind_addr);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(handlers::config)
    })
    .bind(bind_addr)?;

    if workers > 0 {
        server = server.workers(workers);
    }

    server.run().await
}
