pub mod charts;
pub mod dashboard;
pub mod health;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(dashboard::index)).service(
        web::scope("/api/v1")
            .configure(health::config)
            .configure(charts::config),
    );
}
