use actix_web::{HttpResponse, Result};

/// The dashboard page, embedded at compile time.
pub const DASHBOARD_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(DASHBOARD_HTML))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_has_the_three_chart_regions_and_timer() {
        assert!(DASHBOARD_HTML.contains("id=\"r2000-graph\""));
        assert!(DASHBOARD_HTML.contains("id=\"sp500-graph\""));
        assert!(DASHBOARD_HTML.contains("id=\"tbill-graph\""));
        assert!(DASHBOARD_HTML.contains("60 * 1000"));
        assert!(DASHBOARD_HTML.contains("/api/v1/charts"));
    }
}
