//! Dashboard HTTP handlers

use super::page::DashboardPage;
use super::response::ApiResponse;
use super::{views, DashboardState};
use actix_web::{web, HttpResponse, Result};
use askama::Template;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    pub limit: Option<usize>,
}

/// Render a template into an HTML response
fn render_template<T: Template>(template: &T) -> HttpResponse {
    match template.render() {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            tracing::error!("Template render error: {}", e);
            HttpResponse::InternalServerError().body(format!("Template error: {}", e))
        }
    }
}

/// Full HTML dashboard
pub async fn index(state: web::Data<DashboardState>) -> HttpResponse {
    let alerts = state.store.snapshot(state.settings.alert_limit).await;
    let (movers, watchlist) =
        futures_util::join!(views::movers(&state), views::watchlist(&state));

    render_template(&DashboardPage::new(&alerts, &movers, &watchlist))
}

/// Latest alerts, newest first
pub async fn get_alerts(
    state: web::Data<DashboardState>,
    query: web::Query<AlertQuery>,
) -> Result<HttpResponse> {
    let capacity = state.store.feed_capacity().await;
    let limit = query
        .limit
        .unwrap_or(state.settings.alert_limit)
        .min(capacity);

    let alerts = state.store.snapshot(limit).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(alerts)))
}

/// Top gainers and losers
pub async fn get_movers(state: web::Data<DashboardState>) -> Result<HttpResponse> {
    let movers = views::movers(&state).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(movers)))
}

/// Watchlist with intraday series
pub async fn get_watchlist(state: web::Data<DashboardState>) -> Result<HttpResponse> {
    let watchlist = views::watchlist(&state).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(watchlist)))
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health))
        .service(
            web::scope("/api")
                .route("/alerts", web::get().to(get_alerts))
                .route("/movers", web::get().to(get_movers))
                .route("/watchlist", web::get().to(get_watchlist)),
        );
}
