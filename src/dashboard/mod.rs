//! Web dashboard
//!
//! Read-only HTTP surface over the alert feed and live market views

mod handlers;
mod page;
mod response;
mod views;

pub use handlers::config;
pub use page::{sparkline, DashboardPage};
pub use response::ApiResponse;
pub use views::{Mover, Movers, WatchlistEntry};

use crate::alert::AlertStore;
use crate::config::{Config, DashboardConfig, TrackedSymbol};
use crate::market::MarketDataGateway;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use std::time::Duration;

/// Everything the dashboard handlers read from
pub struct DashboardState {
    pub store: AlertStore,
    pub market: Arc<dyn MarketDataGateway>,
    /// All tracked symbols, for gainers/losers
    pub symbols: Vec<TrackedSymbol>,
    pub watchlist: Vec<TrackedSymbol>,
    pub settings: DashboardConfig,
    pub gateway_timeout: Duration,
}

impl DashboardState {
    pub fn from_config(
        config: &Config,
        store: AlertStore,
        market: Arc<dyn MarketDataGateway>,
    ) -> Self {
        let watchlist = config
            .watchlist
            .iter()
            .filter_map(|symbol| config.tracked(symbol).cloned())
            .collect();

        Self {
            store,
            market,
            symbols: config.symbols.clone(),
            watchlist,
            settings: config.dashboard.clone(),
            gateway_timeout: config.scanner.gateway_timeout(),
        }
    }
}

/// Serve the dashboard until the server is stopped
pub async fn serve(state: DashboardState) -> std::io::Result<()> {
    let addr = (state.settings.bind.clone(), state.settings.port);
    let data = web::Data::new(state);

    tracing::info!(bind = %addr.0, port = addr.1, "Dashboard listening");

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Logger::default())
            .configure(config)
    })
    .bind(addr)?
    .run()
    .await
}
