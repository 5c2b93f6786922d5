//! Gainers/losers and watchlist views
//!
//! Computed on request straight from the market data gateway; independent
//! of the alerting core.

use super::DashboardState;
use crate::config::TrackedSymbol;
use futures_util::future::join_all;
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Reverse;

/// One row of the gainers/losers tables
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mover {
    pub symbol: String,
    pub company: String,
    pub change_pct: Decimal,
}

/// Biggest positive and negative movers among tracked symbols
#[derive(Debug, Clone, Default, Serialize)]
pub struct Movers {
    /// change > 0, largest first
    pub gainers: Vec<Mover>,
    /// change < 0, most negative first
    pub losers: Vec<Mover>,
}

impl Movers {
    /// Split and rank movers, keeping at most `limit` of each side
    pub fn rank(movers: Vec<Mover>, limit: usize) -> Self {
        let (mut gainers, mut losers): (Vec<_>, Vec<_>) = movers
            .into_iter()
            .filter(|m| !m.change_pct.is_zero())
            .partition(|m| m.change_pct > Decimal::ZERO);

        gainers.sort_by_key(|m| Reverse(m.change_pct));
        losers.sort_by_key(|m| m.change_pct);
        gainers.truncate(limit);
        losers.truncate(limit);

        Self { gainers, losers }
    }
}

/// One watchlist row with its intraday closes
#[derive(Debug, Clone, Serialize)]
pub struct WatchlistEntry {
    pub symbol: String,
    pub company: String,
    pub change_pct: Option<Decimal>,
    pub series: Vec<Decimal>,
}

async fn fetch_mover(state: &DashboardState, tracked: &TrackedSymbol) -> Option<Mover> {
    let result =
        tokio::time::timeout(state.gateway_timeout, state.market.change_pct(&tracked.symbol)).await;

    match result {
        Ok(Ok(observation)) => Some(Mover {
            symbol: tracked.symbol.clone(),
            company: tracked.company.clone(),
            change_pct: observation.change_pct,
        }),
        _ => None,
    }
}

/// Gainers and losers across all tracked symbols; unavailable symbols are omitted
pub async fn movers(state: &DashboardState) -> Movers {
    let fetched = join_all(state.symbols.iter().map(|t| fetch_mover(state, t))).await;
    Movers::rank(
        fetched.into_iter().flatten().collect(),
        state.settings.movers_limit,
    )
}

async fn fetch_watch_entry(state: &DashboardState, tracked: &TrackedSymbol) -> WatchlistEntry {
    let series = tokio::time::timeout(
        state.gateway_timeout,
        state.market.intraday_series(&tracked.symbol),
    )
    .await
    .ok()
    .and_then(|r| r.ok())
    .unwrap_or_default();

    let change_pct = crate::market::change_from_series(&series);

    WatchlistEntry {
        symbol: tracked.symbol.clone(),
        company: tracked.company.clone(),
        change_pct,
        series,
    }
}

/// Watchlist rows in configuration order
pub async fn watchlist(state: &DashboardState) -> Vec<WatchlistEntry> {
    join_all(state.watchlist.iter().map(|t| fetch_watch_entry(state, t))).await
}
