//! Scan scheduler
//!
//! Drives the decision loop: one pass over every tracked symbol, then a
//! fixed pause, forever. Per symbol:
//! 1. Fetch the price change (skip on any failure)
//! 2. Skip below the price threshold or while throttled
//! 3. Fetch news sentiment (failure means neutral)
//! 4. Score, gate, publish

use super::{Outcome, ScanReport, SkipReason};
use crate::alert::{AlertRecord, AlertStore, Assessment};
use crate::config::{Config, GatePolicy, TrackedSymbol};
use crate::error::GatewayError;
use crate::market::{MarketDataGateway, PriceObservation};
use crate::news::{NewsSentimentGateway, SentimentObservation};
use crate::telemetry::{self, GatewayMetric};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Decision and cadence parameters for the scanner
#[derive(Debug, Clone)]
pub struct ScanSettings {
    pub price_threshold: Decimal,
    pub min_composite: u8,
    pub gate: GatePolicy,
    /// Deadline applied to every gateway call
    pub gateway_timeout: Duration,
    /// Pause between cycles
    pub interval: Duration,
}

impl ScanSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            price_threshold: config.alert.price_threshold,
            min_composite: config.alert.min_composite,
            gate: config.alert.gate,
            gateway_timeout: config.scanner.gateway_timeout(),
            interval: config.scanner.interval(),
        }
    }
}

/// Wall-clock source for throttle checks and alert timestamps
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Periodic scanner over a fixed symbol set
pub struct Scanner<M: ?Sized, N: ?Sized> {
    market: Arc<M>,
    news: Arc<N>,
    symbols: Vec<TrackedSymbol>,
    settings: ScanSettings,
    store: AlertStore,
    clock: Clock,
}

impl<M, N> Scanner<M, N>
where
    M: MarketDataGateway + ?Sized + 'static,
    N: NewsSentimentGateway + ?Sized + 'static,
{
    /// Create a new scanner. `symbols` order is the scan order.
    pub fn new(
        market: Arc<M>,
        news: Arc<N>,
        symbols: Vec<TrackedSymbol>,
        settings: ScanSettings,
        store: AlertStore,
    ) -> Self {
        Self {
            market,
            news,
            symbols,
            settings,
            store,
            clock: Arc::new(Utc::now),
        }
    }

    /// Replace the wall clock, e.g. with a fixed or simulated one
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    pub fn store(&self) -> &AlertStore {
        &self.store
    }

    /// Run a gateway call under the configured deadline
    async fn with_deadline<T>(
        &self,
        call: impl std::future::Future<Output = Result<T, GatewayError>>,
    ) -> Result<T, GatewayError> {
        let timeout = self.settings.gateway_timeout;
        tokio::time::timeout(timeout, call)
            .await
            .unwrap_or(Err(GatewayError::Timeout(timeout)))
    }

    /// Price change for `symbol`, or `None` when unavailable for any reason
    async fn observe_price(&self, symbol: &str) -> Option<PriceObservation> {
        let started = Instant::now();
        let result = self.with_deadline(self.market.change_pct(symbol)).await;
        telemetry::record_gateway_latency(GatewayMetric::MarketData, started.elapsed());

        match result {
            Ok(observation) => Some(observation),
            Err(e) => {
                tracing::debug!(symbol, reason = e.kind(), error = %e, "No price data");
                None
            }
        }
    }

    /// News sentiment for `company`; neutral when unavailable
    async fn observe_sentiment(&self, company: &str) -> SentimentObservation {
        let started = Instant::now();
        let result = self.with_deadline(self.news.sentiment(company)).await;
        telemetry::record_gateway_latency(GatewayMetric::News, started.elapsed());

        result.unwrap_or_else(|e| {
            tracing::debug!(company, reason = e.kind(), error = %e, "No sentiment data");
            SentimentObservation::neutral(company)
        })
    }

    fn passes_gate(&self, assessment: &Assessment) -> bool {
        match self.settings.gate {
            GatePolicy::Composite => assessment.composite() >= self.settings.min_composite,
            GatePolicy::PriceOnly => true,
        }
    }

    /// Evaluate one symbol, publishing an alert if it fires
    ///
    /// The clock is read when the throttle is consulted and again when the
    /// alert is stamped, so slow gateway calls never backdate an alert.
    pub async fn evaluate(&self, tracked: &TrackedSymbol) -> Outcome {
        let symbol = tracked.symbol.as_str();

        let Some(price) = self.observe_price(symbol).await else {
            return Outcome::Skipped(SkipReason::NoPriceData);
        };

        if price.change_pct.abs() < self.settings.price_threshold {
            tracing::debug!(symbol, change_pct = %price.change_pct, "Below price threshold");
            return Outcome::Skipped(SkipReason::BelowThreshold);
        }

        if !self.store.may_alert(symbol, self.now()).await {
            tracing::debug!(symbol, "Alert throttled");
            return Outcome::Skipped(SkipReason::Throttled);
        }

        let sentiment = self.observe_sentiment(&tracked.company).await;
        let assessment = Assessment::new(price.change_pct, sentiment.polarity);

        if !self.passes_gate(&assessment) {
            tracing::debug!(
                symbol,
                change_pct = %price.change_pct,
                polarity = sentiment.polarity,
                score = assessment.composite(),
                "Composite score below minimum"
            );
            return Outcome::Skipped(SkipReason::ScoreTooLow);
        }

        let record = AlertRecord {
            id: Uuid::new_v4(),
            symbol: tracked.symbol.clone(),
            company: tracked.company.clone(),
            change_pct: price.change_pct,
            polarity: sentiment.polarity,
            score: assessment.composite(),
            mood: assessment.mood,
            headline: sentiment.headline,
            fired_at: self.now(),
        };

        let feed_len = self.store.publish(record.clone()).await;
        telemetry::record_alert_fired(symbol);
        telemetry::set_feed_len(feed_len);

        tracing::info!(
            symbol,
            company = %record.company,
            change_pct = %record.change_pct,
            score = record.score,
            mood = %record.mood,
            "Alert fired"
        );

        Outcome::Fired(record)
    }

    /// One full pass over every tracked symbol, in configuration order
    pub async fn scan_cycle(&self) -> ScanReport {
        let started = Instant::now();
        let mut report = ScanReport::new(self.now());

        for tracked in &self.symbols {
            let outcome = self.evaluate(tracked).await;
            if let Outcome::Skipped(reason) = &outcome {
                telemetry::record_symbol_skipped(reason.as_str());
            }
            report.record(&tracked.symbol, outcome);
        }

        telemetry::record_scan_cycle(started.elapsed());
        report
    }

    /// Run cycles forever with `settings.interval` between them
    ///
    /// Each cycle runs in its own task; a panic inside one is logged and the
    /// loop carries on with the next cycle.
    pub async fn run(self: Arc<Self>) {
        tracing::info!(
            symbols = self.symbols.len(),
            interval = ?self.settings.interval,
            gate = ?self.settings.gate,
            "Scanner started"
        );

        loop {
            let scanner = Arc::clone(&self);
            match tokio::spawn(async move { scanner.scan_cycle().await }).await {
                Ok(report) => {
                    tracing::info!(
                        evaluated = report.evaluated(),
                        fired = report.fired.len(),
                        skipped = report.skipped.len(),
                        "Scan cycle complete"
                    );
                }
                Err(e) => {
                    tracing::error!(error = %e, "Scan cycle aborted, continuing with next cycle");
                }
            }

            tokio::time::sleep(self.settings.interval).await;
        }
    }

    /// Spawn [`Scanner::run`] as a background task
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
