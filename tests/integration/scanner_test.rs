//! Scanner behaviour over the public API

use crate::support::{StaticMarket, StaticNews};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};
use stock_pulse::alert::{AlertStore, Mood};
use stock_pulse::config::{GatePolicy, TrackedSymbol};
use stock_pulse::scanner::{Clock, ScanSettings, Scanner, SkipReason};

fn settings(gate: GatePolicy) -> ScanSettings {
    ScanSettings {
        price_threshold: dec!(1.5),
        min_composite: 3,
        gate,
        gateway_timeout: std::time::Duration::from_secs(5),
        interval: std::time::Duration::from_secs(300),
    }
}

fn symbols() -> Vec<TrackedSymbol> {
    vec![
        TrackedSymbol::new("RELIANCE.NS", "Reliance Industries"),
        TrackedSymbol::new("TCS.NS", "Tata Consultancy Services"),
        TrackedSymbol::new("INFY.NS", "Infosys"),
        TrackedSymbol::new("HDFCBANK.NS", "HDFC Bank"),
    ]
}

fn fixed_clock(time: DateTime<Utc>) -> Clock {
    Arc::new(move || time)
}

fn market() -> StaticMarket {
    StaticMarket::default()
        // +2.48%
        .with("RELIANCE.NS", vec![dec!(2500), dec!(2562)])
        // +0.50%
        .with("TCS.NS", vec![dec!(4000), dec!(4020)])
        // -2.00%
        .with("INFY.NS", vec![dec!(1500), dec!(1470)])
}

#[tokio::test]
async fn test_full_cycle_outcomes() {
    let news = Arc::new(
        StaticNews::default()
            .with("Reliance Industries", 0.35)
            .with("Infosys", 0.0),
    );
    let store = AlertStore::new(20, Duration::minutes(30));
    let scanner = Scanner::new(
        Arc::new(market()),
        Arc::clone(&news),
        symbols(),
        settings(GatePolicy::Composite),
        store.clone(),
    )
    .with_clock(fixed_clock(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()));

    let report = scanner.scan_cycle().await;

    assert_eq!(report.evaluated(), 4);
    assert_eq!(report.fired.len(), 1);
    assert_eq!(report.fired[0].symbol, "RELIANCE.NS");
    assert_eq!(report.fired[0].change_pct, dec!(2.48));
    assert_eq!(report.fired[0].score, 4);
    assert_eq!(report.fired[0].mood, Mood::Positive);

    assert_eq!(
        report.skipped,
        vec![
            ("TCS.NS".to_string(), SkipReason::BelowThreshold),
            // 2 price + 0 sentiment
            ("INFY.NS".to_string(), SkipReason::ScoreTooLow),
            ("HDFCBANK.NS".to_string(), SkipReason::NoPriceData),
        ]
    );

    // TCS and HDFC never reach the news gateway
    assert_eq!(news.calls(), 2);
    assert_eq!(store.snapshot(10).await.len(), 1);
}

#[tokio::test]
async fn test_cooldown_across_cycles() {
    let news = Arc::new(StaticNews::default().with("Reliance Industries", -0.5));
    let store = AlertStore::new(20, Duration::minutes(30));
    let first = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
    let time = Arc::new(Mutex::new(first));
    let handle = Arc::clone(&time);
    let scanner = Scanner::new(
        Arc::new(market()),
        Arc::clone(&news),
        vec![TrackedSymbol::new("RELIANCE.NS", "Reliance Industries")],
        settings(GatePolicy::Composite),
        store.clone(),
    )
    .with_clock(Arc::new(move || *handle.lock().unwrap()));

    assert_eq!(scanner.scan_cycle().await.fired.len(), 1);

    *time.lock().unwrap() = first + Duration::minutes(29);
    let report = scanner.scan_cycle().await;
    assert_eq!(
        report.skipped,
        vec![("RELIANCE.NS".to_string(), SkipReason::Throttled)]
    );
    assert_eq!(news.calls(), 1);

    *time.lock().unwrap() = first + Duration::minutes(31);
    let report = scanner.scan_cycle().await;
    assert_eq!(report.fired.len(), 1);
    assert_eq!(report.fired[0].mood, Mood::Negative);

    let feed = store.snapshot(10).await;
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].fired_at, first + Duration::minutes(31));
}

#[tokio::test]
async fn test_price_only_gate_with_news_outage() {
    // No polarity configured: every news request fails
    let news = Arc::new(StaticNews::default());
    let store = AlertStore::new(20, Duration::minutes(30));
    let scanner = Scanner::new(
        Arc::new(market()),
        Arc::clone(&news),
        symbols(),
        settings(GatePolicy::PriceOnly),
        store,
    );

    let report = scanner.scan_cycle().await;
    let fired: Vec<&str> = report.fired.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(fired, vec!["RELIANCE.NS", "INFY.NS"]);

    for record in &report.fired {
        assert_eq!(record.polarity, 0.0);
        assert_eq!(record.mood, Mood::Positive);
        assert!(record.headline.is_none());
    }
}
