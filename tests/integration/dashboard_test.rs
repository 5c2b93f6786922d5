//! Dashboard routes over a live scanner store

use crate::support::{StaticMarket, StaticNews};
use actix_web::{test, web, App};
use chrono::Duration;
use rust_decimal_macros::dec;
use std::sync::Arc;
use stock_pulse::alert::AlertStore;
use stock_pulse::config::Config;
use stock_pulse::dashboard::{self, DashboardState};
use stock_pulse::scanner::{ScanSettings, Scanner};

const CONFIG: &str = r#"
watchlist = ["AAA"]

[[symbols]]
symbol = "AAA"
company = "Alpha Ltd"

[[symbols]]
symbol = "BBB"
company = "Beta Ltd"
"#;

#[actix_web::test]
async fn test_scan_then_serve_alerts() {
    let config = Config::from_toml(CONFIG).unwrap();
    let market = Arc::new(
        StaticMarket::default()
            .with("AAA", vec![dec!(100), dec!(105)])
            .with("BBB", vec![dec!(100), dec!(99)]),
    );
    let news = Arc::new(StaticNews::default().with("Alpha Ltd", 0.2));

    let store = AlertStore::new(config.alert.feed_capacity, Duration::minutes(30));
    let scanner = Scanner::new(
        Arc::clone(&market),
        news,
        config.symbols.clone(),
        ScanSettings::from_config(&config),
        store.clone(),
    );
    scanner.scan_cycle().await;

    let state = DashboardState::from_config(&config, store, market);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(dashboard::config),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/alerts").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let alerts = body["data"].as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["symbol"], "AAA");
    assert_eq!(alerts[0]["score"], 4);

    let req = test::TestRequest::get().uri("/api/watchlist").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["company"], "Alpha Ltd");

    let req = test::TestRequest::get().uri("/api/movers").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["gainers"][0]["symbol"], "AAA");
    assert_eq!(body["data"]["losers"][0]["symbol"], "BBB");
}
