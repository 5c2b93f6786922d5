//! CLI interface for stock-pulse
//!
//! Provides subcommands for:
//! - `run`: Start the scanner loop and the dashboard
//! - `scan`: Run a single scan cycle and print the result
//! - `config`: Show the effective configuration

mod run;
mod scan;

pub use run::RunArgs;
pub use scan::ScanArgs;

use crate::alert::AlertStore;
use crate::config::Config;
use crate::market::{YahooClient, YahooConfig};
use crate::news::{GoogleNewsClient, GoogleNewsConfig};
use crate::scanner::{ScanSettings, Scanner};
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "stock-pulse")]
#[command(about = "Equity price/news-sentiment alert engine with a live web dashboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the scanner and serve the dashboard
    Run(RunArgs),
    /// Run one scan cycle and print fired alerts
    Scan(ScanArgs),
    /// Show configuration
    Config,
}

/// Production scanner wired to the Yahoo and Google News gateways
pub type LiveScanner = Scanner<YahooClient, GoogleNewsClient>;

/// Build the live gateways and a scanner over a fresh alert store
pub fn build_scanner(config: &Config) -> anyhow::Result<(Arc<LiveScanner>, Arc<YahooClient>)> {
    let timeout = config.scanner.gateway_timeout();

    let market = Arc::new(YahooClient::with_config(YahooConfig::from_settings(
        &config.market_data,
        timeout,
    ))?);
    let news = Arc::new(GoogleNewsClient::with_config(
        GoogleNewsConfig::from_settings(&config.news, timeout),
    )?);

    let store = AlertStore::new(config.alert.feed_capacity, config.alert.cooldown());
    let scanner = Scanner::new(
        Arc::clone(&market),
        news,
        config.symbols.clone(),
        ScanSettings::from_config(config),
        store,
    );

    Ok((Arc::new(scanner), market))
}

/// Print a human-readable configuration summary
pub fn print_config(config: &Config) {
    println!("Current configuration:");
    println!("  Symbols:");
    for tracked in &config.symbols {
        println!("    {:<14} {}", tracked.symbol, tracked.company);
    }
    println!("  Watchlist: {}", config.watchlist.join(", "));
    println!(
        "  Alert: threshold={}%, cooldown={}m, gate={:?}, min_composite={}, feed={}",
        config.alert.price_threshold,
        config.alert.cooldown_minutes,
        config.alert.gate,
        config.alert.min_composite,
        config.alert.feed_capacity
    );
    println!(
        "  Scanner: interval={}s, gateway_timeout={}s",
        config.scanner.interval_secs, config.scanner.gateway_timeout_secs
    );
    println!(
        "  Dashboard: {}:{}",
        config.dashboard.bind, config.dashboard.port
    );
}
