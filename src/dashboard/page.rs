//! Dashboard page template

use super::views::{Mover, Movers, WatchlistEntry};
use crate::alert::{AlertRecord, Mood};
use askama::Template;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const SPARK_WIDTH: f64 = 120.0;
const SPARK_HEIGHT: f64 = 30.0;

fn change_class(change: Decimal) -> &'static str {
    if change.is_sign_negative() {
        "down"
    } else {
        "up"
    }
}

/// Inline SVG polyline of `series`, scaled to fit
pub fn sparkline(series: &[Decimal]) -> String {
    let values: Vec<f64> = series.iter().filter_map(|d| d.to_f64()).collect();
    if values.len() < 2 {
        return String::from("<span class=\"muted\">n/a</span>");
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = if max > min { max - min } else { 1.0 };
    let step = SPARK_WIDTH / (values.len() - 1) as f64;

    let points: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 * step;
            let y = SPARK_HEIGHT - (v - min) / span * SPARK_HEIGHT;
            format!("{:.1},{:.1}", x, y)
        })
        .collect();

    let stroke = if values[values.len() - 1] >= values[0] {
        "#3fb950"
    } else {
        "#f85149"
    };

    format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\"><polyline fill=\"none\" stroke=\"{stroke}\" stroke-width=\"1.5\" points=\"{points}\"/></svg>",
        w = SPARK_WIDTH,
        h = SPARK_HEIGHT,
        stroke = stroke,
        points = points.join(" ")
    )
}

pub struct AlertRow {
    pub time: String,
    pub company: String,
    pub change: Decimal,
    pub change_class: &'static str,
    pub mood: Mood,
    pub mood_class: &'static str,
    pub headline: String,
}

impl From<&AlertRecord> for AlertRow {
    fn from(alert: &AlertRecord) -> Self {
        Self {
            time: alert.display_time(),
            company: alert.company.clone(),
            change: alert.change_pct,
            change_class: change_class(alert.change_pct),
            mood: alert.mood,
            mood_class: match alert.mood {
                Mood::Positive => "up",
                Mood::Negative => "down",
            },
            headline: alert.headline.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub struct MoverRow {
    pub symbol: String,
    pub company: String,
    pub change: Decimal,
    pub change_class: &'static str,
}

impl From<&Mover> for MoverRow {
    fn from(mover: &Mover) -> Self {
        Self {
            symbol: mover.symbol.clone(),
            company: mover.company.clone(),
            change: mover.change_pct,
            change_class: change_class(mover.change_pct),
        }
    }
}

pub struct MoverTable {
    pub title: &'static str,
    pub rows: Vec<MoverRow>,
}

pub struct WatchlistRow {
    pub symbol: String,
    pub company: String,
    pub change: String,
    pub change_class: &'static str,
    /// Pre-rendered SVG, emitted unescaped
    pub sparkline: String,
}

impl From<&WatchlistEntry> for WatchlistRow {
    fn from(entry: &WatchlistEntry) -> Self {
        let (change, class) = match entry.change_pct {
            Some(c) => (format!("{}%", c), change_class(c)),
            None => ("n/a".to_string(), "muted"),
        };
        Self {
            symbol: entry.symbol.clone(),
            company: entry.company.clone(),
            change,
            change_class: class,
            sparkline: sparkline(&entry.series),
        }
    }
}

/// GET / - Full dashboard page
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub alerts: Vec<AlertRow>,
    pub movers: Vec<MoverTable>,
    pub watchlist: Vec<WatchlistRow>,
}

impl DashboardPage {
    pub fn new(alerts: &[AlertRecord], movers: &Movers, watchlist: &[WatchlistEntry]) -> Self {
        Self {
            alerts: alerts.iter().map(AlertRow::from).collect(),
            movers: vec![
                MoverTable {
                    title: "Top gainers",
                    rows: movers.gainers.iter().map(MoverRow::from).collect(),
                },
                MoverTable {
                    title: "Top losers",
                    rows: movers.losers.iter().map(MoverRow::from).collect(),
                },
            ],
            watchlist: watchlist.iter().map(WatchlistRow::from).collect(),
        }
    }
}
