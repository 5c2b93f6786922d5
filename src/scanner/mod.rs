//! Scan scheduling module
//!
//! Orchestrates gateways, scoring, and throttling on a fixed cadence

mod scheduler;
mod types;

pub use scheduler::{Clock, ScanSettings, Scanner};
pub use types::{Outcome, ScanReport, SkipReason};
