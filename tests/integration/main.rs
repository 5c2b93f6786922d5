//! Integration tests for stock-pulse

mod config_test;
mod dashboard_test;
mod scanner_test;
mod support;
