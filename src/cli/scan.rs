//! Scan command implementation

use super::build_scanner;
use crate::config::Config;
use clap::Args;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Print skipped symbols as well as fired alerts
    #[arg(short, long)]
    pub verbose: bool,
}

impl ScanArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let (scanner, _) = build_scanner(config)?;
        let report = scanner.scan_cycle().await;

        tracing::info!(
            evaluated = report.evaluated(),
            fired = report.fired.len(),
            "Single scan complete"
        );

        let output = if self.verbose {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string_pretty(&report.fired)?
        };
        println!("{}", output);

        Ok(())
    }
}
