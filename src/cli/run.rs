//! Run command implementation

use super::build_scanner;
use crate::config::Config;
use crate::dashboard::{self, DashboardState};
use clap::Args;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the dashboard port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Run the scanner without serving the dashboard
    #[arg(long)]
    pub headless: bool,
}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let (scanner, market) = build_scanner(config)?;
        let store = scanner.store().clone();
        let scan_task = scanner.spawn();

        if self.headless {
            tokio::signal::ctrl_c().await?;
            tracing::info!("Shutdown requested");
            scan_task.abort();
            return Ok(());
        }

        let mut state = DashboardState::from_config(config, store, market);
        if let Some(port) = self.port {
            state.settings.port = port;
        }

        tokio::select! {
            result = dashboard::serve(state) => {
                result?;
                tracing::info!("Dashboard stopped");
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
            }
        }

        scan_task.abort();
        Ok(())
    }
}
