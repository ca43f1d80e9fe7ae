//! Command-line arguments of the `roamer` binary.
//!
//! The YAML file carries the full configuration. Flags override the few
//! values that are handy to change per run.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::error::ConfigError;
use crate::RoamerConfig;

/// Roamer - periodically send random navigation goals.
#[derive(Debug, Parser)]
#[command(name = "roamer", version)]
pub struct Cli {
    /// YAML configuration file. Built-in defaults are used when omitted.
    pub config: Option<PathBuf>,

    /// Seconds between goal dispatches (overrides `dispatch.period_secs`).
    #[arg(long)]
    pub period: Option<f64>,

    /// Seed for the target generator (overrides `target.seed`).
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Load the configuration file, apply flag overrides and validate
    pub fn load_config(&self) -> Result<RoamerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                RoamerConfig::load(path)?
            }
            None => RoamerConfig::default(),
        };
        if let Some(period) = self.period {
            config.dispatch.period_secs = period;
        }
        if let Some(seed) = self.seed {
            config.target.seed = Some(seed);
        }
        config.validate()?;
        Ok(config)
    }
}
