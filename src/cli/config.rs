//! Arguments shared by every command

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;

/// Configuration file and seed, accepted by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// JSON configuration file (missing fields keep their defaults)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CommonArgs {
    /// Load the configuration file, or defaults when none was given
    pub fn load(&self) -> crate::Result<Config> {
        Config::load_or_default(self.config.as_deref())
    }
}
