use crate::config::toml_config::FuelConfig;
use crate::config::RunConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "shipfuel")]
#[command(about = "Fuel calculations for launching a ship")]
pub struct CliConfig {
    /// Run the second part of the solution (compound fuel).
    #[arg(long, global = true)]
    pub part2: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Calculate the fuel necessary to launch the ship.
    Fuel {
        /// Input file with one module mass per line
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl CliConfig {
    pub fn load_file_config(&self) -> Result<Option<FuelConfig>> {
        self.config.as_ref().map(FuelConfig::from_file).transpose()
    }

    /// Settings for the `fuel` subcommand reading `file`.
    pub fn run_config(&self, file: PathBuf, file_config: Option<&FuelConfig>) -> RunConfig {
        RunConfig::merge(file, self.part2, file_config)
    }
}
