pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::file::FileMassSource;
pub use config::{toml_config::FuelConfig, RunConfig};
pub use core::fuel::{compound_fuel, fuel};
pub use core::{engine::FuelEngine, FuelMode, FuelReport, Mass, Module, Ship};
pub use utils::error::{FuelError, Result};
