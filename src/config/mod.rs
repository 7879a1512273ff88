#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::path::{Path, PathBuf};
use toml_config::FuelConfig;

/// Settings for a single `fuel` run after merging the command line with
/// the optional config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub part2: bool,
    pub log_level: Option<String>,
}

impl RunConfig {
    /// A `--part2` flag on the command line turns the compound formula on
    /// even when the file leaves it off.
    pub fn merge(input_path: PathBuf, part2_flag: bool, file: Option<&FuelConfig>) -> Self {
        Self {
            input_path,
            part2: part2_flag || file.is_some_and(FuelConfig::part2),
            log_level: file.and_then(|f| f.log_level()).map(str::to_string),
        }
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn part2(&self) -> bool {
        self.part2
    }

    fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.input_path.to_string_lossy())
    }
}
