use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FuelError {
    #[error("could not read {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: invalid integer {value:?}: {source}")]
    MalformedInteger {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
}

impl FuelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FuelError::FileUnreadable { .. } | FuelError::MalformedInteger { .. } => {
                ErrorCategory::Input
            }
            FuelError::ConfigError { .. } | FuelError::InvalidConfigValue { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FuelError::FileUnreadable { .. } => "Check that the input file exists and is readable",
            FuelError::MalformedInteger { .. } => {
                "Each line of the input file must hold a single decimal integer"
            }
            FuelError::ConfigError { .. } => "Make sure the config file is valid TOML",
            FuelError::InvalidConfigValue { .. } => "Fix the offending value in the config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, FuelError>;
