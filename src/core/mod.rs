pub mod engine;
pub mod fuel;
pub mod masses;

pub use crate::domain::model::{FuelMode, FuelReport, Mass, Module, Ship};
pub use crate::domain::ports::{ConfigProvider, MassSource};
pub use crate::utils::error::Result;
