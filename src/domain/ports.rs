use crate::domain::model::{FuelMode, Mass};
use crate::utils::error::Result;
use std::path::Path;

/// Anything that can hand over the full list of module masses at once.
pub trait MassSource {
    fn masses(&self) -> Result<Vec<Mass>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn part2(&self) -> bool;
    fn log_level(&self) -> Option<&str>;

    fn mode(&self) -> FuelMode {
        FuelMode::from_part2(self.part2())
    }
}
