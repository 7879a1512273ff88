use crate::core::{FuelMode, FuelReport, MassSource, Ship};
use crate::utils::error::Result;

pub struct FuelEngine<S: MassSource> {
    source: S,
}

impl<S: MassSource> FuelEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn run(&self, mode: FuelMode) -> Result<FuelReport> {
        tracing::info!("Loading module masses");
        let masses = self.source.masses()?;
        tracing::debug!("Loaded {} masses", masses.len());

        let ship = Ship::new(&masses);
        let total = ship.total(mode);
        tracing::info!("Computed {:?} fuel for {} modules: {}", mode, ship.len(), total);

        Ok(FuelReport {
            mode,
            modules: ship.len(),
            total,
        })
    }
}
