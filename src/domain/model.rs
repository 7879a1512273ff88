use crate::core::fuel::{compound_fuel, fuel};

/// A module's mass. Negative values are accepted and need no fuel.
pub type Mass = i64;

/// Which formula a total is computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FuelMode {
    #[default]
    Simple,
    Compound,
}

impl FuelMode {
    pub fn from_part2(part2: bool) -> Self {
        if part2 {
            FuelMode::Compound
        } else {
            FuelMode::Simple
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module {
    mass: Mass,
}

impl Module {
    pub fn new(mass: Mass) -> Self {
        Self { mass }
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    pub fn fuel(&self) -> Mass {
        fuel(self.mass)
    }

    pub fn compound_fuel(&self) -> Mass {
        compound_fuel(self.mass)
    }
}

/// Every module of the ship, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ship {
    modules: Vec<Module>,
}

impl Ship {
    pub fn new(masses: &[Mass]) -> Self {
        masses.iter().copied().collect()
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Totals saturate at `Mass::MAX` instead of overflowing.
    pub fn total_fuel(&self) -> Mass {
        self.modules.iter().map(Module::fuel).fold(0, Mass::saturating_add)
    }

    pub fn total_compound_fuel(&self) -> Mass {
        self.modules
            .iter()
            .map(Module::compound_fuel)
            .fold(0, Mass::saturating_add)
    }

    pub fn total(&self, mode: FuelMode) -> Mass {
        match mode {
            FuelMode::Simple => self.total_fuel(),
            FuelMode::Compound => self.total_compound_fuel(),
        }
    }
}

impl FromIterator<Mass> for Ship {
    fn from_iter<I: IntoIterator<Item = Mass>>(iter: I) -> Self {
        Self {
            modules: iter.into_iter().map(Module::new).collect(),
        }
    }
}

/// Outcome of one engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelReport {
    pub mode: FuelMode,
    pub modules: usize,
    pub total: Mass,
}
