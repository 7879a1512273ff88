//! Fuel formulas for a single mass.
//!
//! Both functions are total over `i64` and never return a negative value.

use crate::domain::model::Mass;

/// Fuel for a single mass: a third of it, rounded down, minus two, never below zero.
pub fn fuel(mass: Mass) -> Mass {
    (mass / 3 - 2).max(0)
}

/// Fuel for a mass plus the fuel needed to carry that fuel, until the
/// extra requirement drops to zero.
pub fn compound_fuel(mass: Mass) -> Mass {
    compound_steps(mass).sum()
}

/// Each successive positive fuel requirement, starting with `fuel(mass)`.
pub fn compound_steps(mass: Mass) -> impl Iterator<Item = Mass> {
    std::iter::successors(Some(fuel(mass)), |&f| Some(fuel(f))).take_while(|&f| f > 0)
}
