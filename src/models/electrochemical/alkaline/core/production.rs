//! Hydrogen production by Faraday's law.

use uom::si::{
    area::square_meter,
    electric_current_density::ampere_per_square_meter,
    f64::{Area, ElectricCurrentDensity, MassRate},
    mass_rate::kilogram_per_second,
};

use crate::support::units::ArealMassRate;

use super::constants::{F_EXACT, M_H2};

/// Hydrogen production rate per unit cell area.
///
/// ```text
/// HP = i / (2·F) · M_H2 / 1000 / 3600
/// ```
///
/// The correlation is applied to the current density as it is to a current,
/// so multiplying the result by the cell area gives the whole-cell rate.
/// The trailing scale factors are part of the correlation and are kept as is.
/// The rate is linear in the current density and has no failure modes.
pub(super) fn hydrogen_production_rate(current_density: ElectricCurrentDensity) -> ArealMassRate {
    let i = current_density.get::<ampere_per_square_meter>();
    let rate = i / (2.0 * F_EXACT) * M_H2 / 1000.0 / 3600.0;

    MassRate::new::<kilogram_per_second>(rate) / Area::new::<square_meter>(1.0)
}
