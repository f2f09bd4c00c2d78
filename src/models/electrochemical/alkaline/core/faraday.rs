//! Faraday (current) efficiency of the cell.

use uom::si::{
    area::square_meter,
    electric_current_density::ampere_per_square_meter,
    f64::{Area, ElectricCurrentDensity, Ratio},
    ratio::ratio,
};

use super::{FaradayCoefficients, constants::FARADAY_FIT_SCALE};

/// Faraday efficiency, `ε_F = x² / (f1·m + x²) · f2` with `x = i / A`.
///
/// The fit is evaluated on the current density divided by the cell area,
/// exactly as the coefficients were fitted. That argument is not a physical
/// current density, so `f1` only has meaning together with this convention.
///
/// The result lies in `[0, f2)` and increases monotonically with `i / A`.
pub(super) fn faraday_efficiency(
    current_density: ElectricCurrentDensity,
    cell_area: Area,
    coefficients: &FaradayCoefficients,
) -> Ratio {
    let x = current_density.get::<ampere_per_square_meter>() / cell_area.get::<square_meter>();
    let x_squared = x.powi(2);

    let efficiency = x_squared / (coefficients.f1() * FARADAY_FIT_SCALE + x_squared) * coefficients.f2();
    Ratio::new::<ratio>(efficiency)
}
