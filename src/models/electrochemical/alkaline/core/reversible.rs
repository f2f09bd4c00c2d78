//! Thermodynamic baseline of the cell voltage.

use uom::si::{
    electric_potential::volt,
    f64::{ElectricPotential, Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::StrictlyPositive;

use super::{
    DomainError,
    constants::{E0_COEFFICIENTS, F, LOG10_WATER_VAPOUR_RATIO, P_0, R},
};

/// Default water vapour partial pressure above the electrolyte, `10^-0.645 · p_0`.
pub(super) fn default_water_vapour_pressure() -> Pressure {
    Pressure::new::<pascal>(10_f64.powf(LOG10_WATER_VAPOUR_RATIO) * P_0)
}

/// Standard reversible voltage `E0(T)`.
///
/// Reference: Low-temperature electrolysis system modelling: A review.
pub(super) fn standard_reversible_voltage(temperature: ThermodynamicTemperature) -> ElectricPotential {
    let t = temperature.get::<kelvin>();
    let [a, b, c, d] = E0_COEFFICIENTS;
    ElectricPotential::new::<volt>(a + b * t + c * t * t.ln() + d * t.powi(2))
}

/// Reversible voltage corrected for the partial pressures of the product gases.
///
/// ```text
/// E_rev = E0(T) + R·T/(2F) · ln((p - p_H2O)^1.5 / p_H2O)
/// ```
pub(super) fn reversible_voltage(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    water_vapour_pressure: Pressure,
) -> Result<ElectricPotential, DomainError> {
    let p_h2o = StrictlyPositive::new(water_vapour_pressure)
        .map_err(|_| DomainError::NonPositivePartialPressure {
            pressure: water_vapour_pressure,
        })?
        .into_inner()
        .get::<pascal>();

    let dry_pressure = pressure.get::<pascal>() - p_h2o;
    let dry_pressure = StrictlyPositive::new(dry_pressure)
        .map_err(|_| DomainError::NonPositiveLogArgument {
            term: "p - p_H2O",
            value: dry_pressure,
        })?
        .into_inner();

    let t = temperature.get::<kelvin>();
    let nernst = R * t / (2.0 * F) * (dry_pressure.powf(1.5) / p_h2o).ln();

    Ok(standard_reversible_voltage(temperature) + ElectricPotential::new::<volt>(nernst))
}
