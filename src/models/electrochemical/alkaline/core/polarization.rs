//! Empirical polarization curve (Ulleberg) and the electrical power it implies.

use uom::si::{
    electric_current_density::ampere_per_square_meter,
    electric_potential::volt,
    f64::{ElectricCurrentDensity, ElectricPotential, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{NonZero, StrictlyPositive},
    units::ArealPower,
};

use super::{DomainError, PolarizationCoefficients};

/// Cell voltage at the given current density.
///
/// The activation term is only evaluated once its logarithm argument has been
/// checked, so a [`DomainError`] is returned instead of a `NaN` voltage.
pub(super) fn cell_voltage(
    temperature: ThermodynamicTemperature,
    reversible_voltage: ElectricPotential,
    current_density: ElectricCurrentDensity,
    coefficients: &PolarizationCoefficients,
) -> Result<ElectricPotential, DomainError> {
    let PolarizationCoefficients {
        r1,
        r2,
        s,
        t1,
        t2,
        t3,
    } = *coefficients;

    let tc = NonZero::new(temperature.get::<degree_celsius>())
        .map_err(|_| DomainError::ZeroDenominator {
            quantity: "Celsius temperature",
        })?
        .into_inner();
    let i = current_density.get::<ampere_per_square_meter>();

    let activation_argument = (t1 + t2 / tc + t3 / tc.powi(2)) * i + 1.0;
    let activation_argument = StrictlyPositive::new(activation_argument)
        .map_err(|_| DomainError::NonPositiveLogArgument {
            term: "(t1 + t2/Tc + t3/Tc^2)*i + 1",
            value: activation_argument,
        })?
        .into_inner();

    let ohmic = (r1 + r2 * tc) * i;
    let activation = s * activation_argument.log10();

    Ok(reversible_voltage + ElectricPotential::new::<volt>(ohmic + activation))
}

/// Electrical power per unit cell area, `P = U · i`.
pub(super) fn power(
    cell_voltage: ElectricPotential,
    current_density: ElectricCurrentDensity,
) -> ArealPower {
    cell_voltage * current_density
}
