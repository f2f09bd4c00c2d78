//! Energy-based efficiencies of the cell.

use uom::si::{
    electric_current_density::ampere_per_square_meter,
    f64::{ElectricCurrentDensity, Ratio},
    heat_flux_density::watt_per_square_meter,
    ratio::ratio,
};

use crate::support::{constraint::NonZero, units::ArealPower};

use super::{
    DomainError,
    constants::{F, HHV_H2},
};

/// DC efficiency: chemical energy stored in the hydrogen over electrical energy supplied.
///
/// ```text
/// DC_eff = i / (2F) · ΔH / P
/// ```
///
/// Because `P = U · i`, the ratio does not depend on whether `i` is read as a
/// current or as a current density.
pub(super) fn dc_efficiency(
    current_density: ElectricCurrentDensity,
    power: ArealPower,
) -> Result<Ratio, DomainError> {
    let power = NonZero::new(power.get::<watt_per_square_meter>())
        .map_err(|_| DomainError::ZeroDenominator {
            quantity: "electrical power",
        })?
        .into_inner();

    let molar_rate = current_density.get::<ampere_per_square_meter>() / (2.0 * F);
    Ok(Ratio::new::<ratio>(molar_rate * HHV_H2 / power))
}

/// Voltage efficiency, the DC efficiency with the Faraday losses divided out.
pub(super) fn voltage_efficiency(
    dc_efficiency: Ratio,
    faraday_efficiency: Ratio,
) -> Result<Ratio, DomainError> {
    let faraday_efficiency = NonZero::new(faraday_efficiency).map_err(|_| {
        DomainError::ZeroDenominator {
            quantity: "Faraday efficiency",
        }
    })?;

    Ok(dc_efficiency / faraday_efficiency.into_inner())
}
