//! Complete operating point of a cell at one current density.

use uom::si::f64::{Area, ElectricCurrent, ElectricCurrentDensity, ElectricPotential, MassRate, Power, Ratio};

use crate::support::units::{ArealMassRate, ArealPower};

use super::{
    DomainError, ElectrolyserState, FaradayCoefficients, PolarizationCoefficients, efficiency,
    faraday, polarization, production,
};

/// All derived quantities of a cell at a single current density.
///
/// Power and hydrogen production are per unit cell area, consistent with the
/// current-density convention of the model.
/// Use [`total_power`](Self::total_power) and
/// [`total_hydrogen_production`](Self::total_hydrogen_production) for whole-cell values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    /// Current density the cell was evaluated at.
    pub current_density: ElectricCurrentDensity,

    /// Active cell area.
    pub cell_area: Area,

    /// Cell voltage.
    pub cell_voltage: ElectricPotential,

    /// Electrical power per unit cell area.
    pub power: ArealPower,

    /// Faraday efficiency.
    pub faraday_efficiency: Ratio,

    /// Hydrogen production rate per unit cell area.
    pub hydrogen_production: ArealMassRate,

    /// DC efficiency.
    pub dc_efficiency: Ratio,

    /// Voltage efficiency.
    pub voltage_efficiency: Ratio,
}

impl Performance {
    /// Evaluates every quantity in dependency order.
    ///
    /// The cell voltage is computed once and shared by the power and the
    /// efficiencies, which yields the same values as evaluating each one
    /// through [`ElectrolyserState`].
    pub(super) fn evaluate(
        state: &ElectrolyserState,
        current_density: ElectricCurrentDensity,
        polarization_coefficients: &PolarizationCoefficients,
        faraday_coefficients: &FaradayCoefficients,
    ) -> Result<Self, DomainError> {
        let cell_voltage = polarization::cell_voltage(
            state.temperature(),
            state.reversible_voltage()?,
            current_density,
            polarization_coefficients,
        )?;
        let power = polarization::power(cell_voltage, current_density);
        let faraday_efficiency =
            faraday::faraday_efficiency(current_density, state.cell_area(), faraday_coefficients);
        let hydrogen_production = production::hydrogen_production_rate(current_density);
        let dc_efficiency = efficiency::dc_efficiency(current_density, power)?;
        let voltage_efficiency = efficiency::voltage_efficiency(dc_efficiency, faraday_efficiency)?;

        Ok(Self {
            current_density,
            cell_area: state.cell_area(),
            cell_voltage,
            power,
            faraday_efficiency,
            hydrogen_production,
            dc_efficiency,
            voltage_efficiency,
        })
    }

    /// Total cell current.
    #[must_use]
    pub fn current(&self) -> ElectricCurrent {
        self.current_density * self.cell_area
    }

    /// Electrical power drawn by the whole cell.
    #[must_use]
    pub fn total_power(&self) -> Power {
        self.power * self.cell_area
    }

    /// Hydrogen production rate of the whole cell.
    #[must_use]
    pub fn total_hydrogen_production(&self) -> MassRate {
        self.hydrogen_production * self.cell_area
    }
}
