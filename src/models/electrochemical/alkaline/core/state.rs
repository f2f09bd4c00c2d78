//! Immutable operating state of a single cell.

use uom::si::{
    area::square_meter,
    f64::{
        Area, ElectricCurrent, ElectricCurrentDensity, ElectricPotential, Pressure, Ratio,
        ThermodynamicTemperature,
    },
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::{ArealMassRate, ArealPower},
};

use super::{
    DomainError, FaradayCoefficients, PolarizationCoefficients, StateError, constants::P_0,
    efficiency, faraday, polarization, production, reversible,
};

/// Operating temperature, pressure, and active area of an alkaline cell.
///
/// The state is fixed at construction. Every derived quantity is a pure
/// function of the state and an explicit current density, so a state can be
/// shared freely between threads.
///
/// All current-dependent operations take a current density in A/m².
/// Power and hydrogen production are returned per unit cell area;
/// multiply by [`cell_area`](Self::cell_area) for whole-cell values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectrolyserState {
    temperature_kelvin: Constrained<f64, StrictlyPositive>,
    pressure: Constrained<Pressure, StrictlyPositive>,
    cell_area: Constrained<Area, StrictlyPositive>,
}

impl ElectrolyserState {
    /// Creates a state from typed quantities.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] naming the first input that is not strictly positive.
    pub fn new(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        cell_area: Area,
    ) -> Result<Self, StateError> {
        Ok(Self {
            temperature_kelvin: StrictlyPositive::new(temperature.get::<kelvin>())
                .map_err(StateError::Temperature)?,
            pressure: StrictlyPositive::new(pressure).map_err(StateError::Pressure)?,
            cell_area: StrictlyPositive::new(cell_area).map_err(StateError::CellArea)?,
        })
    }

    /// Creates a state from nominal values.
    ///
    /// The nominal pressure is scaled by the reference pressure `p_0 = 101 325 Pa`,
    /// so `pressure_bar = 30.0` is stored as `3 039 750 Pa`.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] naming the first input that is not strictly positive.
    pub fn from_nominal(
        temperature_kelvin: f64,
        pressure_bar: f64,
        cell_area_m2: f64,
    ) -> Result<Self, StateError> {
        Self::new(
            ThermodynamicTemperature::new::<kelvin>(temperature_kelvin),
            Pressure::new::<pascal>(pressure_bar * P_0),
            Area::new::<square_meter>(cell_area_m2),
        )
    }

    /// Returns a copy of this state with a different active cell area.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::CellArea`] if the area is not strictly positive.
    pub fn with_cell_area(self, cell_area: Area) -> Result<Self, StateError> {
        Ok(Self {
            cell_area: StrictlyPositive::new(cell_area).map_err(StateError::CellArea)?,
            ..self
        })
    }

    /// Operating temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.temperature_kelvin.into_inner())
    }

    /// Operating pressure.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure.into_inner()
    }

    /// Active cell area.
    #[must_use]
    pub fn cell_area(&self) -> Area {
        self.cell_area.into_inner()
    }

    /// Total cell current drawn at the given current density.
    #[must_use]
    pub fn current(&self, current_density: ElectricCurrentDensity) -> ElectricCurrent {
        current_density * self.cell_area()
    }

    /// Standard reversible voltage `E0(T)`, without pressure correction.
    #[must_use]
    pub fn standard_reversible_voltage(&self) -> ElectricPotential {
        reversible::standard_reversible_voltage(self.temperature())
    }

    /// Reversible voltage with the default water vapour partial pressure.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the operating pressure does not exceed the
    /// water vapour partial pressure.
    pub fn reversible_voltage(&self) -> Result<ElectricPotential, DomainError> {
        self.reversible_voltage_with(reversible::default_water_vapour_pressure())
    }

    /// Reversible voltage for a given water vapour partial pressure.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the vapour pressure is not strictly positive
    /// or the operating pressure does not exceed it.
    pub fn reversible_voltage_with(
        &self,
        water_vapour_pressure: Pressure,
    ) -> Result<ElectricPotential, DomainError> {
        reversible::reversible_voltage(self.temperature(), self.pressure(), water_vapour_pressure)
    }

    /// Cell voltage from the Ulleberg polarization curve.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if a logarithm argument is not strictly positive
    /// or the temperature is exactly 0 °C.
    pub fn cell_voltage(
        &self,
        current_density: ElectricCurrentDensity,
        coefficients: &PolarizationCoefficients,
    ) -> Result<ElectricPotential, DomainError> {
        polarization::cell_voltage(
            self.temperature(),
            self.reversible_voltage()?,
            current_density,
            coefficients,
        )
    }

    /// Electrical power per unit cell area, the cell voltage times the current density.
    ///
    /// # Errors
    ///
    /// Propagates any [`DomainError`] from [`cell_voltage`](Self::cell_voltage).
    pub fn power(
        &self,
        current_density: ElectricCurrentDensity,
        coefficients: &PolarizationCoefficients,
    ) -> Result<ArealPower, DomainError> {
        let voltage = self.cell_voltage(current_density, coefficients)?;
        Ok(polarization::power(voltage, current_density))
    }

    /// Faraday efficiency.
    ///
    /// The fit is evaluated at the current density divided by the cell area.
    #[must_use]
    pub fn faraday_efficiency(
        &self,
        current_density: ElectricCurrentDensity,
        coefficients: &FaradayCoefficients,
    ) -> Ratio {
        faraday::faraday_efficiency(current_density, self.cell_area(), coefficients)
    }

    /// Hydrogen production rate per unit cell area.
    #[must_use]
    pub fn hydrogen_production_rate(
        &self,
        current_density: ElectricCurrentDensity,
    ) -> ArealMassRate {
        production::hydrogen_production_rate(current_density)
    }

    /// DC efficiency based on the higher heating value of hydrogen.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the cell voltage fails or the power is zero.
    pub fn dc_efficiency(
        &self,
        current_density: ElectricCurrentDensity,
        coefficients: &PolarizationCoefficients,
    ) -> Result<Ratio, DomainError> {
        let power = self.power(current_density, coefficients)?;
        efficiency::dc_efficiency(current_density, power)
    }

    /// Voltage efficiency, the DC efficiency divided by the Faraday efficiency.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the DC efficiency fails or the Faraday
    /// efficiency is zero.
    pub fn voltage_efficiency(
        &self,
        current_density: ElectricCurrentDensity,
        polarization: &PolarizationCoefficients,
        faraday: &FaradayCoefficients,
    ) -> Result<Ratio, DomainError> {
        let dc = self.dc_efficiency(current_density, polarization)?;
        efficiency::voltage_efficiency(dc, self.faraday_efficiency(current_density, faraday))
    }
}

impl Default for ElectrolyserState {
    /// 363.15 K, nominal pressure 30, and 0.37 m² of active area.
    fn default() -> Self {
        Self::from_nominal(363.15, 30.0, 0.37).expect("default state is strictly positive")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        electric_current::ampere, electric_potential::volt,
        heat_flux_density::watt_per_square_meter, ratio::ratio,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::{
        models::electrochemical::alkaline::core::test_support::current_density,
        support::constraint::ConstraintError,
    };

    #[test]
    fn default_state() {
        let state = ElectrolyserState::default();

        assert_eq!(state.temperature().get::<kelvin>(), 363.15);
        assert_eq!(state.pressure().get::<pascal>(), 30.0 * 101_325.0);
        assert_eq!(state.cell_area().get::<square_meter>(), 0.37);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert_eq!(
            ElectrolyserState::from_nominal(0.0, 30.0, 0.37),
            Err(StateError::Temperature(ConstraintError::Zero))
        );
        assert_eq!(
            ElectrolyserState::from_nominal(363.15, -1.0, 0.37),
            Err(StateError::Pressure(ConstraintError::Negative))
        );
        assert_eq!(
            ElectrolyserState::from_nominal(363.15, 30.0, f64::NAN),
            Err(StateError::CellArea(ConstraintError::NotANumber))
        );
        assert!(
            ElectrolyserState::default()
                .with_cell_area(Area::new::<square_meter>(0.0))
                .is_err()
        );
    }

    #[test]
    fn typed_temperature_is_validated_in_kelvin() {
        let pressure = Pressure::new::<pascal>(1.0e6);
        let area = Area::new::<square_meter>(0.1);

        let state = ElectrolyserState::new(
            ThermodynamicTemperature::new::<degree_celsius>(80.0),
            pressure,
            area,
        )
        .unwrap();
        assert_relative_eq!(state.temperature().get::<kelvin>(), 353.15, epsilon = 1e-12);

        assert_eq!(
            ElectrolyserState::new(ThermodynamicTemperature::new::<kelvin>(0.0), pressure, area),
            Err(StateError::Temperature(ConstraintError::Zero))
        );
        assert_eq!(
            ElectrolyserState::new(
                ThermodynamicTemperature::new::<degree_celsius>(-300.0),
                pressure,
                area,
            ),
            Err(StateError::Temperature(ConstraintError::Negative))
        );
    }

    #[test]
    fn reversible_voltage_at_default_state() {
        let state = ElectrolyserState::default();
        let e_rev = state.reversible_voltage().unwrap();

        assert_relative_eq!(e_rev.get::<volt>(), 1.368_273_958_577_898_2, epsilon = 1e-12);
        assert!(e_rev > state.standard_reversible_voltage());
    }

    #[test]
    fn custom_vapour_pressure() {
        let state = ElectrolyserState::default();

        let dry = state
            .reversible_voltage_with(Pressure::new::<pascal>(1_000.0))
            .unwrap();
        let humid = state.reversible_voltage().unwrap();
        assert!(dry > humid);

        assert!(
            state
                .reversible_voltage_with(state.pressure())
                .is_err()
        );
    }

    #[test]
    fn polarization_adds_overpotential() {
        let state = ElectrolyserState::default();
        let coefficients = PolarizationCoefficients::default();

        let e_rev = state.reversible_voltage().unwrap();
        let u = state.cell_voltage(current_density(1000.0), &coefficients).unwrap();

        assert!(u > e_rev);
    }

    #[test]
    fn power_matches_voltage_times_current_density() {
        let state = ElectrolyserState::default();
        let coefficients = PolarizationCoefficients::default();

        for i in [1.0, 500.0, 1000.0, 4321.0] {
            let j = current_density(i);
            let u = state.cell_voltage(j, &coefficients).unwrap();
            let p = state.power(j, &coefficients).unwrap();

            assert_eq!(p, u * j);
            assert_eq!(
                p.get::<watt_per_square_meter>(),
                u.get::<volt>() * i
            );
        }
    }

    #[test]
    fn total_current_scales_with_area() {
        let state = ElectrolyserState::from_nominal(363.15, 30.0, 0.25).unwrap();
        let current = state.current(current_density(1000.0));
        assert_relative_eq!(current.get::<ampere>(), 250.0, epsilon = 1e-12);
    }

    #[test]
    fn efficiencies_at_reference_point() {
        let state = ElectrolyserState::from_nominal(363.15, 30.0, 0.25).unwrap();
        let polarization = PolarizationCoefficients::default();
        let faraday = FaradayCoefficients::default();
        let j = current_density(1000.0);

        let dc = state.dc_efficiency(j, &polarization).unwrap();
        let fe = state.faraday_efficiency(j, &faraday);
        let ve = state.voltage_efficiency(j, &polarization, &faraday).unwrap();

        assert_relative_eq!(dc.get::<ratio>(), 0.738_337_299_402_987_6, epsilon = 1e-12);
        assert_relative_eq!(fe.get::<ratio>(), 0.938_826_466_916_354_5, epsilon = 1e-12);
        assert_relative_eq!(ve.get::<ratio>(), 0.786_447_043_646_001_5, epsilon = 1e-12);
    }

    #[test]
    fn zero_current_density_has_no_dc_efficiency() {
        let state = ElectrolyserState::default();
        let result = state.dc_efficiency(current_density(0.0), &PolarizationCoefficients::default());

        assert!(matches!(result, Err(DomainError::ZeroDenominator { .. })));
    }

    #[test]
    fn low_pressure_fails_reversible_voltage() {
        // 0.1 × p_0 is below the default water vapour pressure.
        let state = ElectrolyserState::from_nominal(363.15, 0.1, 0.37).unwrap();
        let coefficients = PolarizationCoefficients::default();

        assert!(state.reversible_voltage().is_err());
        assert!(matches!(
            state.cell_voltage(current_density(1000.0), &coefficients),
            Err(DomainError::NonPositiveLogArgument { .. })
        ));
    }
}
