//! Alkaline water electrolysis cell model.
//!
//! [`AlkalineElectrolyser`] implements [`twine_core::Model`], mapping a current
//! density to the full [`Performance`] of the cell. The computational core is in
//! the internal `core` module.
//!
//! # Units
//!
//! Every current-dependent quantity is evaluated at a current density (A/m²).
//! Power and hydrogen production are reported per unit of active cell area,
//! and [`Performance`] converts them to whole-cell values.
//! The Faraday efficiency fit is evaluated at the current density divided by
//! the cell area, following the convention its coefficients were fitted with.
//!
//! # Example
//!
//! ```
//! use electrolyser_models::models::electrochemical::alkaline::{
//!     AlkalineElectrolyser, ElectrolyserState,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     electric_current_density::ampere_per_square_meter, electric_potential::volt,
//!     f64::ElectricCurrentDensity,
//! };
//!
//! let state = ElectrolyserState::from_nominal(363.15, 30.0, 0.25).unwrap();
//! let electrolyser = AlkalineElectrolyser::new(state);
//!
//! let j = ElectricCurrentDensity::new::<ampere_per_square_meter>(1000.0);
//! let performance = electrolyser.call(&j).unwrap();
//!
//! assert!(performance.cell_voltage.get::<volt>() > 2.0);
//! ```

mod core;

pub use self::core::{
    CurveError, DomainError, ElectrolyserState, FaradayCoefficients, GivenVoltageConfig,
    GivenVoltageError, Performance, PerformanceCurves, PolarizationCoefficients, SkippedSample,
    StateError, SweepPolicy,
};

use twine_core::Model;
use uom::si::f64::{ElectricCurrentDensity, ElectricPotential, Ratio};

use crate::support::units::{ArealMassRate, ArealPower};

/// An alkaline electrolysis cell with fixed operating state and fit coefficients.
///
/// All configuration is immutable, so one instance can evaluate any number of
/// current densities, including concurrently.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlkalineElectrolyser {
    /// Operating temperature, pressure, and cell area.
    pub state: ElectrolyserState,

    /// Polarization curve coefficients.
    pub polarization: PolarizationCoefficients,

    /// Faraday efficiency coefficients.
    pub faraday: FaradayCoefficients,
}

impl AlkalineElectrolyser {
    /// Creates an electrolyser with the default fit coefficients.
    #[must_use]
    pub fn new(state: ElectrolyserState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    /// Returns a copy with different polarization coefficients.
    #[must_use]
    pub fn with_polarization(self, polarization: PolarizationCoefficients) -> Self {
        Self {
            polarization,
            ..self
        }
    }

    /// Returns a copy with different Faraday efficiency coefficients.
    #[must_use]
    pub fn with_faraday(self, faraday: FaradayCoefficients) -> Self {
        Self { faraday, ..self }
    }

    /// Reversible voltage at the operating state.
    ///
    /// # Errors
    ///
    /// See [`ElectrolyserState::reversible_voltage`].
    pub fn reversible_voltage(&self) -> Result<ElectricPotential, DomainError> {
        self.state.reversible_voltage()
    }

    /// Cell voltage at the given current density.
    ///
    /// # Errors
    ///
    /// See [`ElectrolyserState::cell_voltage`].
    pub fn cell_voltage(
        &self,
        current_density: ElectricCurrentDensity,
    ) -> Result<ElectricPotential, DomainError> {
        self.state.cell_voltage(current_density, &self.polarization)
    }

    /// Electrical power per unit cell area.
    ///
    /// # Errors
    ///
    /// See [`ElectrolyserState::power`].
    pub fn power(&self, current_density: ElectricCurrentDensity) -> Result<ArealPower, DomainError> {
        self.state.power(current_density, &self.polarization)
    }

    /// Faraday efficiency.
    #[must_use]
    pub fn faraday_efficiency(&self, current_density: ElectricCurrentDensity) -> Ratio {
        self.state.faraday_efficiency(current_density, &self.faraday)
    }

    /// Hydrogen production rate per unit cell area.
    #[must_use]
    pub fn hydrogen_production_rate(&self, current_density: ElectricCurrentDensity) -> ArealMassRate {
        self.state.hydrogen_production_rate(current_density)
    }

    /// DC efficiency.
    ///
    /// # Errors
    ///
    /// See [`ElectrolyserState::dc_efficiency`].
    pub fn dc_efficiency(&self, current_density: ElectricCurrentDensity) -> Result<Ratio, DomainError> {
        self.state.dc_efficiency(current_density, &self.polarization)
    }

    /// Voltage efficiency.
    ///
    /// # Errors
    ///
    /// See [`ElectrolyserState::voltage_efficiency`].
    pub fn voltage_efficiency(
        &self,
        current_density: ElectricCurrentDensity,
    ) -> Result<Ratio, DomainError> {
        self.state
            .voltage_efficiency(current_density, &self.polarization, &self.faraday)
    }

    /// Evaluates the cell at every current density in `current_densities`.
    ///
    /// # Errors
    ///
    /// With [`SweepPolicy::Strict`], returns a [`CurveError`] for the first
    /// failing sample. [`SweepPolicy::Permissive`] never fails.
    pub fn curves(
        &self,
        current_densities: &[ElectricCurrentDensity],
        policy: SweepPolicy,
    ) -> Result<PerformanceCurves, CurveError> {
        self::core::sweep(
            &self.state,
            &self.polarization,
            &self.faraday,
            current_densities,
            policy,
        )
    }

    /// Finds the current density within `bracket` that yields the `target` cell voltage.
    ///
    /// # Errors
    ///
    /// Returns a [`GivenVoltageError`] if a bracket endpoint is out of domain,
    /// the bracket does not enclose the target, or the solver does not converge.
    pub fn current_density_for_voltage(
        &self,
        target: ElectricPotential,
        bracket: [ElectricCurrentDensity; 2],
        config: GivenVoltageConfig,
    ) -> Result<ElectricCurrentDensity, GivenVoltageError> {
        self::core::given_voltage(&self.state, &self.polarization, target, bracket, config)
    }
}

impl Model for AlkalineElectrolyser {
    type Input = ElectricCurrentDensity;
    type Output = Performance;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::evaluate(&self.state, *input, &self.polarization, &self.faraday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        electric_current::ampere, electric_current_density::ampere_per_square_meter,
        electric_potential::volt, ratio::ratio,
    };

    use crate::support::sweep::linspace;

    fn current_density(value: f64) -> ElectricCurrentDensity {
        ElectricCurrentDensity::new::<ampere_per_square_meter>(value)
    }

    fn reference_electrolyser() -> AlkalineElectrolyser {
        AlkalineElectrolyser::new(
            ElectrolyserState::from_nominal(363.15, 30.0, 0.25).expect("valid state"),
        )
    }

    #[test]
    fn model_call_matches_operations() {
        let electrolyser = reference_electrolyser();
        let j = current_density(1000.0);

        let performance = electrolyser.call(&j).unwrap();

        assert_eq!(performance.cell_voltage, electrolyser.cell_voltage(j).unwrap());
        assert_eq!(performance.power, electrolyser.power(j).unwrap());
        assert_eq!(
            performance.faraday_efficiency,
            electrolyser.faraday_efficiency(j)
        );
        assert_eq!(
            performance.hydrogen_production,
            electrolyser.hydrogen_production_rate(j)
        );
        assert_eq!(performance.dc_efficiency, electrolyser.dc_efficiency(j).unwrap());
        assert_eq!(
            performance.voltage_efficiency,
            electrolyser.voltage_efficiency(j).unwrap()
        );
    }

    #[test]
    fn reference_run() {
        let electrolyser = reference_electrolyser();
        let samples: Vec<_> = linspace(500.0, 5000.0, 20)
            .into_iter()
            .map(current_density)
            .collect();

        let curves = electrolyser.curves(&samples, SweepPolicy::Strict).unwrap();

        assert_eq!(curves.cell_voltage().len(), 20);
        assert_eq!(curves.faraday_efficiency().len(), 20);
        assert_eq!(curves.hydrogen_production().len(), 20);
        assert_eq!(curves.dc_efficiency().len(), 20);
        assert_eq!(curves.voltage_efficiency().len(), 20);

        let voltage = curves.cell_voltage();
        assert!(voltage.windows(2).all(|pair| pair[1] > pair[0]));

        let current = curves.current();
        assert_relative_eq!(current[0].get::<ampere>(), 125.0, epsilon = 1e-12);
        assert_relative_eq!(current[19].get::<ampere>(), 1250.0, epsilon = 1e-12);

        let first = curves.points()[0];
        assert_relative_eq!(
            first.cell_voltage.get::<volt>(),
            1.920_026_560_814_741_3,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            first.voltage_efficiency.get::<ratio>(),
            0.824_800_630_060_813_8,
            epsilon = 1e-12
        );
    }

    #[test]
    fn custom_coefficients_flow_through() {
        let base = reference_electrolyser();
        let steeper = base.with_polarization(PolarizationCoefficients {
            r1: 2.0 * PolarizationCoefficients::default().r1,
            ..PolarizationCoefficients::default()
        });

        let j = current_density(2000.0);
        assert!(steeper.cell_voltage(j).unwrap() > base.cell_voltage(j).unwrap());
        assert!(steeper.dc_efficiency(j).unwrap() < base.dc_efficiency(j).unwrap());
    }

    #[test]
    fn voltage_target_roundtrip() {
        let electrolyser = reference_electrolyser();
        let target = electrolyser.cell_voltage(current_density(3000.0)).unwrap();

        let j = electrolyser
            .current_density_for_voltage(
                target,
                [current_density(500.0), current_density(5000.0)],
                GivenVoltageConfig::default(),
            )
            .unwrap();

        assert_relative_eq!(j.get::<ampere_per_square_meter>(), 3000.0, epsilon = 1e-6);
    }

    #[test]
    fn electrolyser_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AlkalineElectrolyser>();
    }
}
