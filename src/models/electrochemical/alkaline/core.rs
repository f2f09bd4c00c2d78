//! Steady-state electrochemistry of a single alkaline electrolysis cell.
//!
//! The model is a chain of closed-form correlations evaluated per current density:
//!
//! 1. Reversible voltage from temperature and the product gas partial pressures.
//! 2. Cell voltage from the Ulleberg polarization curve.
//! 3. Power, Faraday efficiency, and hydrogen production.
//! 4. DC and voltage efficiencies.
//!
//! Every operation takes the current density in A/m² as its only varying input.
//! Quantities that scale with current (power, hydrogen production) are therefore
//! per unit of active cell area.

mod coefficients;
mod constants;
mod curves;
mod efficiency;
mod error;
mod faraday;
mod given_voltage;
mod performance;
mod polarization;
mod production;
mod reversible;
mod state;

#[cfg(test)]
mod test_support;

pub use coefficients::{FaradayCoefficients, PolarizationCoefficients};
pub use curves::{CurveError, PerformanceCurves, SkippedSample, SweepPolicy};
pub use error::{DomainError, StateError};
pub use given_voltage::{GivenVoltageConfig, GivenVoltageError};
pub use performance::Performance;
pub use state::ElectrolyserState;

use uom::si::f64::{ElectricCurrentDensity, ElectricPotential};

/// Evaluates the full operating point of a cell.
///
/// # Errors
///
/// Returns a [`DomainError`] if any correlation in the chain is out of its domain.
pub(super) fn evaluate(
    state: &ElectrolyserState,
    current_density: ElectricCurrentDensity,
    polarization: &PolarizationCoefficients,
    faraday: &FaradayCoefficients,
) -> Result<Performance, DomainError> {
    Performance::evaluate(state, current_density, polarization, faraday)
}

/// Evaluates a cell over a sequence of current densities.
///
/// # Errors
///
/// Returns a [`CurveError`] for the first failing sample under [`SweepPolicy::Strict`].
pub(super) fn sweep(
    state: &ElectrolyserState,
    polarization: &PolarizationCoefficients,
    faraday: &FaradayCoefficients,
    current_densities: &[ElectricCurrentDensity],
    policy: SweepPolicy,
) -> Result<PerformanceCurves, CurveError> {
    PerformanceCurves::sweep(state, polarization, faraday, current_densities, policy)
}

/// Finds the current density at which the cell reaches a target voltage.
///
/// # Errors
///
/// Returns a [`GivenVoltageError`] on evaluation, bracketing, or convergence failure.
pub(super) fn given_voltage(
    state: &ElectrolyserState,
    polarization: &PolarizationCoefficients,
    target: ElectricPotential,
    bracket: [ElectricCurrentDensity; 2],
    config: GivenVoltageConfig,
) -> Result<ElectricCurrentDensity, GivenVoltageError> {
    given_voltage::given_voltage(state, polarization, target, bracket, config)
}
