//! Iterative solver for the current density at a target cell voltage.
//!
//! The polarization curve gives voltage as a function of current density.
//! This module inverts it by bisecting on the current density until the
//! cell voltage matches the target.

mod config;
mod error;
mod problem;

pub use config::GivenVoltageConfig;
pub use error::GivenVoltageError;

use tracing::debug;
use twine_core::Model;
use twine_solvers::equation::bisection;
use uom::si::{
    electric_current_density::ampere_per_square_meter,
    electric_potential::volt,
    f64::{ElectricCurrentDensity, ElectricPotential},
};

use super::{ElectrolyserState, PolarizationCoefficients};

use problem::{CellVoltageModel, GivenVoltageProblem};

/// Finds the current density within `bracket` at which the cell voltage equals `target`.
///
/// The bracket endpoints must produce cell voltages on opposite sides of the target.
///
/// # Errors
///
/// Returns [`GivenVoltageError`] if a bracket endpoint cannot be evaluated,
/// the bracket does not enclose the target, or the solver fails to converge.
pub(super) fn given_voltage(
    state: &ElectrolyserState,
    coefficients: &PolarizationCoefficients,
    target: ElectricPotential,
    bracket: [ElectricCurrentDensity; 2],
    config: GivenVoltageConfig,
) -> Result<ElectricCurrentDensity, GivenVoltageError> {
    let model = CellVoltageModel::new(state, coefficients);

    let [low, high] = bracket;
    let voltage_low = model.call(&low)?;
    let voltage_high = model.call(&high)?;

    if voltage_low == target {
        return Ok(low);
    }
    if voltage_high == target {
        return Ok(high);
    }
    if (voltage_low < target) == (voltage_high < target) {
        return Err(GivenVoltageError::NotBracketed {
            target,
            voltages: [voltage_low, voltage_high],
        });
    }

    let problem = GivenVoltageProblem::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [
            low.get::<ampere_per_square_meter>(),
            high.get::<ampere_per_square_meter>(),
        ],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // The valid current densities form an interval containing both
            // endpoints, so this only guards against non-finite inputs.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenVoltageError::MaxIters {
            residual: ElectricPotential::new::<volt>(solution.residual),
            iters: solution.iters,
        });
    }

    debug!(
        iters = solution.iters,
        residual = solution.residual,
        "given-voltage solve converged"
    );

    Ok(solution.snapshot.input)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::electrochemical::alkaline::core::test_support::current_density;

    fn solve(
        target: ElectricPotential,
        bracket: [f64; 2],
    ) -> Result<ElectricCurrentDensity, GivenVoltageError> {
        given_voltage(
            &ElectrolyserState::default(),
            &PolarizationCoefficients::default(),
            target,
            [current_density(bracket[0]), current_density(bracket[1])],
            GivenVoltageConfig::default(),
        )
    }

    #[test]
    fn roundtrip() {
        let state = ElectrolyserState::default();
        let coefficients = PolarizationCoefficients::default();

        let target = state
            .cell_voltage(current_density(2000.0), &coefficients)
            .expect("reference voltage should evaluate");

        let j = solve(target, [500.0, 5000.0]).expect("solve should converge");

        assert_relative_eq!(j.get::<ampere_per_square_meter>(), 2000.0, epsilon = 1e-6);
    }

    #[test]
    fn reversed_bracket() {
        let target = ElectricPotential::new::<volt>(2.0);
        let j = solve(target, [5000.0, 100.0]).expect("solve should converge");

        let voltage = ElectrolyserState::default()
            .cell_voltage(j, &PolarizationCoefficients::default())
            .unwrap();
        assert_relative_eq!(voltage.get::<volt>(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn target_outside_bracket() {
        let result = solve(ElectricPotential::new::<volt>(10.0), [500.0, 5000.0]);
        assert!(matches!(result, Err(GivenVoltageError::NotBracketed { .. })));
    }

    #[test]
    fn bracket_endpoint_fails() {
        let coefficients = PolarizationCoefficients {
            t1: -10.0,
            ..PolarizationCoefficients::default()
        };

        let result = given_voltage(
            &ElectrolyserState::default(),
            &coefficients,
            ElectricPotential::new::<volt>(2.0),
            [current_density(500.0), current_density(5000.0)],
            GivenVoltageConfig::default(),
        );

        assert!(matches!(result, Err(GivenVoltageError::Domain(_))));
    }

    #[test]
    fn iteration_limit() {
        let config = GivenVoltageConfig {
            max_iters: 2,
            ..GivenVoltageConfig::default()
        };

        let result = given_voltage(
            &ElectrolyserState::default(),
            &PolarizationCoefficients::default(),
            ElectricPotential::new::<volt>(2.0),
            [current_density(500.0), current_density(5000.0)],
            config,
        );

        assert!(matches!(
            result,
            Err(GivenVoltageError::MaxIters { .. })
        ));
    }
}
