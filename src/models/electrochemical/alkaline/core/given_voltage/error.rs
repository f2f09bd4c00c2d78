use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::ElectricPotential;

use crate::models::electrochemical::alkaline::core::DomainError;

/// Errors that can occur while solving for a target cell voltage.
#[derive(Debug, Error)]
pub enum GivenVoltageError {
    /// The cell voltage could not be evaluated at a bracket endpoint.
    #[error("cell voltage evaluation failed")]
    Domain(#[from] DomainError),

    /// The bracket endpoints do not enclose the target voltage.
    #[error("target {target:?} is not bracketed by {voltages:?}")]
    NotBracketed {
        /// Requested cell voltage.
        target: ElectricPotential,

        /// Cell voltages at the two bracket endpoints.
        voltages: [ElectricPotential; 2],
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best voltage residual achieved.
        residual: ElectricPotential,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
