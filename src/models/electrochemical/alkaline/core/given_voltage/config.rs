use twine_solvers::equation::bisection;
use uom::si::{
    electric_current_density::ampere_per_square_meter,
    electric_potential::volt,
    f64::{ElectricCurrentDensity, ElectricPotential},
};

/// Solver configuration for matching a target cell voltage.
#[derive(Debug, Clone, Copy)]
pub struct GivenVoltageConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the current density search variable.
    pub current_density_tol: ElectricCurrentDensity,

    /// Absolute tolerance for the voltage residual (achieved - target).
    pub voltage_tol: ElectricPotential,
}

impl Default for GivenVoltageConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            current_density_tol: ElectricCurrentDensity::new::<ampere_per_square_meter>(1e-9),
            voltage_tol: ElectricPotential::new::<volt>(1e-12),
        }
    }
}

impl GivenVoltageConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.current_density_tol.get::<ampere_per_square_meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.voltage_tol.get::<volt>(),
        }
    }
}
