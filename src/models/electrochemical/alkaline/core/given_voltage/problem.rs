//! Problem formulation for target voltage matching.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    electric_current_density::ampere_per_square_meter,
    electric_potential::volt,
    f64::{ElectricCurrentDensity, ElectricPotential},
};

use crate::models::electrochemical::alkaline::core::{
    DomainError, ElectrolyserState, PolarizationCoefficients,
};

/// Model adapter exposing the cell voltage as a function of current density.
pub(super) struct CellVoltageModel<'a> {
    state: &'a ElectrolyserState,
    coefficients: &'a PolarizationCoefficients,
}

impl<'a> CellVoltageModel<'a> {
    pub(super) fn new(
        state: &'a ElectrolyserState,
        coefficients: &'a PolarizationCoefficients,
    ) -> Self {
        Self {
            state,
            coefficients,
        }
    }
}

impl Model for CellVoltageModel<'_> {
    type Input = ElectricCurrentDensity;
    type Output = ElectricPotential;
    type Error = DomainError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.state.cell_voltage(*input, self.coefficients)
    }
}

/// Equation problem definition for voltage matching.
///
/// Computes the residual as `achieved_voltage - target_voltage`.
pub(super) struct GivenVoltageProblem {
    target: ElectricPotential,
}

impl GivenVoltageProblem {
    pub(super) fn new(target: ElectricPotential) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for GivenVoltageProblem {
    type Input = ElectricCurrentDensity;
    type Output = ElectricPotential;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ElectricCurrentDensity::new::<ampere_per_square_meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.get::<volt>() - self.target.get::<volt>()])
    }
}
