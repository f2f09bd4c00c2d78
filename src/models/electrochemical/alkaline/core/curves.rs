//! Performance curves over a range of current densities.

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};
use uom::si::{
    electric_current_density::ampere_per_square_meter,
    f64::{ElectricCurrent, ElectricCurrentDensity, ElectricPotential, Ratio},
};

use crate::support::units::{ArealMassRate, ArealPower};

use super::{
    DomainError, ElectrolyserState, FaradayCoefficients, Performance, PolarizationCoefficients,
};

/// How a sweep treats samples whose evaluation fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SweepPolicy {
    /// Abort the sweep at the first failing sample.
    #[default]
    Strict,

    /// Skip failing samples and record them in [`PerformanceCurves::skipped`].
    Permissive,
}

/// A sample that failed during a strict sweep.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("sample {index} at {current_density:?} failed")]
pub struct CurveError {
    /// Position of the sample in the requested sequence.
    pub index: usize,

    /// Current density of the sample.
    pub current_density: ElectricCurrentDensity,

    /// Why the sample failed.
    #[source]
    pub source: DomainError,
}

/// A sample left out of a permissive sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkippedSample {
    /// Position of the sample in the requested sequence.
    pub index: usize,

    /// Current density of the sample.
    pub current_density: ElectricCurrentDensity,

    /// Why the sample failed.
    pub error: DomainError,
}

/// Cell performance evaluated at a sequence of current densities.
///
/// Points keep the order of the requested current densities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceCurves {
    points: Vec<Performance>,
    skipped: Vec<SkippedSample>,
}

impl PerformanceCurves {
    /// Evaluates every current density.
    ///
    /// Samples are independent and are evaluated in parallel.
    ///
    /// # Errors
    ///
    /// With [`SweepPolicy::Strict`], returns a [`CurveError`] for the failing
    /// sample with the lowest index.
    pub(super) fn sweep(
        state: &ElectrolyserState,
        polarization: &PolarizationCoefficients,
        faraday: &FaradayCoefficients,
        current_densities: &[ElectricCurrentDensity],
        policy: SweepPolicy,
    ) -> Result<Self, CurveError> {
        debug!(
            samples = current_densities.len(),
            ?policy,
            "sweeping cell performance"
        );

        let results: Vec<_> = current_densities
            .par_iter()
            .map(|&current_density| {
                Performance::evaluate(state, current_density, polarization, faraday)
            })
            .collect();

        let mut curves = Self {
            points: Vec::with_capacity(results.len()),
            skipped: Vec::new(),
        };

        for (index, (result, &current_density)) in
            results.into_iter().zip(current_densities).enumerate()
        {
            match (result, policy) {
                (Ok(performance), _) => curves.points.push(performance),
                (Err(source), SweepPolicy::Strict) => {
                    return Err(CurveError {
                        index,
                        current_density,
                        source,
                    });
                }
                (Err(error), SweepPolicy::Permissive) => {
                    warn!(
                        index,
                        current_density = current_density.get::<ampere_per_square_meter>(),
                        %error,
                        "skipping sample"
                    );
                    curves.skipped.push(SkippedSample {
                        index,
                        current_density,
                        error,
                    });
                }
            }
        }

        debug!(
            points = curves.points.len(),
            skipped = curves.skipped.len(),
            "sweep complete"
        );

        Ok(curves)
    }

    /// Evaluated points, in sweep order.
    #[must_use]
    pub fn points(&self) -> &[Performance] {
        &self.points
    }

    /// Samples skipped by a permissive sweep, in sweep order.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedSample] {
        &self.skipped
    }

    /// Number of evaluated points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no point was evaluated successfully.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Current density series.
    #[must_use]
    pub fn current_density(&self) -> Vec<ElectricCurrentDensity> {
        self.series(|p| p.current_density)
    }

    /// Total cell current series.
    #[must_use]
    pub fn current(&self) -> Vec<ElectricCurrent> {
        self.series(Performance::current)
    }

    /// Cell voltage series.
    #[must_use]
    pub fn cell_voltage(&self) -> Vec<ElectricPotential> {
        self.series(|p| p.cell_voltage)
    }

    /// Areal power series.
    #[must_use]
    pub fn power(&self) -> Vec<ArealPower> {
        self.series(|p| p.power)
    }

    /// Faraday efficiency series.
    #[must_use]
    pub fn faraday_efficiency(&self) -> Vec<Ratio> {
        self.series(|p| p.faraday_efficiency)
    }

    /// Areal hydrogen production series.
    #[must_use]
    pub fn hydrogen_production(&self) -> Vec<ArealMassRate> {
        self.series(|p| p.hydrogen_production)
    }

    /// DC efficiency series.
    #[must_use]
    pub fn dc_efficiency(&self) -> Vec<Ratio> {
        self.series(|p| p.dc_efficiency)
    }

    /// Voltage efficiency series.
    #[must_use]
    pub fn voltage_efficiency(&self) -> Vec<Ratio> {
        self.series(|p| p.voltage_efficiency)
    }

    fn series<T>(&self, f: impl Fn(&Performance) -> T) -> Vec<T> {
        self.points.iter().map(f).collect()
    }
}
