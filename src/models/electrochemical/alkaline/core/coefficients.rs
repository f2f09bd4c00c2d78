//! Empirical fit coefficients of the cell model.

use crate::support::constraint::{Constrained, StrictlyPositive, UnitIntervalLowerOpen};

/// Coefficients of the Ulleberg polarization curve.
///
/// The curve adds an ohmic and an activation overpotential to the reversible voltage:
///
/// ```text
/// U(i) = E_rev + (r1 + r2·Tc)·i + s·log10((t1 + t2/Tc + t3/Tc²)·i + 1)
/// ```
///
/// where `i` is the current density in A/m² and `Tc` the temperature in °C.
/// Every coefficient can be overridden on its own:
///
/// ```
/// use electrolyser_models::models::electrochemical::alkaline::PolarizationCoefficients;
///
/// let coefficients = PolarizationCoefficients {
///     s: 0.2,
///     ..PolarizationCoefficients::default()
/// };
/// assert_eq!(coefficients.r1, 8.05e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarizationCoefficients {
    /// Electrolyte ohmic resistance, Ω·m².
    pub r1: f64,

    /// Temperature dependence of the ohmic resistance, Ω·m²/°C.
    pub r2: f64,

    /// Electrode overvoltage coefficient, V.
    pub s: f64,

    /// Electrode overvoltage coefficient, m²/A.
    pub t1: f64,

    /// Electrode overvoltage coefficient, m²·°C/A.
    pub t2: f64,

    /// Electrode overvoltage coefficient, m²·°C²/A.
    pub t3: f64,
}

impl Default for PolarizationCoefficients {
    fn default() -> Self {
        Self {
            r1: 8.05e-5,
            r2: -2.5e-7,
            s: 0.19,
            t1: 1.002,
            t2: 8.424,
            t3: 247.3,
        }
    }
}

/// Coefficients of the Faraday efficiency fit.
///
/// `f1` sets how quickly the efficiency rises with current and `f2` is the
/// asymptotic efficiency reached at high current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaradayCoefficients {
    f1: Constrained<f64, StrictlyPositive>,
    f2: Constrained<f64, UnitIntervalLowerOpen>,
}

impl FaradayCoefficients {
    /// Creates Faraday efficiency coefficients from validated values.
    #[must_use]
    pub fn new(
        f1: Constrained<f64, StrictlyPositive>,
        f2: Constrained<f64, UnitIntervalLowerOpen>,
    ) -> Self {
        Self { f1, f2 }
    }

    /// Returns the rise coefficient `f1`, mA²/cm⁴.
    #[must_use]
    pub fn f1(&self) -> f64 {
        self.f1.into_inner()
    }

    /// Returns the asymptotic efficiency `f2`.
    #[must_use]
    pub fn f2(&self) -> f64 {
        self.f2.into_inner()
    }
}

impl Default for FaradayCoefficients {
    fn default() -> Self {
        Self::new(
            StrictlyPositive::new(200.0).expect("200 is strictly positive"),
            UnitIntervalLowerOpen::new(0.94).expect("0.94 lies in (0, 1]"),
        )
    }
}
