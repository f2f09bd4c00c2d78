//! Physical constants and fit coefficients shared by the cell formulas.
//!
//! Values are kept exactly as the empirical correlations were fitted with.
//! In particular the Faraday constant appears twice: the voltage and DC
//! efficiency correlations use the rounded value, the production rate uses
//! the CODATA value.

/// Reference pressure used to scale nominal pressures, Pa.
pub(super) const P_0: f64 = 101_325.0;

/// Universal gas constant, J/(mol·K).
pub(super) const R: f64 = 8.314;

/// Faraday constant as used by the voltage and efficiency correlations, C/mol.
pub(super) const F: f64 = 96_485.0;

/// Faraday constant as used by the production rate, C/mol.
pub(super) const F_EXACT: f64 = 96_485.332_1;

/// Molar mass of hydrogen as used by the production rate, g/mol.
pub(super) const M_H2: f64 = 1.008;

/// Higher heating value of hydrogen, J/mol.
pub(super) const HHV_H2: f64 = 285.83e3;

/// Exponent of the default water vapour partial pressure, `p_H2O = 10^x * p_0`.
pub(super) const LOG10_WATER_VAPOUR_RATIO: f64 = -0.645;

/// Coefficients of the standard reversible voltage correlation `E0(T)`.
pub(super) const E0_COEFFICIENTS: [f64; 4] = [1.5184, -1.5421e-3, 9.523e-5, 9.84e-8];

/// Unit conversion applied to the Faraday efficiency fit coefficient `f1`.
///
/// Equal to `((1/1000) / (1/10000))^2`.
pub(super) const FARADAY_FIT_SCALE: f64 = 100.0;
