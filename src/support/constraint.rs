//! Validated numeric values.
//!
//! A [`Constrained<T, C>`] can only be built from a value that passes the
//! check of its marker `C`. Operating states and fit coefficients hold their
//! inputs this way, and the model formulas use the same markers to guard
//! logarithm arguments and denominators before evaluating them.
//!
//! Markers:
//!
//! - [`NonNegative`]: `x ≥ 0`, for sweep bounds.
//! - [`NonZero`]: `x ≠ 0`, for denominators.
//! - [`StrictlyPositive`]: `x > 0`, for temperatures, pressures, areas, and log arguments.
//! - [`UnitIntervalLowerOpen`]: `0 < x ≤ 1`, for efficiency ceilings.
//!
//! `NaN` fails every check.
//!
//! ```
//! use electrolyser_models::support::constraint::{ConstraintError, StrictlyPositive};
//! use uom::si::{area::square_meter, f64::Area};
//!
//! let area = StrictlyPositive::new(Area::new::<square_meter>(0.25)).unwrap();
//! assert_eq!(area.into_inner().get::<square_meter>(), 0.25);
//!
//! assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
//! ```

use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;
use thiserror::Error;

/// A check that a [`Constrained`] value must pass.
pub trait Constraint<T> {
    /// Checks `value`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing why `value` is rejected.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("value is negative")]
    Negative,
    #[error("value is zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value exceeds one")]
    AboveOne,
}

/// A value that has passed the check of marker `C`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks and wraps `value`.
    ///
    /// # Errors
    ///
    /// Returns the marker's [`ConstraintError`] if `value` is rejected.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Returns the wrapped value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Orders `value` against zero, rejecting `NaN`.
fn sign<T: PartialOrd + Zero>(value: &T) -> Result<Ordering, ConstraintError> {
    value
        .partial_cmp(&T::zero())
        .ok_or(ConstraintError::NotANumber)
}

/// Zero or greater.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonNegative;

/// Anything but zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonZero;

/// Greater than zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrictlyPositive;

/// Greater than zero and at most one. Defined for `f64` only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitIntervalLowerOpen;

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign(value)? {
            Ordering::Less => Err(ConstraintError::Negative),
            Ordering::Equal | Ordering::Greater => Ok(()),
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign(value)? {
            Ordering::Equal => Err(ConstraintError::Zero),
            Ordering::Less | Ordering::Greater => Ok(()),
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign(value)? {
            Ordering::Less => Err(ConstraintError::Negative),
            Ordering::Equal => Err(ConstraintError::Zero),
            Ordering::Greater => Ok(()),
        }
    }
}

impl Constraint<f64> for UnitIntervalLowerOpen {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        StrictlyPositive::check(value)?;
        if *value > 1.0 {
            return Err(ConstraintError::AboveOne);
        }
        Ok(())
    }
}

impl NonNegative {
    /// Wraps `value` if it is zero or greater.
    ///
    /// # Errors
    ///
    /// [`ConstraintError::Negative`] or [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl NonZero {
    /// Wraps `value` if it is not zero.
    ///
    /// # Errors
    ///
    /// [`ConstraintError::Zero`] or [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl StrictlyPositive {
    /// Wraps `value` if it is greater than zero.
    ///
    /// # Errors
    ///
    /// [`ConstraintError::Zero`], [`ConstraintError::Negative`], or
    /// [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl UnitIntervalLowerOpen {
    /// Wraps `value` if `0 < value ≤ 1`.
    ///
    /// # Errors
    ///
    /// [`ConstraintError::AboveOne`] above the interval, otherwise as
    /// [`StrictlyPositive::new`].
    pub fn new(value: f64) -> Result<Constrained<f64, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        area::square_meter,
        electric_current_density::ampere_per_square_meter,
        f64::{Area, ElectricCurrentDensity, Pressure},
        pressure::pascal,
    };

    #[test]
    fn sweep_bounds() {
        let j = |value| ElectricCurrentDensity::new::<ampere_per_square_meter>(value);

        assert!(NonNegative::new(j(0.0)).is_ok());
        assert!(NonNegative::new(j(5000.0)).is_ok());
        assert_eq!(NonNegative::new(j(-1.0)), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(-0.0_f64).map(Constrained::into_inner), Ok(-0.0));
    }

    #[test]
    fn denominators() {
        assert!(NonZero::new(-3.5).is_ok());
        assert_eq!(NonZero::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(NonZero::new(-0.0), Err(ConstraintError::Zero));
    }

    #[test]
    fn operating_state_inputs() {
        assert!(StrictlyPositive::new(Pressure::new::<pascal>(101_325.0)).is_ok());
        assert_eq!(
            StrictlyPositive::new(Pressure::new::<pascal>(0.0)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            StrictlyPositive::new(Area::new::<square_meter>(-0.25)),
            Err(ConstraintError::Negative)
        );
        assert!(StrictlyPositive::new(f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn efficiency_ceiling() {
        assert!(UnitIntervalLowerOpen::new(0.94).is_ok());
        assert!(UnitIntervalLowerOpen::new(1.0).is_ok());
        assert_eq!(UnitIntervalLowerOpen::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(
            UnitIntervalLowerOpen::new(1.000_000_1),
            Err(ConstraintError::AboveOne)
        );
    }

    #[test]
    fn nan_fails_every_check() {
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(NonZero::new(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(StrictlyPositive::new(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(
            UnitIntervalLowerOpen::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
