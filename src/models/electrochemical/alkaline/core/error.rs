use thiserror::Error;
use uom::si::f64::Pressure;

use crate::support::constraint::ConstraintError;

/// A formula precondition was violated while evaluating the cell model.
///
/// Preconditions are checked before the offending operation runs,
/// so a `DomainError` is never accompanied by a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// The argument of a logarithm is zero, negative, or not a number.
    #[error("log argument must be positive: {term} = {value}")]
    NonPositiveLogArgument {
        /// The term whose logarithm was requested.
        term: &'static str,

        /// Offending value of the argument.
        value: f64,
    },

    /// The water vapour partial pressure is zero, negative, or not a number.
    #[error("water vapour partial pressure must be positive: {pressure:?}")]
    NonPositivePartialPressure {
        /// Offending partial pressure.
        pressure: Pressure,
    },

    /// A quantity used as a denominator evaluated to zero.
    #[error("{quantity} must not be zero")]
    ZeroDenominator {
        /// Name of the quantity that vanished.
        quantity: &'static str,
    },
}

/// Errors that can occur when constructing an [`ElectrolyserState`](super::ElectrolyserState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// The operating temperature is not strictly positive.
    #[error("invalid operating temperature")]
    Temperature(#[source] ConstraintError),

    /// The operating pressure is not strictly positive.
    #[error("invalid operating pressure")]
    Pressure(#[source] ConstraintError),

    /// The active cell area is not strictly positive.
    #[error("invalid cell area")]
    CellArea(#[source] ConstraintError),
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::pressure::pascal;

    #[test]
    fn messages_name_the_offending_value() {
        let err = DomainError::NonPositivePartialPressure {
            pressure: Pressure::new::<pascal>(-1.0),
        };
        assert!(err.to_string().starts_with("water vapour partial pressure must be positive"));

        let err = DomainError::ZeroDenominator {
            quantity: "electrical power",
        };
        assert_eq!(err.to_string(), "electrical power must not be zero");
    }
}
