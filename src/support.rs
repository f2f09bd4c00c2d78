//! Supporting utilities used by models.
//!
//! These modules are public because they're useful outside the models that
//! need them, but their APIs are not stable.

pub mod constraint;
pub mod sweep;
pub mod units;
