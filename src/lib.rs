//! # Electrolyser Models
//!
//! Steady-state electrochemical performance models for water electrolysis
//! cells, built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Formulas, constants, and error types specific to one model stay in that
//! model's internal `core` module. Utilities move to [`support`] once they are
//! useful outside a single model, as unit aliases and sample generation are.

pub mod models;
pub mod support;
