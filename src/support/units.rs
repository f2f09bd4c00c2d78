//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., voltage, pressure, current density).
//! This module provides quantities that are useful for cell-level electrochemistry
//! but aren't included in [`uom`].
//!
//! ## Per-area quantities
//!
//! Cell models work in terms of current density, so their power and production
//! outputs are naturally expressed per unit of active cell area.
//! Multiplying by an [`Area`](uom::si::f64::Area) recovers the whole-cell value:
//!
//! ```
//! use electrolyser_models::support::units::ArealPower;
//! use uom::si::{
//!     f64::{Area, ElectricCurrentDensity, ElectricPotential, Power},
//!     area::square_meter,
//!     electric_current_density::ampere_per_square_meter,
//!     electric_potential::volt,
//!     power::watt,
//! };
//!
//! let voltage = ElectricPotential::new::<volt>(2.0);
//! let current_density = ElectricCurrentDensity::new::<ampere_per_square_meter>(1000.0);
//!
//! let areal_power: ArealPower = voltage * current_density;
//! let power: Power = areal_power * Area::new::<square_meter>(0.25);
//! assert_eq!(power.get::<watt>(), 500.0);
//! ```

mod quantities;

pub use quantities::{ArealMassRate, ArealPower};
