//! Electrochemical conversion models.
//!
//! This module contains steady-state models of electrochemical cells,
//! starting with alkaline water electrolysis.

pub mod alkaline;
