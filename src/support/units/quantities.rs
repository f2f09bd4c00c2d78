use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, N3, P1, Z0},
};

/// Power per unit area, W/m² in SI.
///
/// Dimensionally identical to [`uom::si::f64::HeatFluxDensity`], so the
/// `heat_flux_density` units (e.g., `watt_per_square_meter`) apply.
pub type ArealPower = Quantity<ISQ<Z0, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Mass flow rate per unit area, kg/(s·m²) in SI.
pub type ArealMassRate = Quantity<ISQ<N2, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
