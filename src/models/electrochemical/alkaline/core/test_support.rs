use uom::si::{
    electric_current_density::ampere_per_square_meter,
    f64::{ElectricCurrentDensity, ElectricPotential, Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use super::{constants::P_0, reversible};

pub(super) fn current_density(amps_per_square_meter: f64) -> ElectricCurrentDensity {
    ElectricCurrentDensity::new::<ampere_per_square_meter>(amps_per_square_meter)
}

/// Reversible voltage at 363.15 K and 30 × `p_0` with the default vapour pressure.
pub(super) fn e_rev_default() -> ElectricPotential {
    reversible::reversible_voltage(
        ThermodynamicTemperature::new::<kelvin>(363.15),
        Pressure::new::<pascal>(30.0 * P_0),
        reversible::default_water_vapour_pressure(),
    )
    .expect("default conditions are in domain")
}
