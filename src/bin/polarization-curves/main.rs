//! Sweeps an alkaline electrolysis cell over a current-density range and
//! reports its polarization and efficiency curves.

#[cfg(feature = "plot")]
mod plot;

use std::error::Error;

use clap::Parser;
use electrolyser_models::{
    models::electrochemical::alkaline::{
        AlkalineElectrolyser, ElectrolyserState, PerformanceCurves, SweepPolicy,
    },
    support::{constraint::NonNegative, sweep::linspace},
};
use tracing::info;
use uom::si::{
    electric_current::ampere, electric_current_density::ampere_per_square_meter,
    electric_potential::volt, f64::ElectricCurrentDensity, mass_rate::kilogram_per_second,
    power::watt, ratio::ratio,
};

#[derive(Parser)]
#[command(name = "polarization-curves")]
#[command(about = "Steady-state performance curves of an alkaline electrolysis cell", long_about = None)]
struct Cli {
    /// Operating temperature in kelvin
    #[arg(long, default_value_t = 363.15)]
    temperature: f64,

    /// Operating pressure as a multiple of 101325 Pa
    #[arg(long, default_value_t = 30.0)]
    pressure: f64,

    /// Active cell area in square meters
    #[arg(long, default_value_t = 0.25)]
    area: f64,

    /// First current density of the sweep in A/m²
    #[arg(long, default_value_t = 500.0)]
    start: f64,

    /// Last current density of the sweep in A/m²
    #[arg(long, default_value_t = 5000.0)]
    stop: f64,

    /// Number of evenly spaced samples
    #[arg(long, default_value_t = 20)]
    points: usize,

    /// Skip samples outside the model's domain instead of failing
    #[arg(long)]
    permissive: bool,

    /// Print the table without opening the plot window
    #[cfg(feature = "plot")]
    #[arg(long)]
    no_plot: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let start = NonNegative::new(cli.start)?.into_inner();
    let stop = NonNegative::new(cli.stop)?.into_inner();

    let state = ElectrolyserState::from_nominal(cli.temperature, cli.pressure, cli.area)?;
    let electrolyser = AlkalineElectrolyser::new(state);

    let samples: Vec<_> = linspace(start, stop, cli.points)
        .into_iter()
        .map(ElectricCurrentDensity::new::<ampere_per_square_meter>)
        .collect();

    let policy = if cli.permissive {
        SweepPolicy::Permissive
    } else {
        SweepPolicy::Strict
    };

    let reversible_voltage = electrolyser.reversible_voltage()?;
    let curves = electrolyser.curves(&samples, policy)?;

    info!(
        reversible_voltage = reversible_voltage.get::<volt>(),
        evaluated = curves.len(),
        skipped = curves.skipped().len(),
        "sweep complete"
    );

    print_table(&curves);

    #[cfg(feature = "plot")]
    if !cli.no_plot {
        plot::CurvesApp::new(&curves).run("Alkaline electrolyser")?;
    }

    Ok(())
}

fn print_table(curves: &PerformanceCurves) {
    println!(
        "{:>10} {:>12} {:>10} {:>12} {:>10} {:>14} {:>10} {:>10}",
        "I [A]", "j [A/m²]", "U [V]", "P [W]", "eta_F", "H2 [kg/s]", "eta_DC", "eta_V"
    );

    for point in curves.points() {
        println!(
            "{:>10.2} {:>12.2} {:>10.4} {:>12.2} {:>10.4} {:>14.6e} {:>10.4} {:>10.4}",
            point.current().get::<ampere>(),
            point.current_density.get::<ampere_per_square_meter>(),
            point.cell_voltage.get::<volt>(),
            point.total_power().get::<watt>(),
            point.faraday_efficiency.get::<ratio>(),
            point.total_hydrogen_production().get::<kilogram_per_second>(),
            point.dc_efficiency.get::<ratio>(),
            point.voltage_efficiency.get::<ratio>(),
        );
    }

    for skipped in curves.skipped() {
        println!(
            "skipped sample {} at {:.2} A/m²: {}",
            skipped.index,
            skipped.current_density.get::<ampere_per_square_meter>(),
            skipped.error
        );
    }
}
