use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint};
use electrolyser_models::models::electrochemical::alkaline::{Performance, PerformanceCurves};
use uom::si::{
    electric_current::ampere, electric_potential::volt, mass_rate::kilogram_per_second,
    ratio::ratio,
};

const COLUMNS: usize = 3;
const CHART_WIDTH: f32 = 360.0;
const CHART_HEIGHT: f32 = 260.0;

/// A grid of performance charts, each plotted against total cell current.
pub struct CurvesApp {
    charts: Vec<Chart>,
}

struct Chart {
    title: &'static str,
    y_label: &'static str,
    points: Vec<PlotPoint>,
}

impl CurvesApp {
    #[must_use]
    pub fn new(curves: &PerformanceCurves) -> Self {
        let chart = |title: &'static str, y_label: &'static str, y: fn(&Performance) -> f64| {
            Chart {
                title,
                y_label,
                points: curves
                    .points()
                    .iter()
                    .map(|point| PlotPoint::new(point.current().get::<ampere>(), y(point)))
                    .collect(),
            }
        };

        Self {
            charts: vec![
                chart("Cell voltage", "Voltage [V]", |p| p.cell_voltage.get::<volt>()),
                chart("Faraday efficiency", "Faraday efficiency [-]", |p| {
                    p.faraday_efficiency.get::<ratio>()
                }),
                chart("Hydrogen production", "Hydrogen production [kg/s]", |p| {
                    p.total_hydrogen_production().get::<kilogram_per_second>()
                }),
                chart("DC efficiency", "DC efficiency [-]", |p| {
                    p.dc_efficiency.get::<ratio>()
                }),
                chart("Voltage efficiency", "Voltage efficiency [-]", |p| {
                    p.voltage_efficiency.get::<ratio>()
                }),
            ],
        }
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for CurvesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("performance-curves").show(ui, |ui| {
                for (index, chart) in self.charts.iter().enumerate() {
                    ui.vertical(|ui| {
                        ui.heading(chart.title);
                        Plot::new(chart.title)
                            .legend(Legend::default())
                            .width(CHART_WIDTH)
                            .height(CHART_HEIGHT)
                            .x_axis_label("Current [A]")
                            .y_axis_label(chart.y_label)
                            .show(ui, |plot_ui| {
                                let points = chart.points.as_slice();
                                plot_ui.line(Line::new(points).name(chart.title));
                            });
                    });

                    if (index + 1) % COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
        });
    }
}
