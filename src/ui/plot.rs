use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::color::series_color;
use crate::data::radar::{categories, RADIAL_RANGE};
use crate::state::AppState;

/// Radial grid circles.
const RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
const RING_SEGMENTS: usize = 96;

// ---------------------------------------------------------------------------
// Radar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the radar chart of the current inputs in the central panel.
pub fn radar_plot(ui: &mut Ui, state: &AppState) {
    if state.radar.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a data folder to view measurements  (File → Open data folder…)");
        });
        return;
    }

    let labels: Vec<&str> = categories().collect();
    let n = labels.len();
    let outer = RADIAL_RANGE[1];
    let grid = ui.visuals().weak_text_color().gamma_multiply(0.5);

    Plot::new("radar_chart")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.3 * outer)
        .include_x(1.3 * outer)
        .include_y(-1.2 * outer)
        .include_y(1.2 * outer)
        .show(ui, |plot_ui| {
            // ---- Grid: rings and spokes ----
            for r in RINGS {
                let ring: PlotPoints = (0..=RING_SEGMENTS)
                    .map(|i| {
                        let theta = TAU * i as f64 / RING_SEGMENTS as f64;
                        [r * outer * theta.cos(), r * outer * theta.sin()]
                    })
                    .collect();
                plot_ui.line(Line::new(ring).color(grid).width(0.5));
            }
            for (idx, label) in labels.iter().enumerate() {
                let tip = polar_point(outer, idx, n);
                plot_ui.line(Line::new(vec![[0.0, 0.0], tip]).color(grid).width(0.5));

                let anchor = polar_point(outer * 1.12, idx, n);
                plot_ui.text(Text::new(PlotPoint::new(anchor[0], anchor[1]), *label));
            }

            // ---- Traces ----
            for series in &state.radar {
                let color = series_color(series.statistic);
                plot_ui.polygon(
                    Polygon::new(PlotPoints::new(polygon_points(&series.values)))
                        .name(series.name())
                        .fill_color(color.gamma_multiply(0.25))
                        .stroke(Stroke::new(1.5, color)),
                );
            }
        });

    ui.label(
        RichText::new("Radial axis: min-max normalized over the dataset (0-1)")
            .small()
            .color(Color32::GRAY),
    );
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Cartesian position of radius `r` on spoke `index` of `n`, spoke 0 at the
/// top and the rest counter-clockwise.
pub fn polar_point(r: f64, index: usize, n: usize) -> [f64; 2] {
    let theta = FRAC_PI_2 + TAU * index as f64 / n as f64;
    [r * theta.cos(), r * theta.sin()]
}

/// Vertices of a radar trace, one per value.
pub fn polygon_points(values: &[f64]) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .map(|(i, &r)| polar_point(r, i, values.len()))
        .collect()
}
