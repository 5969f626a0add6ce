use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::features::Statistic;
use crate::data::model::Diagnosis;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (210.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Chart and label colours
// ---------------------------------------------------------------------------

/// Colour of the radar trace for a statistic.
pub fn series_color(statistic: Statistic) -> Color32 {
    let palette = generate_palette(Statistic::ALL.len());
    let idx = Statistic::ALL
        .iter()
        .position(|&s| s == statistic)
        .unwrap_or(0);
    palette[idx]
}

pub fn diagnosis_color(diagnosis: Diagnosis) -> Color32 {
    match diagnosis {
        Diagnosis::Benign => Color32::from_rgb(1, 219, 143),
        Diagnosis::Malignant => Color32::from_rgb(255, 75, 75),
    }
}
