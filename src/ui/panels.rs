use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::diagnosis_color;
use crate::data::features::Statistic;
use crate::data::model::Diagnosis;
use crate::state::{AppState, Page};

const DISCLAIMER: &str = "This app can assist medical professionals in making a diagnosis, \
                          but should not be used as a substitute for professional medical advice.";
const SUBTITLE: &str = "Machine Learning-Assisted Cytology Analysis";

// ---------------------------------------------------------------------------
// Left side panel – measurement sliders
// ---------------------------------------------------------------------------

/// Render the left slider panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Cell Nuclei Measurements");
    ui.separator();

    if state.sliders.is_empty() {
        ui.label("No dataset loaded.");
        return;
    }

    // Clone what we need so we can mutate state inside the loop.
    let sliders = state.sliders.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for stat in Statistic::ALL {
                egui::CollapsingHeader::new(RichText::new(stat.series_name()).strong())
                    .id_salt(stat.suffix())
                    .default_open(stat == Statistic::Mean)
                    .show(ui, |ui: &mut Ui| {
                        for spec in sliders.iter().filter(|s| s.statistic == stat) {
                            let mut value = state.inputs.get(&spec.key).unwrap_or(spec.default);
                            ui.label(&spec.label);
                            let response = ui.add(egui::Slider::new(&mut value, 0.0..=spec.max));
                            if response.changed() {
                                state.set_input(&spec.key, value);
                            }
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Right side panel – prediction
// ---------------------------------------------------------------------------

/// Render the classification label and both class probabilities.
pub fn prediction_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Cell cluster prediction");
    ui.separator();

    let Some(prediction) = state.prediction else {
        ui.label("No prediction available.");
        return;
    };

    let diagnosis = prediction.diagnosis();
    ui.label("The cell cluster is:");
    ui.label(
        RichText::new(diagnosis.to_string())
            .size(20.0)
            .strong()
            .color(diagnosis_color(diagnosis)),
    );
    ui.add_space(8.0);

    ui.label(format!(
        "Probability of being benign: {:.4}",
        prediction.probability_benign
    ));
    ui.label(format!(
        "Probability of being malignant: {:.4}",
        prediction.probability_malignant
    ));

    ui.add_space(8.0);
    ui.label(RichText::new(DISCLAIMER).small().color(Color32::GRAY));
}

// ---------------------------------------------------------------------------
// Home page
// ---------------------------------------------------------------------------

pub fn home_page(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        ui.heading("Breast Cancer Detection System");
        ui.label(RichText::new(SUBTITLE).size(16.0));
        ui.add_space(8.0);
        ui.label(
            "This application assists in the early assessment of breast cancer using cell \
             nuclei measurements derived from cytology samples. A trained model analyzes \
             morphological features of breast cell clusters and estimates whether the tissue \
             is benign or malignant.",
        );
        ui.separator();

        ui.strong("How this application works");
        ui.columns(2, |cols| {
            cols[0].strong("Input");
            cols[0].label("• Cell nuclei measurements from cytology samples");
            cols[0].label("• Radius, texture, perimeter, area and shape features");
            cols[0].label("• Values adjusted manually with sliders");

            cols[1].strong("Output");
            cols[1].label(format!(
                "• Predicted classification ({} / {})",
                Diagnosis::Benign,
                Diagnosis::Malignant
            ));
            cols[1].label("• Probability scores for each outcome");
            cols[1].label("• Radar chart of the feature distributions");
        });
        ui.separator();

        ui.label(
            RichText::new(
                "⚠ Medical disclaimer: this application is intended for educational and \
                 research purposes only. It should not be used as a substitute for \
                 professional medical diagnosis or clinical decision-making.",
            )
            .color(Color32::from_rgb(230, 160, 0)),
        );
        ui.separator();

        if ui.button("Go to Cancer Predictor").clicked() {
            state.page = Page::Predictor;
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui.selectable_label(state.page == Page::Home, "Home").clicked() {
            state.page = Page::Home;
        }
        if ui
            .selectable_label(state.page == Page::Predictor, "Cancer Predictor")
            .clicked()
        {
            state.page = Page::Predictor;
        }

        ui.separator();

        let summary = state.context.as_ref().map(|ctx| {
            let ds = ctx.dataset();
            format!(
                "{} records ({} benign, {} malignant)",
                ds.len(),
                ds.count(Diagnosis::Benign),
                ds.count(Diagnosis::Malignant)
            )
        });
        if let Some(summary) = summary {
            ui.label(summary);
            if ui.button("Reset to means").clicked() {
                state.reset_inputs();
            }
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

/// Pick a data root containing `data/data.csv` and `model/*.json`, then reload.
pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open data folder")
        .set_directory(&state.root)
        .pick_folder();

    if let Some(path) = folder {
        state.load_from(&path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_text_is_plain_ascii() {
        assert!(SUBTITLE.is_ascii());
        assert!(DISCLAIMER.is_ascii());
    }
}
