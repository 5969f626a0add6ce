use eframe::egui;

use crate::config::AppConfig;
use crate::state::{AppState, Page};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CytoPredictApp {
    pub state: AppState,
}

impl CytoPredictApp {
    /// Load the session context from the configured data root.
    pub fn new(config: &AppConfig) -> Self {
        let mut state = AppState::default();
        state.load_from(&config.root);
        Self { state }
    }
}

impl eframe::App for CytoPredictApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        match self.state.page {
            Page::Home => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    panels::home_page(ui, &mut self.state);
                });
            }
            Page::Predictor => {
                // ---- Left side panel: sliders ----
                egui::SidePanel::left("slider_panel")
                    .default_width(260.0)
                    .resizable(true)
                    .show(ctx, |ui| {
                        panels::side_panel(ui, &mut self.state);
                    });

                // ---- Right side panel: prediction ----
                egui::SidePanel::right("prediction_panel")
                    .default_width(240.0)
                    .resizable(true)
                    .show(ctx, |ui| {
                        panels::prediction_panel(ui, &self.state);
                    });

                // ---- Central panel: radar chart ----
                egui::CentralPanel::default().show(ctx, |ui| {
                    plot::radar_plot(ui, &self.state);
                });
            }
        }
    }
}
