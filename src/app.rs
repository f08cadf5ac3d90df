use std::path::PathBuf;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, profile};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CoachViewerApp {
    pub state: AppState,
}

impl CoachViewerApp {
    pub fn new(data_file: PathBuf) -> Self {
        Self {
            state: AppState::new(data_file),
        }
    }
}

impl eframe::App for CoachViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The first frame runs the initial render cycle; after that a
        // fresh cycle only happens on selection changes.
        if !self.state.initialized {
            self.state.refresh(ctx);
        }

        // ---- Top panel: title and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: coach selector ----
        egui::SidePanel::left("coach_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: profile ----
        egui::CentralPanel::default().show(ctx, |ui| {
            profile::profile_view(ui, &self.state);
        });
    }
}
