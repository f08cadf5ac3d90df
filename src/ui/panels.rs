use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar: app title, load counts, halting errors.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Coach Profile Viewer");
        ui.separator();

        if let Some(msg) = &state.load_error {
            ui.label(RichText::new(msg).color(Color32::RED));
        } else {
            ui.label(format!(
                "{} records loaded, {} coaches",
                state.record_count,
                state.names.len()
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – coach selector
// ---------------------------------------------------------------------------

/// Render the coach dropdown. The choice set is exactly the distinct
/// names from the current table; picking an entry runs a fresh cycle.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Coaches");
    ui.separator();

    if state.load_error.is_some() {
        ui.label("No coaches available.");
        return;
    }
    if state.names.is_empty() {
        ui.label("The coaches file has no records.");
        return;
    }

    ui.strong("Select a Coach");

    let current = state.selected.clone();
    let names = state.names.clone();

    egui::ComboBox::from_id_salt("coach_select")
        .width(ui.available_width())
        .selected_text(current.clone().unwrap_or_default())
        .show_ui(ui, |ui: &mut Ui| {
            for name in &names {
                let is_selected = current.as_deref() == Some(name.as_str());
                if ui.selectable_label(is_selected, name).clicked() {
                    let ctx = ui.ctx().clone();
                    state.select(&ctx, name.clone());
                }
            }
        });
}
