use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Size, StripBuilder};

use crate::data::model::CoachRecord;
use crate::state::{AppState, PictureState, ProfileState, ProfileView};

/// Fixed display width for coach portraits, in points.
const PICTURE_WIDTH: f32 = 170.0;

// ---------------------------------------------------------------------------
// Profile view (central panel)
// ---------------------------------------------------------------------------

/// Render the central panel for the current cycle: the halting error, the
/// no-selection prompt, the not-found notice, or the profile itself.
pub fn profile_view(ui: &mut Ui, state: &AppState) {
    if let Some(msg) = &state.load_error {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new(msg).color(Color32::RED).heading());
        });
        return;
    }

    let Some(profile) = &state.profile else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Select a coach from the list");
        });
        return;
    };

    match profile {
        ProfileState::NotFound { name } => {
            ui.label(
                RichText::new(format!("No profile information found for {name}"))
                    .color(Color32::YELLOW),
            );
        }
        ProfileState::Found(view) => found_profile(ui, view),
    }
}

fn found_profile(ui: &mut Ui, view: &ProfileView) {
    let record = &view.record;

    ui.heading(format!("{} Profile", record.name));
    ui.add_space(8.0);

    // Picture region first, then the text fields, at a fixed 1:2 ratio.
    // The picture cell is drawn whatever its resolution outcome was.
    StripBuilder::new(ui)
        .size(Size::relative(1.0 / 3.0))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.cell(|ui| picture_region(ui, view));
            strip.cell(|ui| details_region(ui, record));
        });

    ui.add_space(12.0);
    highlights_section(ui, record);
}

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

fn picture_region(ui: &mut Ui, view: &ProfileView) {
    match &view.picture {
        PictureState::Missing => {
            ui.label("No picture available.");
        }
        PictureState::Ready { texture, size } => {
            let scaled = egui::vec2(PICTURE_WIDTH, PICTURE_WIDTH * size.y / size.x);
            ui.add(egui::Image::new(texture).fit_to_exact_size(scaled));
            ui.label(
                RichText::new(format!("{}'s Picture", view.record.name))
                    .small()
                    .weak(),
            );
        }
        PictureState::Failed(err) => {
            let color = if err.is_warning() {
                Color32::YELLOW
            } else {
                Color32::RED
            };
            ui.label(RichText::new(err.to_string()).color(color));
        }
    }
}

fn details_region(ui: &mut Ui, record: &CoachRecord) {
    let fields = [
        ("Coach Name:", record.name.as_str()),
        ("Born In:", record.born_in.as_str()),
        ("Age:", record.age.as_str()),
        ("Status:", record.status.as_str()),
    ];

    for (label, value) in fields {
        ui.horizontal(|ui: &mut Ui| {
            ui.strong(label);
            ui.label(value);
        });
    }
}

fn highlights_section(ui: &mut Ui, record: &CoachRecord) {
    let items = record.highlight_items();
    if items.is_empty() {
        ui.label(format!("No career highlights found for {}", record.name));
        return;
    }

    ui.strong("Career Highlights:");
    for item in items {
        ui.label(format!("• {item}"));
    }
}
