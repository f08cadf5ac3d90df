use std::path::PathBuf;

use eframe::egui::{Context, TextureHandle, TextureOptions, Vec2};

use crate::data::loader::{self, TableError};
use crate::data::model::{CoachRecord, CoachTable};
use crate::picture::{self, PictureError};

// ---------------------------------------------------------------------------
// Per-cycle view of one coach
// ---------------------------------------------------------------------------

/// Outcome of resolving the selected record's picture.
pub enum PictureState {
    /// The record has no picture reference.
    Missing,
    /// Decoded and uploaded, ready to draw. `size` is the source pixel
    /// size; the UI scales it to the fixed display width.
    Ready { texture: TextureHandle, size: Vec2 },
    /// Resolution or decoding failed; the profile text still renders.
    Failed(PictureError),
}

/// Everything the profile area needs for the selected coach.
pub struct ProfileView {
    pub record: CoachRecord,
    pub picture: PictureState,
}

/// Result of looking up the current selection in the freshly loaded table.
pub enum ProfileState {
    Found(ProfileView),
    /// The selection matched no row. Only reachable out-of-band (the
    /// dropdown is a closed set, but the file can change between cycles).
    NotFound { name: String },
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The coach table itself is not stored here: each interaction loads it
/// fresh, the name list and profile view are extracted, and the table is
/// dropped before the next frame.
pub struct AppState {
    /// Fixed path to the backing file, supplied by `main`.
    pub data_file: PathBuf,

    /// Dropdown choices: distinct coach names in first-seen order.
    pub names: Vec<String>,

    /// Row count from the last successful load (for the top bar).
    pub record_count: usize,

    /// The dropdown's current selection, passed explicitly into every
    /// refresh rather than read from anywhere ambient.
    pub selected: Option<String>,

    /// Profile built for the current selection, if any.
    pub profile: Option<ProfileState>,

    /// Halting load-error message; when set, nothing else renders.
    pub load_error: Option<String>,

    /// Whether the first render cycle has run.
    pub initialized: bool,
}

impl AppState {
    pub fn new(data_file: PathBuf) -> Self {
        Self {
            data_file,
            names: Vec::new(),
            record_count: 0,
            selected: None,
            profile: None,
            load_error: None,
            initialized: false,
        }
    }

    /// Run one render cycle: re-read the backing file, rebuild the name
    /// list, and resolve the current selection against the fresh table.
    pub fn refresh(&mut self, ctx: &Context) {
        self.initialized = true;

        match loader::load_table(&self.data_file) {
            Ok(table) => {
                log::info!(
                    "loaded {} coach records from {}",
                    table.len(),
                    self.data_file.display()
                );
                self.load_error = None;
                self.names = table.distinct_names();
                self.record_count = table.len();
                self.profile = self
                    .selected
                    .as_deref()
                    .map(|name| build_profile(ctx, &table, name));
            }
            Err(err) => {
                log::error!("failed to load {}: {err}", self.data_file.display());
                self.load_error = Some(user_message(&err));
                self.names.clear();
                self.record_count = 0;
                self.profile = None;
            }
        }
    }

    /// Record a dropdown choice and run a fresh cycle for it.
    pub fn select(&mut self, ctx: &Context, name: String) {
        self.selected = Some(name);
        self.refresh(ctx);
    }
}

/// The two user-facing load-failure messages: a dedicated one for a
/// missing file, the underlying error text for everything else.
fn user_message(err: &TableError) -> String {
    if err.is_file_missing() {
        "The coaches data file was not found. Please check the file path.".to_string()
    } else {
        format!("Error loading the data: {err}")
    }
}

/// Look up `name` (first match wins) and resolve its picture.
fn build_profile(ctx: &Context, table: &CoachTable, name: &str) -> ProfileState {
    let Some(record) = table.find(name) else {
        return ProfileState::NotFound {
            name: name.to_string(),
        };
    };

    let picture = match record.picture_file() {
        None => PictureState::Missing,
        Some(file) => {
            let path = picture::resolve_path(file);
            match picture::load_picture(&path) {
                Ok(pixels) => {
                    let size = Vec2::new(pixels.size[0] as f32, pixels.size[1] as f32);
                    let texture =
                        ctx.load_texture(format!("picture:{name}"), pixels, TextureOptions::LINEAR);
                    PictureState::Ready { texture, size }
                }
                Err(err) => {
                    log::warn!("picture for {name}: {err}");
                    PictureState::Failed(err)
                }
            }
        }
    };

    ProfileState::Found(ProfileView {
        record: record.clone(),
        picture,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    fn fixture() -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(
            b"Coach_Name,Born_in,Age,Status,Picture,Highlights\n\
              Ana Duarte,Porto,52,Active,,Won the league. Back-to-back cups\n\
              Ben Okafor,Lagos,61,Retired,,\n\
              Ana Duarte,Faro,99,Retired,,\n",
        )
        .unwrap();
        tmp
    }

    #[test]
    fn refresh_builds_the_name_list_in_first_seen_order() {
        let tmp = fixture();
        let ctx = Context::default();
        let mut state = AppState::new(tmp.path().to_path_buf());

        state.refresh(&ctx);

        assert!(state.load_error.is_none());
        assert_eq!(state.names, vec!["Ana Duarte", "Ben Okafor"]);
        assert_eq!(state.record_count, 3);
        assert!(state.profile.is_none());
    }

    #[test]
    fn selecting_a_listed_name_yields_the_first_matching_profile() {
        let tmp = fixture();
        let ctx = Context::default();
        let mut state = AppState::new(tmp.path().to_path_buf());
        state.refresh(&ctx);

        state.select(&ctx, "Ana Duarte".to_string());

        match state.profile {
            Some(ProfileState::Found(ref view)) => {
                assert_eq!(view.record.born_in, "Porto");
                assert!(matches!(view.picture, PictureState::Missing));
            }
            _ => panic!("expected a found profile"),
        }
    }

    #[test]
    fn every_listed_name_resolves_to_a_profile() {
        let tmp = fixture();
        let ctx = Context::default();
        let mut state = AppState::new(tmp.path().to_path_buf());
        state.refresh(&ctx);

        for name in state.names.clone() {
            state.select(&ctx, name);
            assert!(matches!(state.profile, Some(ProfileState::Found(_))));
        }
    }

    #[test]
    fn out_of_band_names_report_not_found() {
        let tmp = fixture();
        let ctx = Context::default();
        let mut state = AppState::new(tmp.path().to_path_buf());
        state.refresh(&ctx);

        state.select(&ctx, "Nobody Real".to_string());

        match state.profile {
            Some(ProfileState::NotFound { ref name }) => assert_eq!(name, "Nobody Real"),
            _ => panic!("expected a not-found profile"),
        }
    }

    #[test]
    fn missing_file_halts_the_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::default();
        let mut state = AppState::new(dir.path().join("gone.csv"));

        state.refresh(&ctx);

        let msg = state.load_error.as_deref().unwrap();
        assert!(msg.contains("was not found"));
        assert!(state.names.is_empty());
        assert!(state.profile.is_none());
    }

    #[test]
    fn dangling_picture_reference_still_renders_the_profile() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(
            b"Coach_Name,Born_in,Age,Status,Picture,Highlights\n\
              Ana Duarte,Porto,52,Active,definitely-not-there.png,\n",
        )
        .unwrap();

        let ctx = Context::default();
        let mut state = AppState::new(tmp.path().to_path_buf());
        state.refresh(&ctx);
        state.select(&ctx, "Ana Duarte".to_string());

        match state.profile {
            Some(ProfileState::Found(ref view)) => {
                assert_eq!(view.record.age, "52");
                assert!(matches!(
                    view.picture,
                    PictureState::Failed(PictureError::NotFound(_))
                ));
            }
            _ => panic!("expected a found profile despite the bad picture"),
        }
    }
}
