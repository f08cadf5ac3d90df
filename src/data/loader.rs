use std::io;
use std::path::{Path, PathBuf};

use encoding_rs::WINDOWS_1252;
use thiserror::Error;

use super::model::{CoachRecord, CoachTable};

/// Columns a coaches file must carry. `Picture` and `Highlights` are
/// optional and may be missing entirely.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Coach_Name", "Born_in", "Age", "Status"];

// ---------------------------------------------------------------------------
// TableError – halting load failures
// ---------------------------------------------------------------------------

/// Why a coaches file could not be loaded. Every variant halts the render
/// cycle; a missing file is kept separate so the UI can show its own
/// message for it.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("coaches data file not found: {}", path.display())]
    FileMissing { path: PathBuf },

    #[error("could not read the coaches data: {0}")]
    Io(#[source] io::Error),

    #[error("the coaches data is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("could not parse the coaches data: {0}")]
    Parse(#[from] csv::Error),
}

impl TableError {
    /// True for the file-not-found case, which gets a dedicated
    /// user-facing message.
    pub fn is_file_missing(&self) -> bool {
        matches!(self, TableError::FileMissing { .. })
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read the coaches file into a [`CoachTable`].
///
/// The file is a header-first CSV in Windows-1252 (the data comes from a
/// legacy export, not UTF-8). One attempt per call, no retry; the caller
/// decides what a failure means for the current render cycle.
pub fn load_table(path: &Path) -> Result<CoachTable, TableError> {
    let raw = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TableError::FileMissing {
            path: path.to_path_buf(),
        },
        _ => TableError::Io(e),
    })?;

    // Windows-1252 maps every byte, so decoding never fails outright;
    // the replacement flag is irrelevant here.
    let (text, _, _) = WINDOWS_1252.decode(&raw);

    let mut reader = csv::Reader::from_reader(text.as_bytes());

    // Check the header up front so a malformed export produces one clear
    // error instead of a per-row deserialization failure.
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(TableError::MissingColumn(column));
        }
    }

    let mut records: Vec<CoachRecord> = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }

    Ok(CoachTable::new(records))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
