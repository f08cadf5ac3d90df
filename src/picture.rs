use std::io;
use std::path::{Path, PathBuf};

use eframe::egui::ColorImage;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Path resolution
// ---------------------------------------------------------------------------

/// Directory holding the referenced image files.
pub const ASSET_DIR: &str = "assets";

const ASSET_PREFIX: &str = "assets/";

/// Resolve a raw `Picture` cell into a path: values already carrying the
/// `assets/` prefix are used unchanged, everything else is joined onto
/// the asset directory.
pub fn resolve_path(raw: &str) -> PathBuf {
    if raw.starts_with(ASSET_PREFIX) {
        PathBuf::from(raw)
    } else {
        Path::new(ASSET_DIR).join(raw)
    }
}

// ---------------------------------------------------------------------------
// PictureError – non-fatal, per-image failures
// ---------------------------------------------------------------------------

/// Why a referenced picture could not be shown. None of these stop the
/// rest of the profile from rendering.
#[derive(Debug, Error)]
pub enum PictureError {
    #[error("Image file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Could not identify image format: {}", .0.display())]
    UnrecognizedFormat(PathBuf),

    #[error("Error displaying image {}: {message}", path.display())]
    Other { path: PathBuf, message: String },
}

impl PictureError {
    /// Format-level problems are warnings; anything else is surfaced in
    /// the error colour, matching the table-load styling.
    pub fn is_warning(&self) -> bool {
        !matches!(self, PictureError::Other { .. })
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Open and decode the image at `path` into pixels egui can upload.
///
/// The format is sniffed from the file content, so a stray text file with
/// an image extension still reports [`PictureError::UnrecognizedFormat`].
pub fn load_picture(path: &Path) -> Result<ColorImage, PictureError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PictureError::NotFound(path.to_path_buf()),
        _ => PictureError::Other {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    let decoded = image::load_from_memory(&bytes).map_err(|e| match e {
        image::ImageError::Decoding(_) | image::ImageError::Unsupported(_) => {
            PictureError::UnrecognizedFormat(path.to_path_buf())
        }
        other => PictureError::Other {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })?;

    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn bare_filenames_are_joined_onto_the_asset_dir() {
        assert_eq!(resolve_path("bob.png"), Path::new("assets").join("bob.png"));
    }

    #[test]
    fn prefixed_paths_are_left_unchanged() {
        assert_eq!(resolve_path("assets/bob.png"), PathBuf::from("assets/bob.png"));
    }

    #[test]
    fn missing_file_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_picture(&dir.path().join("ghost.png")).unwrap_err();
        assert!(matches!(err, PictureError::NotFound(_)));
        assert!(err.is_warning());
    }

    #[test]
    fn non_image_content_reports_unrecognized_format() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(b"this is a note, not a picture").unwrap();

        let err = load_picture(tmp.path()).unwrap_err();
        assert!(matches!(err, PictureError::UnrecognizedFormat(_)));
        assert!(err.is_warning());
    }

    #[test]
    fn decodes_a_real_png() {
        let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([10, 20, 30, 255]));
        let mut bytes: Vec<u8> = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(&bytes).unwrap();

        let color_image = load_picture(tmp.path()).unwrap();
        assert_eq!(color_image.size, [4, 2]);
    }
}
