// src/core/models.rs

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

// --- Scan Response ---

/// The part of the scan endpoint's answer this application understands.
///
/// Any other field in the JSON body is ignored. Both fields are optional on
/// the wire; an empty string is treated the same as a missing value when
/// rendering.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ScanResult {
    #[serde(default)]
    pub medicine_name: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl ScanResult {
    pub const NAME_FALLBACK: &'static str = "N/A";
    pub const DETAILS_FALLBACK: &'static str = "No details available";

    /// Name to display, falling back to "N/A".
    pub fn display_name(&self) -> &str {
        non_empty(&self.medicine_name).unwrap_or(Self::NAME_FALLBACK)
    }

    /// Details to display, falling back to "No details available".
    pub fn display_details(&self) -> &str {
        non_empty(&self.details).unwrap_or(Self::DETAILS_FALLBACK)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// --- Image Files ---

/// Extensions accepted by the file picker, with the MIME type sent for each.
const ACCEPTED_IMAGES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("heic", "image/heic"),
];

#[derive(Debug, Error)]
pub enum FileError {
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{name} is not an image. Accepted types: jpg, jpeg, png, gif, webp, bmp, tif, tiff, heic.")]
    NotAnImage { name: String },
    #[error("{name} is empty.")]
    Empty { name: String },
    #[error("{name} is too large ({size} bytes, limit {limit} bytes).")]
    TooLarge { name: String, size: u64, limit: u64 },
}

/// An image picked by the user, read fully into memory for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub path: PathBuf,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Reads the image at `path`, rejecting non-image extensions and files
    /// that are empty or larger than `max_bytes`.
    pub fn load(path: impl AsRef<Path>, max_bytes: u64) -> Result<Self, FileError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mime = mime_for(path).ok_or_else(|| FileError::NotAnImage { name: name.clone() })?;

        let size = std::fs::metadata(path)
            .map_err(|source| FileError::Read { path: path.to_path_buf(), source })?
            .len();
        if size == 0 {
            return Err(FileError::Empty { name });
        }
        if size > max_bytes {
            warn!(file = %name, size, limit = max_bytes, "Rejected oversized image.");
            return Err(FileError::TooLarge { name, size, limit: max_bytes });
        }

        let bytes = std::fs::read(path)
            .map_err(|source| FileError::Read { path: path.to_path_buf(), source })?;
        debug!(file = %name, mime, size = bytes.len(), "Loaded image.");

        Ok(Self { name, path: path.to_path_buf(), mime, bytes })
    }
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    ACCEPTED_IMAGES
        .iter()
        .find(|(accepted, _)| *accepted == ext)
        .map(|(_, mime)| *mime)
}
