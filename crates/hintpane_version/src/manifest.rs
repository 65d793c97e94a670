//! The remote release manifest naming the latest published version.

use crate::status::UpdateStatus;
use serde::Deserialize;

/// Errors that can occur when reading a release manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest is not valid JSON or lacks a version field.
    #[error("failed to parse release manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// An I/O error occurred while reading a manifest file.
    #[error("failed to read release manifest: {0}")]
    Io(#[from] std::io::Error),
}

/// A small JSON document describing the latest release.
///
/// The latest version may be named `version`, `latest`, or `max_version`
/// (the crates.io field). Other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseManifest {
    /// The latest published version, as the raw string from the manifest.
    #[serde(alias = "latest", alias = "max_version")]
    pub version: String,
}

impl ReleaseManifest {
    /// Parses a manifest from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a manifest file.
    pub fn from_path(path: &std::path::Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Resolves the update status of `current` against this manifest.
    pub fn status_for(&self, current: &str) -> UpdateStatus {
        UpdateStatus::resolve(current, &self.version)
    }
}
