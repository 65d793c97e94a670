//! Configuration types deserialized from `hintpane.toml`.

use hintpane_diagnostics::{OutputFormat, ReportOptions};
use serde::Deserialize;

/// The top-level configuration parsed from `hintpane.toml`.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// How diagnostic reports are ordered and rendered.
    #[serde(default)]
    pub report: ReportConfig,
    /// Where the update check finds the latest release.
    #[serde(default)]
    pub update: UpdateConfig,
}

/// Report settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Order findings by position. `false` emits them in analyzer order.
    #[serde(default = "default_sort")]
    pub sort: bool,
    /// Output format for reports.
    #[serde(default)]
    pub format: OutputFormat,
    /// Emit nothing when a batch has no errors or warnings.
    #[serde(default)]
    pub quiet: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            format: OutputFormat::default(),
            quiet: false,
        }
    }
}

impl ReportConfig {
    /// Converts these settings into reporter options.
    pub fn to_options(&self) -> ReportOptions {
        ReportOptions {
            sort: self.sort,
            quiet: self.quiet,
            format: self.format,
        }
    }
}

fn default_sort() -> bool {
    true
}

/// Update-check settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateConfig {
    /// Path to a release manifest, relative to the directory holding this file.
    #[serde(default)]
    pub manifest: Option<String>,
}
