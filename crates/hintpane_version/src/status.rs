//! The tri-state signal shown for a "check for updates" action.

use crate::compare::target_postdates;
use crate::version::Version;
use serde::Serialize;
use std::fmt;

/// The state an update check is in, as displayed to the user.
///
/// Exactly one state is shown at a time. `Checking` covers the window between
/// the user's request and the arrival of the latest release version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum UpdateStatus {
    /// The latest release version has not arrived yet.
    Checking,
    /// A strictly newer release exists.
    UpdateAvailable {
        /// The running version.
        current: Version,
        /// The newer release.
        latest: Version,
    },
    /// No newer release is known. Also reported for malformed version data.
    UpToDate {
        /// The running version, when it could be parsed.
        current: Option<Version>,
    },
}

impl UpdateStatus {
    /// Resolves the status once the latest release version is known.
    ///
    /// Like [`is_newer`](crate::is_newer), this fails closed: if either string
    /// is not a valid version the result is [`UpdateStatus::UpToDate`].
    pub fn resolve(current: &str, latest: &str) -> Self {
        let current = current.parse::<Version>();
        let latest = latest.parse::<Version>();
        match (current, latest) {
            (Ok(current), Ok(latest)) if target_postdates(&current, &latest) => {
                UpdateStatus::UpdateAvailable { current, latest }
            }
            (Ok(current), Ok(_)) => UpdateStatus::UpToDate {
                current: Some(current),
            },
            (current, latest) => {
                if let Err(e) = &current {
                    tracing::debug!(error = %e, "current version rejected");
                }
                if let Err(e) = &latest {
                    tracing::debug!(error = %e, "latest version rejected");
                }
                UpdateStatus::UpToDate {
                    current: current.ok(),
                }
            }
        }
    }

    /// Returns `true` if a newer release is available.
    pub fn is_update_available(&self) -> bool {
        matches!(self, UpdateStatus::UpdateAvailable { .. })
    }
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStatus::Checking => write!(f, "checking for updates..."),
            UpdateStatus::UpdateAvailable { current, latest } => {
                write!(f, "update available: {current} -> {latest}")
            }
            UpdateStatus::UpToDate {
                current: Some(current),
            } => write!(f, "up to date ({current})"),
            UpdateStatus::UpToDate { current: None } => write!(f, "up to date"),
        }
    }
}
