//! Three-component release versions with strict parsing and display.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A release version of the form `major.minor.patch`.
///
/// Fields are declared most significant first, so the derived `Ord` compares
/// versions lexicographically: major, then minor, then patch. Pre-release and
/// build-metadata suffixes are not supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
    /// The major component.
    pub major: u64,
    /// The minor component.
    pub minor: u64,
    /// The patch component.
    pub patch: u64,
}

impl Version {
    /// Creates a version from its three components.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Error type for parsing version strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVersionError {
    /// The string did not split into exactly three dot-separated components.
    #[error("invalid version '{input}': expected 3 components, found {found}")]
    ComponentCount {
        /// The input string that failed to parse.
        input: String,
        /// How many components it split into.
        found: usize,
    },

    /// A component was empty, contained a non-digit, or overflowed.
    #[error("invalid version '{input}': component '{component}' is not a non-negative integer")]
    InvalidComponent {
        /// The input string that failed to parse.
        input: String,
        /// The offending component.
        component: String,
    },
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(ParseVersionError::ComponentCount {
                input: s.to_string(),
                found: parts.len(),
            });
        }

        let mut components = [0u64; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = parse_component(part).ok_or_else(|| ParseVersionError::InvalidComponent {
                input: s.to_string(),
                component: (*part).to_string(),
            })?;
        }

        let [major, minor, patch] = components;
        Ok(Version::new(major, minor, patch))
    }
}

/// Parses one component, accepting ASCII digits only (no sign, no whitespace).
fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
