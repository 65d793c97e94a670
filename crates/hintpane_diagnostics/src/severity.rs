//! Diagnostic severity levels ordered from least to most severe.

use std::fmt;

/// The severity level of a linter finding.
///
/// Ordered from least severe (`Info`) to most severe (`Error`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Severity {
    /// An informational message that does not indicate a problem.
    Info,
    /// A potential issue that should be reviewed.
    Warning,
    /// A definite problem in the analyzed source.
    Error,
}

impl Severity {
    /// Parses an analyzer severity marker.
    ///
    /// Accepts the single-letter markers (`E`, `W`, `I`) and the lowercase
    /// words (`error`, `warning`, `info`). Matching ignores ASCII case.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker.to_ascii_lowercase().as_str() {
            "e" | "error" => Some(Severity::Error),
            "w" | "warning" => Some(Severity::Warning),
            "i" | "info" => Some(Severity::Info),
            _ => None,
        }
    }

    /// Derives a severity from a rule code such as `W033` or `E019`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.chars().next()? {
            'E' => Some(Severity::Error),
            'W' => Some(Severity::Warning),
            'I' => Some(Severity::Info),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}
