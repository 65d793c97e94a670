//! Per-severity counts over a batch of diagnostics.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use std::fmt;

/// Counts of findings in a report, broken down by severity.
///
/// Diagnostics without a recognizable severity count toward `total` only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of error-severity findings.
    pub errors: usize,
    /// Number of warning-severity findings.
    pub warnings: usize,
    /// Number of info-severity findings.
    pub infos: usize,
    /// Total number of findings, including those with no severity.
    pub total: usize,
}

impl Summary {
    /// Tallies the diagnostics in `diagnostics`.
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let mut summary = Summary {
            total: diagnostics.len(),
            ..Summary::default()
        };
        for diag in diagnostics {
            match diag.severity() {
                Some(Severity::Error) => summary.errors += 1,
                Some(Severity::Warning) => summary.warnings += 1,
                Some(Severity::Info) => summary.infos += 1,
                None => {}
            }
        }
        summary
    }

    /// Returns `true` if any error-severity findings were counted.
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Returns `true` if there is at least one error or warning.
    pub fn has_problems(&self) -> bool {
        self.errors > 0 || self.warnings > 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error(s), {} warning(s)",
            self.errors, self.warnings
        )
    }
}
