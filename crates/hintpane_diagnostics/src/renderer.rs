//! Rendering backends for machine-readable and human-readable reports.

use crate::diagnostic::Diagnostic;
use crate::error::ReportError;
use crate::summary::Summary;
use serde::Deserialize;

/// Trait for rendering a batch of diagnostics into a single block of text.
///
/// Implementations format diagnostics for different consumers: an editor's
/// results pane (JSON) or a person at a terminal.
pub trait DiagnosticRenderer {
    /// Renders the whole batch into one newline-terminated string.
    fn render(&self, diagnostics: &[Diagnostic]) -> Result<String, ReportError>;
}

/// Selects which renderer a report uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line of JSON: an array of diagnostic objects.
    #[default]
    Json,
    /// A human-readable listing with a summary footer.
    Text,
}

impl OutputFormat {
    /// Returns the renderer for this format.
    pub fn renderer(self) -> Box<dyn DiagnosticRenderer + Send + Sync> {
        match self {
            OutputFormat::Json => Box::new(JsonRenderer),
            OutputFormat::Text => Box::new(TerminalRenderer::default()),
        }
    }
}

/// Renders diagnostics as a single-line JSON array followed by a newline.
///
/// Produces output like:
/// ```text
/// [{"line":2,"character":0,"code":"W033","reason":"Missing semicolon."}]
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRenderer;

impl DiagnosticRenderer for JsonRenderer {
    fn render(&self, diagnostics: &[Diagnostic]) -> Result<String, ReportError> {
        let mut out = serde_json::to_string(diagnostics).map_err(ReportError::Serialize)?;
        out.push('\n');
        Ok(out)
    }
}

/// Renders diagnostics as an aligned terminal listing.
///
/// Produces output like:
/// ```text
///   2:0   warning  Missing semicolon. (W033)
///   5:12  error    Unclosed string. (E029)
///
/// 1 error(s), 1 warning(s)
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalRenderer {
    /// Omit the summary footer.
    pub no_summary: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(no_summary: bool) -> Self {
        Self { no_summary }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diagnostics: &[Diagnostic]) -> Result<String, ReportError> {
        let positions: Vec<String> = diagnostics
            .iter()
            .map(|d| format!("{}:{}", d.line, d.character))
            .collect();
        let width = positions.iter().map(String::len).max().unwrap_or(0);

        let mut out = String::new();
        for (diag, position) in diagnostics.iter().zip(&positions) {
            let severity = diag
                .severity()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            let reason = diag.reason().unwrap_or("(no message)");
            out.push_str(&format!("  {position:<width$}  {severity:<7}  {reason}"));
            if let Some(code) = diag.code() {
                out.push_str(&format!(" ({code})"));
            }
            out.push('\n');
        }

        if !self.no_summary {
            if !diagnostics.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("{}\n", Summary::from_diagnostics(diagnostics)));
        }
        Ok(out)
    }
}
