//! Extraction, ordering, and emission of a linter's findings.

use crate::diagnostic::{AnalysisResult, Diagnostic};
use crate::error::ReportError;
use crate::renderer::{DiagnosticRenderer, OutputFormat};
use crate::summary::Summary;
use serde_json::Value;
use std::cmp::Ordering;
use std::io::Write;

/// Options controlling how a [`Reporter`] orders and emits a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// Order findings by `(line, character)`. When `false`, findings are
    /// emitted in the order the analyzer produced them.
    pub sort: bool,
    /// Skip output entirely when the batch has no errors or warnings.
    pub quiet: bool,
    /// The renderer used for output.
    pub format: OutputFormat,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            sort: true,
            quiet: false,
            format: OutputFormat::Json,
        }
    }
}

/// Orders two diagnostics by line, then by character, both ascending.
pub fn compare_position(a: &Diagnostic, b: &Diagnostic) -> Ordering {
    a.line
        .cmp(&b.line)
        .then_with(|| a.character.cmp(&b.character))
}

/// Sorts diagnostics by source position.
///
/// The sort is stable: findings at the same position keep their input order.
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by(compare_position);
}

/// Parses raw analyzer output, a JSON array of result records.
///
/// Every element is validated; the first malformed element rejects the batch.
pub fn parse_results(input: &str) -> Result<Vec<AnalysisResult>, ReportError> {
    let value: Value = serde_json::from_str(input).map_err(ReportError::Parse)?;
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| AnalysisResult::from_value(index, item))
            .collect(),
        _ => Err(ReportError::NotAnArray),
    }
}

/// Turns a batch of analysis results into a single rendered report.
///
/// A reporter holds no state between calls; one instance can serve any
/// number of batches, from any number of threads.
pub struct Reporter {
    options: ReportOptions,
    renderer: Box<dyn DiagnosticRenderer + Send + Sync>,
}

impl Reporter {
    /// Creates a reporter using the renderer selected by `options.format`.
    pub fn new(options: ReportOptions) -> Self {
        Self {
            renderer: options.format.renderer(),
            options,
        }
    }

    /// Replaces the renderer chosen by the options.
    pub fn with_renderer(mut self, renderer: Box<dyn DiagnosticRenderer + Send + Sync>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Extracts the finding from every result and orders them if sorting is on.
    ///
    /// Exactly one diagnostic is produced per input result.
    pub fn collect<I>(&self, results: I) -> Vec<Diagnostic>
    where
        I: IntoIterator<Item = AnalysisResult>,
    {
        let mut diagnostics: Vec<Diagnostic> = results
            .into_iter()
            .map(AnalysisResult::into_diagnostic)
            .collect();
        if self.options.sort {
            sort_diagnostics(&mut diagnostics);
        }
        tracing::debug!(
            count = diagnostics.len(),
            sorted = self.options.sort,
            "collected diagnostics"
        );
        diagnostics
    }

    /// Collects and renders a batch without writing it anywhere.
    pub fn render<I>(&self, results: I) -> Result<String, ReportError>
    where
        I: IntoIterator<Item = AnalysisResult>,
    {
        let diagnostics = self.collect(results);
        self.renderer.render(&diagnostics)
    }

    /// Collects, renders, and writes a batch to `out` in one write.
    ///
    /// The rendered text is fully buffered before anything is written. Write
    /// and flush failures are returned to the caller. In quiet mode a batch
    /// with no errors or warnings produces no output at all.
    pub fn report<I, W>(&self, results: I, mut out: W) -> Result<Summary, ReportError>
    where
        I: IntoIterator<Item = AnalysisResult>,
        W: Write,
    {
        let diagnostics = self.collect(results);
        let summary = Summary::from_diagnostics(&diagnostics);

        if self.options.quiet && !summary.has_problems() {
            tracing::debug!(total = summary.total, "quiet mode, nothing to report");
            return Ok(summary);
        }

        let text = self.renderer.render(&diagnostics)?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        tracing::trace!(bytes = text.len(), "report written");
        Ok(summary)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ReportOptions::default())
    }
}
