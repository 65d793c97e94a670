//! Diagnostic collection, ordering, and rendering for linter output.
//!
//! This crate takes the raw [`AnalysisResult`] records produced by a linter,
//! extracts each [`Diagnostic`], orders them by source position, and renders
//! the batch for a results pane. The [`Reporter`] ties the steps together;
//! [`DiagnosticRenderer`] implementations produce canonical JSON or a
//! human-readable terminal listing.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod renderer;
pub mod reporter;
pub mod severity;
pub mod summary;

pub use diagnostic::{AnalysisResult, Diagnostic};
pub use error::ReportError;
pub use renderer::{DiagnosticRenderer, JsonRenderer, OutputFormat, TerminalRenderer};
pub use reporter::{compare_position, parse_results, sort_diagnostics, ReportOptions, Reporter};
pub use severity::Severity;
pub use summary::Summary;
