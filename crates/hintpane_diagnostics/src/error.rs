//! Error types for extracting, ordering, and emitting diagnostic reports.

/// Errors that can occur while building or writing a diagnostic report.
///
/// Structural problems in the analyzer's output reject the whole batch rather
/// than being defaulted, so upstream bugs are never masked in the report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The analyzer output could not be parsed as JSON.
    #[error("failed to parse analysis results: {0}")]
    Parse(#[source] serde_json::Error),

    /// The analyzer output was valid JSON but not an array of results.
    #[error("analysis results must be a JSON array")]
    NotAnArray,

    /// A result element is missing a required field.
    #[error("result {index}: missing required field `{field}`")]
    MissingField {
        /// Position of the offending element in the input sequence.
        index: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A result element carries a field of the wrong shape.
    #[error("result {index}: invalid field `{field}`: {reason}")]
    InvalidField {
        /// Position of the offending element in the input sequence.
        index: usize,
        /// Name of the invalid field.
        field: &'static str,
        /// What was wrong with the value.
        reason: String,
    },

    /// The collected diagnostics could not be serialized.
    #[error("failed to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Writing the report to the output sink failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
