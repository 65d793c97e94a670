//! Linter findings and the analyzer records that wrap them.

use crate::error::ReportError;
use crate::severity::Severity;
use serde::Serialize;
use serde_json::{Map, Value};

/// Keys that hold the source position and never live in the payload.
const POSITION_FIELDS: [&str; 2] = ["line", "character"];

/// A single finding from an analysis pass.
///
/// Only the source position is interpreted. Every other field the analyzer
/// attached (message text, rule code, severity, evidence, ...) is kept in
/// the payload, in the order it arrived, and serialized back out next to
/// `line` and `character` untouched.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostic {
    /// The 1-based source line of the finding.
    pub line: u64,
    /// The column offset of the finding within its line.
    pub character: u64,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl Diagnostic {
    /// Creates a diagnostic at the given position with an empty payload.
    pub fn new(line: u64, character: u64) -> Self {
        Self {
            line,
            character,
            payload: Map::new(),
        }
    }

    /// Adds a pass-through field to this diagnostic.
    ///
    /// `line` and `character` are the position itself, so a field with either
    /// name is dropped rather than emitted a second time.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if POSITION_FIELDS.contains(&key.as_str()) {
            tracing::debug!(field = %key, "ignoring position field in payload");
            return self;
        }
        self.payload.insert(key, value.into());
        self
    }

    /// The pass-through fields supplied by the analyzer, in input order.
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Builds a diagnostic from a raw JSON object, validating its position.
    ///
    /// `index` is the element's position in the input batch and is carried into
    /// any error so the caller can point at the offending record. A missing or
    /// `null` position field is a [`ReportError::MissingField`]; a present but
    /// non-integer or negative one is a [`ReportError::InvalidField`].
    pub fn from_value(index: usize, value: Value) -> Result<Self, ReportError> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(ReportError::InvalidField {
                    index,
                    field: "error",
                    reason: format!("expected an object, found {}", kind_of(&other)),
                })
            }
        };
        let line = take_position(index, &mut fields, "line")?;
        let character = take_position(index, &mut fields, "character")?;
        Ok(Self {
            line,
            character,
            payload: fields,
        })
    }

    /// Returns the human-readable message, if the analyzer supplied one.
    pub fn reason(&self) -> Option<&str> {
        self.payload.get("reason").and_then(Value::as_str)
    }

    /// Returns the rule code (e.g. `W033`), if the analyzer supplied one.
    pub fn code(&self) -> Option<&str> {
        self.payload.get("code").and_then(Value::as_str)
    }

    /// Returns the severity of this finding.
    ///
    /// An explicit `severity` field takes precedence; otherwise the severity is
    /// derived from the first letter of the rule code.
    pub fn severity(&self) -> Option<Severity> {
        self.payload
            .get("severity")
            .and_then(Value::as_str)
            .and_then(Severity::from_marker)
            .or_else(|| self.code().and_then(Severity::from_code))
    }
}

/// One record of analyzer output, wrapping the finding it reports.
///
/// Built only through [`AnalysisResult::from_value`], which validates the
/// wrapped finding.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    /// The file the analyzer was checking, when known.
    pub file: Option<String>,
    /// The finding itself.
    pub error: Diagnostic,
}

impl AnalysisResult {
    /// Wraps a diagnostic with no associated file.
    pub fn new(error: Diagnostic) -> Self {
        Self { file: None, error }
    }

    /// Builds a result from a raw JSON record, validating the wrapped finding.
    pub fn from_value(index: usize, value: Value) -> Result<Self, ReportError> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(ReportError::InvalidField {
                    index,
                    field: "result",
                    reason: format!("expected an object, found {}", kind_of(&other)),
                })
            }
        };
        let file = match fields.remove("file") {
            None | Some(Value::Null) => None,
            Some(Value::String(file)) => Some(file),
            Some(other) => {
                return Err(ReportError::InvalidField {
                    index,
                    field: "file",
                    reason: format!("expected a string, found {}", kind_of(&other)),
                })
            }
        };
        let error = match fields.remove("error") {
            None | Some(Value::Null) => {
                return Err(ReportError::MissingField {
                    index,
                    field: "error",
                })
            }
            Some(raw) => Diagnostic::from_value(index, raw)?,
        };
        Ok(Self { file, error })
    }

    /// Unwraps the finding, discarding the record envelope.
    pub fn into_diagnostic(self) -> Diagnostic {
        self.error
    }
}

/// Removes a position field from `fields` and checks it is a non-negative integer.
///
/// The remaining fields keep their relative order.
fn take_position(
    index: usize,
    fields: &mut Map<String, Value>,
    field: &'static str,
) -> Result<u64, ReportError> {
    match fields.shift_remove(field) {
        None | Some(Value::Null) => Err(ReportError::MissingField { index, field }),
        Some(value) => value.as_u64().ok_or_else(|| ReportError::InvalidField {
            index,
            field,
            reason: format!("expected a non-negative integer, found {value}"),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_fields() {
        let diag = Diagnostic::new(3, 7)
            .with_field("reason", "Missing semicolon.")
            .with_field("code", "W033");
        assert_eq!(diag.line, 3);
        assert_eq!(diag.character, 7);
        assert_eq!(diag.reason(), Some("Missing semicolon."));
        assert_eq!(diag.code(), Some("W033"));
        assert_eq!(diag.severity(), Some(Severity::Warning));
    }

    #[test]
    fn explicit_severity_wins_over_code() {
        let diag = Diagnostic::new(1, 1)
            .with_field("code", "W033")
            .with_field("severity", "E");
        assert_eq!(diag.severity(), Some(Severity::Error));
    }

    #[test]
    fn no_severity_without_markers() {
        let diag = Diagnostic::new(1, 1).with_field("reason", "odd");
        assert_eq!(diag.severity(), None);
    }

    #[test]
    fn from_value_keeps_payload() {
        let raw = json!({
            "line": 5,
            "character": 3,
            "reason": "Unused variable.",
            "code": "W098",
            "evidence": "var x;"
        });
        let diag = Diagnostic::from_value(0, raw).unwrap();
        assert_eq!(diag.line, 5);
        assert_eq!(diag.character, 3);
        assert_eq!(diag.payload().len(), 3);
        assert!(!diag.payload().contains_key("line"));
        assert_eq!(diag.payload()["evidence"], json!("var x;"));
    }

    #[test]
    fn from_value_missing_line() {
        let err = Diagnostic::from_value(4, json!({"character": 1})).unwrap_err();
        assert!(matches!(
            err,
            ReportError::MissingField {
                index: 4,
                field: "line"
            }
        ));
    }

    #[test]
    fn from_value_null_character_is_missing() {
        let err = Diagnostic::from_value(0, json!({"line": 1, "character": null})).unwrap_err();
        assert!(matches!(
            err,
            ReportError::MissingField {
                field: "character",
                ..
            }
        ));
    }

    #[test]
    fn from_value_negative_position() {
        let err = Diagnostic::from_value(2, json!({"line": -1, "character": 0})).unwrap_err();
        assert!(matches!(
            err,
            ReportError::InvalidField {
                index: 2,
                field: "line",
                ..
            }
        ));
    }

    #[test]
    fn from_value_string_position() {
        let err = Diagnostic::from_value(0, json!({"line": 1, "character": "4"})).unwrap_err();
        assert!(matches!(
            err,
            ReportError::InvalidField {
                field: "character",
                ..
            }
        ));
    }

    #[test]
    fn from_value_not_object() {
        let err = Diagnostic::from_value(1, json!([1, 2])).unwrap_err();
        assert_eq!(
            format!("{err}"),
            "result 1: invalid field `error`: expected an object, found an array"
        );
    }

    #[test]
    fn result_from_value() {
        let raw = json!({
            "file": "app.js",
            "error": {"line": 2, "character": 0, "reason": "x"},
            "extra": true
        });
        let result = AnalysisResult::from_value(0, raw).unwrap();
        assert_eq!(result.file.as_deref(), Some("app.js"));
        assert_eq!(result.error.line, 2);
        assert_eq!(result.into_diagnostic().reason(), Some("x"));
    }

    #[test]
    fn result_missing_error() {
        let err = AnalysisResult::from_value(7, json!({"file": "a.js"})).unwrap_err();
        assert!(matches!(
            err,
            ReportError::MissingField {
                index: 7,
                field: "error"
            }
        ));
    }

    #[test]
    fn result_bad_file() {
        let raw = json!({"file": 3, "error": {"line": 1, "character": 1}});
        let err = AnalysisResult::from_value(0, raw).unwrap_err();
        assert!(matches!(err, ReportError::InvalidField { field: "file", .. }));
    }

    #[test]
    fn serialize_flattens_payload() {
        let diag = Diagnostic::new(2, 0).with_field("reason", "r");
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json, json!({"line": 2, "character": 0, "reason": "r"}));
    }

    #[test]
    fn position_keys_never_enter_payload() {
        let diag = Diagnostic::new(1, 2)
            .with_field("line", 99)
            .with_field("character", 42)
            .with_field("reason", "r");
        assert_eq!(diag.payload().len(), 1);

        let text = serde_json::to_string(&diag).unwrap();
        assert_eq!(text.matches("\"line\"").count(), 1);
        assert_eq!(text.matches("\"character\"").count(), 1);
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back["line"], 1);
        assert_eq!(back["character"], 2);
    }

    #[test]
    fn payload_keeps_analyzer_key_order() {
        let raw = json!({
            "reason": "Missing semicolon.",
            "line": 4,
            "code": "W033",
            "character": 9,
            "a": 1
        });
        let diag = Diagnostic::from_value(0, raw).unwrap();
        let keys: Vec<&str> = diag.payload().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["reason", "code", "a"]);
        assert_eq!(
            serde_json::to_string(&diag).unwrap(),
            r#"{"line":4,"character":9,"reason":"Missing semicolon.","code":"W033","a":1}"#
        );
    }
}
