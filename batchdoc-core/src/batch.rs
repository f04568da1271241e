//! Batch records
//!
//!     A batch run produces one result per request. Each result carries a status, the original
//!     prompt and either a Markdown response or an error payload. Results come in as loosely
//!     typed JSON ([`RawRecord`]) and are classified once into [`BatchRecord`], so the
//!     assembler never looks at raw fields again.
//!
//!     Accepted input shapes (see [`parse_batch`]):
//!         - a JSON array of records
//!         - an object with a `results` array
//!         - JSON Lines, one record per non-blank line

use crate::error::{ExportError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status value that marks a successful request unless configured otherwise
pub const DEFAULT_SUCCESS_STATUS: &str = "succeeded";

/// One result as found in a batch results file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub status: Option<String>,
    pub prompt_text: Option<String>,
    pub clean_response: Option<String>,
    pub response: Option<String>,
    pub custom_id: Option<String>,
    pub error: Option<Value>,
}

/// Error payload of a failed request
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPayload {
    /// JSON object or array, pretty-printed on output
    Structured(Value),
    /// Anything else, already in its printable form
    Text(String),
}

/// A classified batch result
#[derive(Debug, Clone, PartialEq)]
pub enum BatchRecord {
    Succeeded { prompt: String, response: String },
    Failed { label: String, error: ErrorPayload },
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

impl RawRecord {
    /// Classify against `success_status`: an exact match is a success, anything else
    /// (including a missing status) is a failure.
    pub fn into_record(self, success_status: &str) -> BatchRecord {
        if self.status.as_deref() == Some(success_status) {
            BatchRecord::Succeeded {
                prompt: self.prompt_text.unwrap_or_default(),
                response: non_empty(self.clean_response)
                    .or_else(|| non_empty(self.response))
                    .unwrap_or_default(),
            }
        } else {
            BatchRecord::Failed {
                label: non_empty(self.prompt_text)
                    .or_else(|| non_empty(self.custom_id))
                    .unwrap_or_default(),
                error: ErrorPayload::from_value(self.error),
            }
        }
    }
}

impl ErrorPayload {
    pub fn from_value(value: Option<Value>) -> Self {
        match value {
            Some(value @ (Value::Object(_) | Value::Array(_))) => ErrorPayload::Structured(value),
            Some(Value::String(text)) => ErrorPayload::Text(text),
            Some(Value::Null) | None => ErrorPayload::Text(String::new()),
            Some(other) => ErrorPayload::Text(other.to_string()),
        }
    }

    /// Printable form: structured payloads as 2-space indented JSON, text as is.
    pub fn render(&self) -> Result<String> {
        match self {
            ErrorPayload::Structured(value) => {
                serde_json::to_string_pretty(value).map_err(ExportError::Payload)
            }
            ErrorPayload::Text(text) => Ok(text.clone()),
        }
    }
}

impl From<&str> for ErrorPayload {
    fn from(text: &str) -> Self {
        ErrorPayload::Text(text.to_string())
    }
}

impl BatchRecord {
    pub fn succeeded(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        BatchRecord::Succeeded {
            prompt: prompt.into(),
            response: response.into(),
        }
    }

    pub fn failed(label: impl Into<String>, error: ErrorPayload) -> Self {
        BatchRecord::Failed {
            label: label.into(),
            error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BatchRecord::Succeeded { .. })
    }
}

/// Split records into (succeeded, failed), keeping the input order within each side.
pub fn partition(records: &[BatchRecord]) -> (Vec<&BatchRecord>, Vec<&BatchRecord>) {
    records.iter().partition(|record| record.is_success())
}

/// Decode a batch results file into raw records.
pub fn parse_batch(source: &str) -> Result<Vec<RawRecord>> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let trimmed = source.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed)
            .map_err(|e| ExportError::Input(format!("invalid JSON array: {e}")));
    }

    // A document that parses as one object is either a `results` envelope or a single record.
    if let Ok(Value::Object(mut object)) = serde_json::from_str::<Value>(trimmed) {
        if let Some(results) = object.remove("results") {
            return serde_json::from_value(results)
                .map_err(|e| ExportError::Input(format!("invalid `results` array: {e}")));
        }
        let record = serde_json::from_value(Value::Object(object))
            .map_err(|e| ExportError::Input(format!("invalid record: {e}")))?;
        return Ok(vec![record]);
    }

    let mut records = Vec::new();
    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line)
            .map_err(|e| ExportError::Input(format!("line {}: {e}", index + 1)))?;
        records.push(record);
    }
    Ok(records)
}

/// Decode and classify a batch results file.
pub fn load_batch(source: &str, success_status: &str) -> Result<Vec<BatchRecord>> {
    let records: Vec<BatchRecord> = parse_batch(source)?
        .into_iter()
        .map(|raw| raw.into_record(success_status))
        .collect();
    debug!(
        "loaded {} batch records ({} succeeded)",
        records.len(),
        records.iter().filter(|record| record.is_success()).count()
    );
    Ok(records)
}
