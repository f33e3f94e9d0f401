//! Process list parsing
//!
//! Accepts the supervisor's JSON either as a bare array or wrapped in an
//! envelope object under `processes` or `data`.

use crate::error::{Result, SupervisorError};
use crate::record::{ProcessRecord, RawProcess};
use serde_json::Value;

const ENVELOPE_KEYS: [&str; 2] = ["processes", "data"];

/// Parse the supervisor's list output into resolved records, in list order.
pub fn parse_process_list(output: &str) -> Result<Vec<ProcessRecord>> {
    let document: Value = serde_json::from_str(output)?;
    let entries = into_entries(document)?;

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| ProcessRecord::resolve(index, &into_raw(index, entry)))
        .collect())
}

fn into_entries(document: Value) -> Result<Vec<Value>> {
    match document {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut envelope) => {
            for key in ENVELOPE_KEYS {
                if let Some(Value::Array(entries)) = envelope.remove(key) {
                    return Ok(entries);
                }
            }
            Err(SupervisorError::UnexpectedShape(
                "object without a 'processes' or 'data' array".to_string(),
            ))
        }
        other => Err(SupervisorError::UnexpectedShape(format!(
            "expected an array or object, got {}",
            kind_of(&other)
        ))),
    }
}

fn into_raw(index: usize, entry: Value) -> RawProcess {
    if !entry.is_object() {
        tracing::warn!("Process list entry {} is not an object: {}", index, entry);
        return RawProcess::default();
    }
    serde_json::from_value(entry).unwrap_or_default()
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
