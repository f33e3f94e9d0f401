//! Process records reported by the supervisor
//!
//! The supervisor's JSON is loosely shaped: any field may be missing or carry
//! an unexpected type. [`RawProcess`] mirrors that shape with every field
//! optional, and [`ProcessRecord::resolve`] collapses it through one ordered
//! fallback chain per field.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown when a directory or script cannot be resolved
pub const NOT_SPECIFIED: &str = "(not specified)";

/// Shown when a name or status cannot be resolved
pub const UNKNOWN: &str = "?";

/// Identifier passed back to the supervisor's stop command
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Number(n) => write!(f, "{}", n),
            ProcessId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProcessId {
    fn from(value: i64) -> Self {
        ProcessId::Number(value)
    }
}

impl From<&str> for ProcessId {
    fn from(value: &str) -> Self {
        ProcessId::Text(value.to_string())
    }
}

/// One entry of the supervisor's process list, as received
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProcess {
    #[serde(default, deserialize_with = "lenient")]
    pub pm_id: Option<ProcessId>,

    #[serde(default, deserialize_with = "lenient")]
    pub pid: Option<ProcessId>,

    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub pm2_env: Option<RawEnv>,
}

/// Environment block nested in a [`RawProcess`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEnv {
    #[serde(default, deserialize_with = "lenient")]
    pub pm_id: Option<ProcessId>,

    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub pm_cwd: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub cwd: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub args: Option<Vec<serde_json::Value>>,
}

/// A field of the wrong type reads as missing instead of failing the list.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// pm_id → pm2_env.pm_id → pid → position in the list
pub fn resolve_id(raw: &RawProcess, index: usize) -> ProcessId {
    raw.pm_id
        .clone()
        .or_else(|| raw.pm2_env.as_ref().and_then(|env| env.pm_id.clone()))
        .or_else(|| raw.pid.clone())
        .unwrap_or(ProcessId::Number(index as i64))
}

/// pm2_env.name → name → `?`
pub fn resolve_name(raw: &RawProcess) -> String {
    raw.pm2_env
        .as_ref()
        .and_then(|env| non_empty(env.name.as_ref()))
        .or_else(|| non_empty(raw.name.as_ref()))
        .unwrap_or(UNKNOWN)
        .to_string()
}

/// pm2_env.status → status → `?`
pub fn resolve_status(raw: &RawProcess) -> String {
    raw.pm2_env
        .as_ref()
        .and_then(|env| non_empty(env.status.as_ref()))
        .or_else(|| non_empty(raw.status.as_ref()))
        .unwrap_or(UNKNOWN)
        .to_string()
}

/// pm2_env.pm_cwd → pm2_env.cwd
pub fn resolve_working_directory(raw: &RawProcess) -> Option<String> {
    let env = raw.pm2_env.as_ref()?;
    non_empty(env.pm_cwd.as_ref())
        .or_else(|| non_empty(env.cwd.as_ref()))
        .map(str::to_string)
}

/// First launch argument, when it is a non-empty string
pub fn resolve_script(raw: &RawProcess) -> Option<String> {
    raw.pm2_env
        .as_ref()?
        .args
        .as_ref()?
        .first()?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Resolved view of one managed process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub id: ProcessId,
    pub name: String,
    pub status: String,
    pub working_directory: Option<String>,
    pub script: Option<String>,
}

impl ProcessRecord {
    pub fn resolve(index: usize, raw: &RawProcess) -> Self {
        Self {
            id: resolve_id(raw, index),
            name: resolve_name(raw),
            status: resolve_status(raw),
            working_directory: resolve_working_directory(raw),
            script: resolve_script(raw),
        }
    }

    /// Working directory for display
    pub fn directory_label(&self) -> &str {
        self.working_directory.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    /// Working directory for matching; empty when unknown
    pub fn directory_or_empty(&self) -> &str {
        self.working_directory.as_deref().unwrap_or("")
    }

    pub fn script_label(&self) -> &str {
        self.script.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    /// Script, falling back to the process name
    pub fn script_or_name(&self) -> &str {
        self.script.as_deref().unwrap_or(&self.name)
    }
}
