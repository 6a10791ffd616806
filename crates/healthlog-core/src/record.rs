//! Health record wire model.
//!
//! A `HealthRecord` is whatever JSON object the form posts, kept as-is so every
//! field (known or not, string or not) is echoed back unchanged. A
//! `StoredLogEntry` is the record plus the generated `id` and `timestamp`,
//! serialized in that order ahead of the record fields.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{HealthLogError, Result};

/// Message returned to callers when `Date` or `Time` is missing.
pub const REQUIRED_FIELDS_MSG: &str = "Date and Time are required fields";

/// Keys owned by the service; caller-supplied values are dropped.
const GENERATED_KEYS: [&str; 2] = ["id", "timestamp"];

/// Field names the health form submits.
pub const KNOWN_FIELDS: [&str; 12] = [
    "Date",
    "Time",
    "Food_Item",
    "Quantity",
    "Calories",
    "Meal_Time",
    "BP_Systolic",
    "BP_Diastolic",
    "Sugar_Level",
    "Weight",
    "Waist_Circumference",
    "Notes",
];

/// Caller-supplied health metrics: the submitted JSON object, kept verbatim.
///
/// Values are not typed. The form sends strings, but numbers, `null` and
/// anything else are stored and echoed back exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthRecord {
    fields: Map<String, Value>,
}

impl HealthRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String value of a field, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn date(&self) -> Option<&str> {
        self.get_str("Date")
    }

    pub fn time(&self) -> Option<&str> {
        self.get_str("Time")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Fields outside `KNOWN_FIELDS`, in arrival order.
    pub fn extra(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields
            .iter()
            .filter(|(k, _)| !KNOWN_FIELDS.contains(&k.as_str()))
    }

    /// `Date` and `Time` must be truthy: absent, `null`, `""`, `false` and `0`
    /// are rejected. Nothing else is checked.
    pub fn validate(&self) -> Result<()> {
        if !is_truthy(self.get("Date")) || !is_truthy(self.get("Time")) {
            return Err(HealthLogError::Validation(REQUIRED_FIELDS_MSG.into()));
        }
        Ok(())
    }
}

impl From<Map<String, Value>> for HealthRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

fn is_truthy(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Decode a request body into a record.
///
/// Any JSON object is accepted. Invalid JSON or a non-object top-level value
/// is a processing fault, not a validation failure.
pub fn decode_record(raw: &[u8]) -> Result<HealthRecord> {
    let value: Value = serde_json::from_slice(raw).map_err(|e| {
        tracing::debug!(error = %e, len = raw.len(), "health record decode failed");
        HealthLogError::Processing(format!("invalid record payload: {e}"))
    })?;
    match value {
        Value::Object(fields) => Ok(HealthRecord::from(fields)),
        other => {
            tracing::debug!(kind = json_kind(&other), "health record is not an object");
            Err(HealthLogError::Processing(format!(
                "record payload must be a JSON object, got {}",
                json_kind(&other)
            )))
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A record as stored and echoed back by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLogEntry {
    /// Millisecond-epoch string, unique for the process lifetime.
    pub id: String,
    /// ISO-8601 UTC, millisecond precision.
    pub timestamp: String,
    #[serde(flatten)]
    pub record: HealthRecord,
}

impl StoredLogEntry {
    /// Attach generated fields to a record.
    pub fn new(mut record: HealthRecord, id: u64, at: DateTime<Utc>) -> Self {
        record
            .fields
            .retain(|k, _| !GENERATED_KEYS.contains(&k.as_str()));
        Self {
            id: id.to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            record,
        }
    }
}
