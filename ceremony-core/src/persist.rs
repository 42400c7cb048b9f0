//! Plan persistence for save/load functionality.
//!
//! The engine does no I/O; it turns a [`CeremonyPlan`] into a JSON snapshot
//! and back. Loading is forgiving: saved plans may come from older clients,
//! so missing or malformed fields fall back to defaults instead of failing
//! the whole load, and the decoded plan is normalized before it is handed
//! back.

use crate::plan::{dedup_labels, CeremonyPlan, DayEvent, DayType, EventLocation, WeddingDay};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid save format")]
    InvalidFormat,

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Current save format version.
pub const SAVE_VERSION: u32 = 1;

fn current_version() -> u32 {
    SAVE_VERSION
}

/// A saved plan with everything needed to resume editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCeremony {
    /// Save format version. Snapshots without a numeric one are read as
    /// current.
    #[serde(default = "current_version", deserialize_with = "lenient_version")]
    pub version: u32,

    /// When the snapshot was taken (RFC 3339).
    #[serde(default, deserialize_with = "lenient_text")]
    pub saved_at: String,

    /// Selected labels and the wedding days.
    #[serde(flatten)]
    pub plan: CeremonyPlan,
}

impl SavedCeremony {
    /// Snapshot a plan, stamped with the current time.
    pub fn new(plan: CeremonyPlan) -> Self {
        Self {
            version: SAVE_VERSION,
            saved_at: chrono::Utc::now().to_rfc3339(),
            plan,
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot and normalize the plan inside it.
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(PersistError::InvalidFormat);
        }

        let mut saved: Self = serde_json::from_value(value)?;
        if saved.version != SAVE_VERSION {
            return Err(PersistError::VersionMismatch {
                expected: SAVE_VERSION,
                found: saved.version,
            });
        }

        let repairs = saved.plan.normalize();
        debug!(
            days = saved.plan.days().len(),
            repairs, "loaded ceremony plan"
        );
        Ok(saved)
    }
}

impl CeremonyPlan {
    /// Snapshot this plan as pretty JSON.
    pub fn to_json(&self) -> Result<String, PersistError> {
        SavedCeremony::new(self.clone()).to_json()
    }

    /// Load a plan from a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        SavedCeremony::from_json(json).map(|saved| saved.plan)
    }
}

// ============================================================================
// Lenient decoding
// ============================================================================

/// Decode a list, skipping entries that do not fit.
///
/// Anything other than an array decodes as an empty list.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            warn!(found = %kind(&other), "expected a list, using an empty one");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                warn!(%err, "skipping malformed entry");
                None
            }
        })
        .collect())
}

fn lenient_version<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value.as_u64() {
        Some(version) => u32::try_from(version).unwrap_or(u32::MAX),
        None => {
            if !value.is_null() {
                warn!(found = %kind(&value), "unreadable save version, assuming current");
            }
            SAVE_VERSION
        }
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(text)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn text_list(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Accepts `YYYY-MM-DD` as well as full timestamps starting with a date.
fn date(value: &Value) -> Option<NaiveDate> {
    let raw = value.as_str()?.trim();
    let day = raw.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Wire shape of a [`DayEvent`] as read from storage.
#[doc(hidden)]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    name: Value,
    #[serde(default)]
    time: Value,
    #[serde(default)]
    duration: Value,
    #[serde(default)]
    description: Value,
    #[serde(default)]
    rituals: Value,
    #[serde(default)]
    location: Value,
}

impl From<RawEvent> for DayEvent {
    fn from(raw: RawEvent) -> Self {
        let location = match raw.location {
            Value::Null => None,
            other => serde_json::from_value::<EventLocation>(other).ok(),
        };
        DayEvent {
            id: text(raw.id),
            name: text(raw.name),
            time: text(raw.time),
            duration: text(raw.duration),
            description: text(raw.description),
            rituals: dedup_labels(text_list(raw.rituals)),
            location,
        }
    }
}

/// Wire shape of a [`WeddingDay`] as read from storage.
#[doc(hidden)]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDay {
    #[serde(default)]
    day_number: Value,
    #[serde(default)]
    date: Value,
    #[serde(default)]
    title: Value,
    #[serde(default)]
    day_type: Value,
    #[serde(default, deserialize_with = "lenient_list")]
    events: Vec<DayEvent>,
}

impl From<RawDay> for WeddingDay {
    fn from(raw: RawDay) -> Self {
        let title = text(raw.title);
        let day_type = raw
            .day_type
            .as_str()
            .and_then(DayType::parse)
            .unwrap_or_else(|| DayType::infer_from_title(&title));
        WeddingDay {
            // Out-of-range numbers are repaired by normalize.
            day_number: raw
                .day_number
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or_default(),
            date: date(&raw.date),
            title,
            day_type,
            events: raw.events,
        }
    }
}
