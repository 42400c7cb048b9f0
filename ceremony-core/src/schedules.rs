//! Worked example schedules.
//!
//! Read-only "inspiration" timelines, one per supported tradition and one per
//! supported pair of traditions. Pairs are stored under a canonical
//! [`TraditionPair`], so a lookup resolves the same way regardless of the
//! order the two traditions were picked in.

use crate::plan::DayType;
use crate::schedule_data;
use crate::tradition::{Tradition, TraditionPair};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One event in an example timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub time: String,
    pub duration: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub significance: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
}

impl ScheduleEvent {
    pub fn new(
        time: impl Into<String>,
        duration: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            duration: duration.into(),
            name: name.into(),
            description: description.into(),
            significance: None,
            tips: Vec::new(),
        }
    }

    pub fn with_significance(mut self, significance: impl Into<String>) -> Self {
        self.significance = Some(significance.into());
        self
    }

    pub fn with_tips(mut self, tips: &[&str]) -> Self {
        self.tips = tips.iter().map(|t| t.to_string()).collect();
        self
    }
}

/// One day of an example timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day_number: u32,
    pub day_name: String,
    pub day_type: DayType,
    pub events: Vec<ScheduleEvent>,
    /// Why the day is arranged this way.
    pub why_effective: String,
}

impl DaySchedule {
    pub fn new(
        day_number: u32,
        day_name: impl Into<String>,
        day_type: DayType,
        why_effective: impl Into<String>,
    ) -> Self {
        Self {
            day_number,
            day_name: day_name.into(),
            day_type,
            events: Vec::new(),
            why_effective: why_effective.into(),
        }
    }

    pub fn with_event(mut self, event: ScheduleEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// A complete example timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleSchedule {
    /// "Hindu Wedding" or "Hindu & Christian".
    pub subject_label: String,
    pub description: String,
    /// Always equal to `schedule.len()`.
    pub total_days: u32,
    pub schedule: Vec<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_effective: Option<String>,
}

impl ExampleSchedule {
    pub fn new(subject_label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            subject_label: subject_label.into(),
            description: description.into(),
            total_days: 0,
            schedule: Vec::new(),
            why_effective: None,
        }
    }

    pub fn with_day(mut self, day: DaySchedule) -> Self {
        self.schedule.push(day);
        self.total_days = self.schedule.len() as u32;
        self
    }

    pub fn with_why_effective(mut self, why: impl Into<String>) -> Self {
        self.why_effective = Some(why.into());
        self
    }

    /// The day whose type is [`DayType::Wedding`], if any.
    pub fn wedding_day(&self) -> Option<&DaySchedule> {
        self.schedule.iter().find(|d| d.day_type == DayType::Wedding)
    }
}

// ============================================================================
// Catalog
// ============================================================================

lazy_static::lazy_static! {
    static ref SINGLE: HashMap<Tradition, ExampleSchedule> = schedule_data::single_tradition()
        .into_iter()
        .collect();

    static ref INTERFAITH: HashMap<TraditionPair, ExampleSchedule> = schedule_data::interfaith()
        .into_iter()
        .collect();
}

/// Example timeline for one tradition, by free-form identifier.
pub fn example_schedule(tradition: &str) -> Option<&'static ExampleSchedule> {
    SINGLE.get(&Tradition::from_name(tradition)?)
}

/// Example timeline for two traditions, in either order.
///
/// `None` when either identifier is unknown, both name the same tradition,
/// or the pair has no example yet.
pub fn interfaith_example(a: &str, b: &str) -> Option<&'static ExampleSchedule> {
    INTERFAITH.get(&TraditionPair::from_names(a, b)?)
}

/// Traditions that have a single-tradition example, in catalog order.
pub fn supported_traditions() -> Vec<Tradition> {
    let mut traditions: Vec<Tradition> = SINGLE.keys().copied().collect();
    traditions.sort();
    traditions
}

/// Pairs that have an interfaith example, sorted.
pub fn supported_pairs() -> Vec<TraditionPair> {
    let mut pairs: Vec<TraditionPair> = INTERFAITH.keys().copied().collect();
    pairs.sort_by_key(|p| (p.first(), p.second()));
    pairs
}
