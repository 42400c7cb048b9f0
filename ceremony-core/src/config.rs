//! Planner configuration.

use serde::{Deserialize, Serialize};

/// Day count used when the caller has not chosen one.
pub const DEFAULT_DAY_COUNT: usize = 4;

/// Start time for a blank "add event" draft.
pub const DEFAULT_NEW_EVENT_TIME: &str = "10:00";

/// Duration for a blank "add event" draft.
pub const DEFAULT_NEW_EVENT_DURATION: &str = "2 hours";

/// Title line written above exported schedules.
pub const DEFAULT_EXPORT_TITLE: &str = "Ceremony Schedule";

/// Default start time and duration for the n-th generated event of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSlot {
    pub time: String,
    pub duration: String,
}

impl EventSlot {
    pub fn new(time: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            duration: duration.into(),
        }
    }
}

/// Configuration for plan generation and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Day count offered before the user picks one.
    pub default_day_count: usize,

    /// Time slots for generated events, by position within the day. Events
    /// past the last slot reuse it.
    pub event_slots: Vec<EventSlot>,

    /// Start time for a blank "add event" draft.
    pub new_event_time: String,

    /// Duration for a blank "add event" draft.
    pub new_event_duration: String,

    /// Title line written above CSV exports.
    pub export_title: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_day_count: DEFAULT_DAY_COUNT,
            event_slots: vec![
                EventSlot::new("10:00", "3 hours"),
                EventSlot::new("16:00", "4 hours"),
                EventSlot::new("19:00", "5 hours"),
            ],
            new_event_time: DEFAULT_NEW_EVENT_TIME.to_string(),
            new_event_duration: DEFAULT_NEW_EVENT_DURATION.to_string(),
            export_title: DEFAULT_EXPORT_TITLE.to_string(),
        }
    }
}

impl PlannerConfig {
    /// Create a config with the standard defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default day count (at least 1).
    pub fn with_default_day_count(mut self, days: usize) -> Self {
        self.default_day_count = days.max(1);
        self
    }

    /// Replace the generated-event time slots.
    pub fn with_event_slots(mut self, slots: Vec<EventSlot>) -> Self {
        self.event_slots = slots;
        self
    }

    /// Set the defaults for a blank "add event" draft.
    pub fn with_new_event_defaults(
        mut self,
        time: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        self.new_event_time = time.into();
        self.new_event_duration = duration.into();
        self
    }

    /// Set the export title line.
    pub fn with_export_title(mut self, title: impl Into<String>) -> Self {
        self.export_title = title.into();
        self
    }

    /// Slot for the event at `index` within a day.
    ///
    /// Falls back to the last slot, then to the new-event defaults when no
    /// slots are configured.
    pub fn slot(&self, index: usize) -> EventSlot {
        self.event_slots
            .get(index)
            .or_else(|| self.event_slots.last())
            .cloned()
            .unwrap_or_else(|| EventSlot::new(&self.new_event_time, &self.new_event_duration))
    }

    /// Blank "add event" draft using this config's defaults.
    pub fn new_event(&self, name: impl Into<String>) -> crate::plan::NewEvent {
        crate::plan::NewEvent::new(name)
            .at(&self.new_event_time)
            .lasting(&self.new_event_duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slots() {
        let config = PlannerConfig::default();
        assert_eq!(config.slot(0), EventSlot::new("10:00", "3 hours"));
        assert_eq!(config.slot(1), EventSlot::new("16:00", "4 hours"));
        assert_eq!(config.slot(2), EventSlot::new("19:00", "5 hours"));
        assert_eq!(config.slot(6), EventSlot::new("19:00", "5 hours"));
    }

    #[test]
    fn test_empty_slots_fall_back_to_new_event_defaults() {
        let config = PlannerConfig::new()
            .with_event_slots(vec![])
            .with_new_event_defaults("09:30", "1 hour");
        assert_eq!(config.slot(0), EventSlot::new("09:30", "1 hour"));
    }

    #[test]
    fn test_day_count_never_zero() {
        assert_eq!(PlannerConfig::new().with_default_day_count(0).default_day_count, 1);
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: PlannerConfig =
            serde_json::from_str(r#"{ "export_title": "Our Week" }"#).expect("valid json");
        assert_eq!(config.export_title, "Our Week");
        assert_eq!(config.default_day_count, DEFAULT_DAY_COUNT);
        assert_eq!(config.event_slots.len(), 3);
    }

    #[test]
    fn test_new_event_uses_configured_defaults() {
        let draft = PlannerConfig::new()
            .with_new_event_defaults("08:00", "30 minutes")
            .new_event("Tea Ceremony");
        assert_eq!(draft.time, "08:00");
        assert_eq!(draft.duration, "30 minutes");
    }
}
