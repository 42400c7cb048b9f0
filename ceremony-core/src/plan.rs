//! The live, user-owned ceremony plan.
//!
//! A [`CeremonyPlan`] holds the ordered wedding days produced by the
//! generator plus two plan-level label sets (selected rituals and selected
//! traditions). Every edit is an in-place method on the plan. Edits that
//! target a day or event that no longer exists do nothing and report it,
//! because the UI may call them with stale indices during rapid edits.

use crate::config::{DEFAULT_NEW_EVENT_DURATION, DEFAULT_NEW_EVENT_TIME};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{trace, warn};
use uuid::Uuid;

// ============================================================================
// Day type
// ============================================================================

/// Where a day falls relative to the main ceremony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayType {
    #[default]
    PreWedding,
    Wedding,
    PostWedding,
}

impl DayType {
    /// Serialized form, e.g. `"pre-wedding"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::PreWedding => "pre-wedding",
            DayType::Wedding => "wedding",
            DayType::PostWedding => "post-wedding",
        }
    }

    /// Uppercased with hyphens replaced by spaces, as used in exports.
    pub fn export_label(&self) -> String {
        self.as_str().replace('-', " ").to_uppercase()
    }

    /// Parse the serialized form; unknown strings are `None`.
    pub fn parse(value: &str) -> Option<DayType> {
        match value.trim().to_lowercase().as_str() {
            "pre-wedding" => Some(DayType::PreWedding),
            "wedding" => Some(DayType::Wedding),
            "post-wedding" => Some(DayType::PostWedding),
            _ => None,
        }
    }

    /// Best guess for saved days that predate the `dayType` field.
    pub fn infer_from_title(title: &str) -> DayType {
        let title = title.trim().to_lowercase();
        if title == "wedding day" {
            DayType::Wedding
        } else if title.starts_with("post") {
            DayType::PostWedding
        } else {
            DayType::PreWedding
        }
    }

    /// Title for a day of this type.
    ///
    /// `pre_wedding_ordinal` is the 1-based position among pre-wedding days
    /// and is only used for [`DayType::PreWedding`].
    pub fn title(&self, pre_wedding_ordinal: usize) -> String {
        match self {
            DayType::PreWedding => format!("Pre-Wedding Day {pre_wedding_ordinal}"),
            DayType::Wedding => "Wedding Day".to_string(),
            DayType::PostWedding => "Post-Wedding".to_string(),
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Events and days
// ============================================================================

/// Where an event takes place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLocation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

impl EventLocation {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// One scheduled event on a wedding day.
///
/// Decoding is lenient; see [`crate::persist`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "crate::persist::RawEvent")]
pub struct DayEvent {
    /// Unique within the owning day.
    pub id: String,
    pub name: String,
    pub time: String,
    pub duration: String,
    pub description: String,
    /// Labels referencing the plan's ritual set. A label may outlive its
    /// entry in the set.
    pub rituals: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<EventLocation>,
}

impl DayEvent {
    /// Create an event with no description, rituals, or location.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        time: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            time: time.into(),
            duration: duration.into(),
            description: String::new(),
            rituals: Vec::new(),
            location: None,
        }
    }

    pub fn has_ritual(&self, ritual: &str) -> bool {
        self.rituals.iter().any(|r| r == ritual)
    }
}

/// One day of the wedding plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "crate::persist::RawDay")]
pub struct WeddingDay {
    /// 1-based position in the plan.
    pub day_number: u32,
    /// `None` when the date is unknown or could not be computed.
    pub date: Option<NaiveDate>,
    pub title: String,
    pub day_type: DayType,
    pub events: Vec<DayEvent>,
}

impl WeddingDay {
    pub fn event(&self, event_id: &str) -> Option<&DayEvent> {
        self.events.iter().find(|e| e.id == event_id)
    }

    fn event_mut(&mut self, event_id: &str) -> Option<&mut DayEvent> {
        self.events.iter_mut().find(|e| e.id == event_id)
    }

    fn has_event_id(&self, event_id: &str) -> bool {
        self.events.iter().any(|e| e.id == event_id)
    }

    /// Generate an id that no event in this day uses yet.
    pub(crate) fn fresh_event_id(&self, day_index: usize) -> String {
        loop {
            let id = format!("day{day_index}-event-{}", Uuid::new_v4().simple());
            if !self.has_event_id(&id) {
                return id;
            }
        }
    }
}

// ============================================================================
// New events
// ============================================================================

/// Draft for [`CeremonyPlan::add_event`]. The id is always assigned by the
/// plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub time: String,
    pub duration: String,
    pub description: String,
    pub rituals: Vec<String>,
    pub location: Option<EventLocation>,
}

impl NewEvent {
    /// Draft with the default start time and duration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time: DEFAULT_NEW_EVENT_TIME.to_string(),
            duration: DEFAULT_NEW_EVENT_DURATION.to_string(),
            description: String::new(),
            rituals: Vec::new(),
            location: None,
        }
    }

    /// Set the start time.
    pub fn at(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Set the duration.
    pub fn lasting(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rituals(mut self, rituals: Vec<String>) -> Self {
        self.rituals = rituals;
        self
    }

    pub fn with_location(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.location = Some(EventLocation::new(name, address));
        self
    }

    /// Name and time are required.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.time.trim().is_empty()
    }

    fn into_event(self, id: String) -> DayEvent {
        DayEvent {
            id,
            name: self.name,
            time: self.time,
            duration: self.duration,
            description: self.description,
            rituals: dedup_labels(self.rituals),
            location: self.location,
        }
    }
}

// ============================================================================
// Plan
// ============================================================================

/// Result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// The authoritative wedding plan: ordered days plus selected labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CeremonyPlan {
    #[serde(default, deserialize_with = "crate::persist::lenient_list")]
    pub(crate) selected_rituals: Vec<String>,
    #[serde(default, deserialize_with = "crate::persist::lenient_list")]
    pub(crate) selected_traditions: Vec<String>,
    #[serde(
        default,
        rename = "weddingDays",
        deserialize_with = "crate::persist::lenient_list"
    )]
    pub(crate) days: Vec<WeddingDay>,
}

impl CeremonyPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plan from already generated days.
    pub fn with_days(days: Vec<WeddingDay>) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    /// Seed the selected sets, e.g. from onboarding answers. Duplicates are
    /// dropped.
    pub fn with_selections(mut self, rituals: Vec<String>, traditions: Vec<String>) -> Self {
        self.selected_rituals = dedup_labels(rituals);
        self.selected_traditions = dedup_labels(traditions);
        self
    }

    pub fn days(&self) -> &[WeddingDay] {
        &self.days
    }

    pub fn day(&self, day_index: usize) -> Option<&WeddingDay> {
        self.days.get(day_index)
    }

    pub fn event(&self, day_index: usize, event_id: &str) -> Option<&DayEvent> {
        self.day(day_index)?.event(event_id)
    }

    /// Mutable access to an event for direct field edits. The id must stay
    /// unique within the day; [`CeremonyPlan::normalize`] repairs it if not.
    pub fn event_mut(&mut self, day_index: usize, event_id: &str) -> Option<&mut DayEvent> {
        self.days.get_mut(day_index)?.event_mut(event_id)
    }

    pub fn selected_rituals(&self) -> &[String] {
        &self.selected_rituals
    }

    pub fn selected_traditions(&self) -> &[String] {
        &self.selected_traditions
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    // ------------------------------------------------------------------------
    // Plan-level label sets
    // ------------------------------------------------------------------------

    /// Add the ritual if absent, remove it if present.
    ///
    /// Removing a ritual does not touch events that reference it.
    pub fn toggle_selected_ritual(&mut self, label: &str) -> Toggled {
        toggle_label(&mut self.selected_rituals, label)
    }

    /// Add the tradition if absent, remove it if present.
    pub fn toggle_selected_tradition(&mut self, label: &str) -> Toggled {
        toggle_label(&mut self.selected_traditions, label)
    }

    /// Add a user-typed ritual. Blank or already-selected labels are ignored.
    pub fn add_custom_ritual(&mut self, label: &str) -> bool {
        add_custom_label(&mut self.selected_rituals, label)
    }

    /// Add a user-typed tradition. Blank or already-selected labels are ignored.
    pub fn add_custom_tradition(&mut self, label: &str) -> bool {
        add_custom_label(&mut self.selected_traditions, label)
    }

    // ------------------------------------------------------------------------
    // Event edits
    // ------------------------------------------------------------------------

    /// Toggle `ritual` on one event. Returns `None` if the day or event does
    /// not exist.
    ///
    /// The ritual does not have to be in the plan's selected set.
    pub fn assign_ritual_to_event(
        &mut self,
        day_index: usize,
        event_id: &str,
        ritual: &str,
    ) -> Option<Toggled> {
        let Some(event) = self.event_mut(day_index, event_id) else {
            trace!(day_index, event_id, "assign ritual: no such event");
            return None;
        };
        Some(toggle_label(&mut event.rituals, ritual))
    }

    /// Change a day's type and retitle it. Events are left alone.
    ///
    /// Pre-wedding titles depend on position among pre-wedding days, so every
    /// pre-wedding day is renumbered as well.
    pub fn set_day_type(&mut self, day_index: usize, day_type: DayType) -> bool {
        let Some(day) = self.days.get_mut(day_index) else {
            trace!(day_index, "set day type: no such day");
            return false;
        };
        day.day_type = day_type;
        day.title = day_type.title(0);
        self.retitle_pre_wedding_days();
        true
    }

    fn retitle_pre_wedding_days(&mut self) {
        let pre_wedding = self
            .days
            .iter_mut()
            .filter(|d| d.day_type == DayType::PreWedding);
        for (position, day) in pre_wedding.enumerate() {
            day.title = DayType::PreWedding.title(position + 1);
        }
    }

    /// Append an event to a day under a fresh id. Returns the id, or `None`
    /// if the day does not exist or the draft lacks a name or time.
    pub fn add_event(&mut self, day_index: usize, draft: NewEvent) -> Option<String> {
        if !draft.is_valid() {
            trace!(day_index, "add event: draft missing name or time");
            return None;
        }
        let Some(day) = self.days.get_mut(day_index) else {
            trace!(day_index, "add event: no such day");
            return None;
        };
        let id = day.fresh_event_id(day_index);
        day.events.push(draft.into_event(id.clone()));
        Some(id)
    }

    /// Remove an event. Returns `false` if nothing was removed.
    pub fn delete_event(&mut self, day_index: usize, event_id: &str) -> bool {
        let Some(day) = self.days.get_mut(day_index) else {
            trace!(day_index, event_id, "delete event: no such day");
            return false;
        };
        let before = day.events.len();
        day.events.retain(|e| e.id != event_id);
        before != day.events.len()
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Every `(day_index, event_id)` whose event references `ritual`.
    pub fn events_with_ritual(&self, ritual: &str) -> Vec<(usize, String)> {
        self.days
            .iter()
            .enumerate()
            .flat_map(|(day_index, day)| {
                day.events
                    .iter()
                    .filter(|e| e.has_ritual(ritual))
                    .map(move |e| (day_index, e.id.clone()))
            })
            .collect()
    }

    /// Ritual labels referenced by events but no longer in the selected set,
    /// in first-reference order.
    pub fn dangling_rituals(&self) -> Vec<String> {
        let selected: HashSet<&str> = self.selected_rituals.iter().map(String::as_str).collect();
        let mut seen = HashSet::new();
        self.days
            .iter()
            .flat_map(|d| d.events.iter())
            .flat_map(|e| e.rituals.iter())
            .filter(|r| !selected.contains(r.as_str()) && seen.insert(r.as_str()))
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------------
    // Invariants
    // ------------------------------------------------------------------------

    /// Restore plan invariants after loading or direct edits.
    ///
    /// Renumbers days `1..N`, replaces blank or duplicate event ids, and drops
    /// duplicate selected labels. Event ritual references are kept as is.
    /// Returns the number of repairs made.
    pub fn normalize(&mut self) -> usize {
        let mut repairs = 0;

        for (index, day) in self.days.iter_mut().enumerate() {
            let expected = index as u32 + 1;
            if day.day_number != expected {
                day.day_number = expected;
                repairs += 1;
            }

            let mut seen = HashSet::new();
            for event_index in 0..day.events.len() {
                let id = day.events[event_index].id.clone();
                if id.trim().is_empty() || !seen.insert(id) {
                    let fresh = day.fresh_event_id(index);
                    seen.insert(fresh.clone());
                    day.events[event_index].id = fresh;
                    repairs += 1;
                }
            }
        }

        for labels in [&mut self.selected_rituals, &mut self.selected_traditions] {
            let before = labels.len();
            *labels = dedup_labels(std::mem::take(labels));
            repairs += before - labels.len();
        }

        if repairs > 0 {
            warn!(repairs, "repaired ceremony plan");
        }
        repairs
    }
}

fn toggle_label(labels: &mut Vec<String>, label: &str) -> Toggled {
    if let Some(pos) = labels.iter().position(|l| l == label) {
        labels.remove(pos);
        Toggled::Removed
    } else {
        labels.push(label.to_string());
        Toggled::Added
    }
}

fn add_custom_label(labels: &mut Vec<String>, label: &str) -> bool {
    let label = label.trim();
    if label.is_empty() || labels.iter().any(|l| l == label) {
        return false;
    }
    labels.push(label.to_string());
    true
}

pub(crate) fn dedup_labels(labels: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    labels
        .into_iter()
        .filter(|l| seen.insert(l.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> CeremonyPlan {
        let date = NaiveDate::from_ymd_opt(2026, 6, 20);
        let mut ceremony = DayEvent::new("day0-event0", "Main Ceremony", "10:00", "3 hours");
        ceremony.rituals.push("Saptapadi".to_string());
        CeremonyPlan::with_days(vec![
            WeddingDay {
                day_number: 1,
                date,
                title: "Wedding Day".to_string(),
                day_type: DayType::Wedding,
                events: vec![
                    ceremony,
                    DayEvent::new("day0-event1", "Reception", "16:00", "4 hours"),
                ],
            },
            WeddingDay {
                day_number: 2,
                date: None,
                title: "Post-Wedding".to_string(),
                day_type: DayType::PostWedding,
                events: vec![],
            },
        ])
    }

    #[test]
    fn test_day_type_labels() {
        assert_eq!(DayType::PreWedding.export_label(), "PRE WEDDING");
        assert_eq!(DayType::Wedding.export_label(), "WEDDING");
        assert_eq!(DayType::PostWedding.title(3), "Post-Wedding");
        assert_eq!(DayType::PreWedding.title(2), "Pre-Wedding Day 2");
        assert_eq!(DayType::parse("Post-Wedding"), Some(DayType::PostWedding));
        assert_eq!(DayType::parse("brunch"), None);
    }

    #[test]
    fn test_infer_day_type_from_title() {
        assert_eq!(DayType::infer_from_title("Wedding Day"), DayType::Wedding);
        assert_eq!(DayType::infer_from_title("Post-Wedding"), DayType::PostWedding);
        assert_eq!(DayType::infer_from_title("Pre-Wedding Day 2"), DayType::PreWedding);
    }

    #[test]
    fn test_toggle_selected_ritual_restores_order() {
        let mut plan = CeremonyPlan::new()
            .with_selections(vec!["A".into(), "B".into(), "C".into()], vec![]);
        assert_eq!(plan.toggle_selected_ritual("B"), Toggled::Removed);
        assert_eq!(plan.selected_rituals(), ["A", "C"]);
        assert_eq!(plan.toggle_selected_ritual("D"), Toggled::Added);
        assert_eq!(plan.toggle_selected_ritual("D"), Toggled::Removed);
        assert_eq!(plan.selected_rituals(), ["A", "C"]);
    }

    #[test]
    fn test_custom_labels_trimmed_and_deduplicated() {
        let mut plan = CeremonyPlan::new();
        assert!(plan.add_custom_tradition("  Family tea service "));
        assert!(!plan.add_custom_tradition("Family tea service"));
        assert!(!plan.add_custom_tradition("   "));
        assert_eq!(plan.selected_traditions(), ["Family tea service"]);
        // Custom labels toggle off like any other.
        assert_eq!(
            plan.toggle_selected_tradition("Family tea service"),
            Toggled::Removed
        );
    }

    #[test]
    fn test_assign_ritual_is_its_own_inverse() {
        let mut plan = sample_plan();
        let before = plan.event(0, "day0-event0").map(|e| e.rituals.clone());
        assert_eq!(
            plan.assign_ritual_to_event(0, "day0-event0", "Havan"),
            Some(Toggled::Added)
        );
        assert_eq!(
            plan.assign_ritual_to_event(0, "day0-event0", "Havan"),
            Some(Toggled::Removed)
        );
        assert_eq!(plan.event(0, "day0-event0").map(|e| e.rituals.clone()), before);
    }

    #[test]
    fn test_removing_selected_ritual_keeps_event_reference() {
        let mut plan = sample_plan().with_selections(vec!["Saptapadi".into()], vec![]);
        plan.toggle_selected_ritual("Saptapadi");
        assert!(plan.event(0, "day0-event0").is_some_and(|e| e.has_ritual("Saptapadi")));
        assert_eq!(plan.dangling_rituals(), ["Saptapadi"]);
        assert_eq!(plan.events_with_ritual("Saptapadi"), [(0, "day0-event0".to_string())]);
    }

    #[test]
    fn test_stale_indices_are_no_ops() {
        let mut plan = sample_plan();
        let original = plan.clone();
        assert_eq!(plan.assign_ritual_to_event(9, "day0-event0", "X"), None);
        assert_eq!(plan.assign_ritual_to_event(0, "missing", "X"), None);
        assert!(!plan.set_day_type(5, DayType::Wedding));
        assert!(!plan.delete_event(0, "missing"));
        assert!(!plan.delete_event(7, "day0-event0"));
        assert_eq!(plan.add_event(3, NewEvent::new("Late Party")), None);
        assert_eq!(plan, original);
    }

    #[test]
    fn test_set_day_type_keeps_events() {
        let mut plan = sample_plan();
        assert!(plan.set_day_type(0, DayType::PostWedding));
        let day = &plan.days()[0];
        assert_eq!(day.title, "Post-Wedding");
        assert_eq!(day.events.len(), 2);

        assert!(plan.set_day_type(1, DayType::PreWedding));
        assert_eq!(plan.days()[1].title, "Pre-Wedding Day 1");
    }

    #[test]
    fn test_set_day_type_renumbers_pre_wedding_days() {
        let date = NaiveDate::from_ymd_opt(2026, 6, 20).expect("valid date");
        let days = crate::generator::generate_days(date, 4, &["Hindu"]);
        let mut plan = CeremonyPlan::with_days(days);

        assert!(plan.set_day_type(0, DayType::Wedding));
        let titles: Vec<(DayType, &str)> = plan
            .days()
            .iter()
            .map(|d| (d.day_type, d.title.as_str()))
            .collect();
        assert_eq!(
            titles,
            [
                (DayType::Wedding, "Wedding Day"),
                (DayType::PreWedding, "Pre-Wedding Day 1"),
                (DayType::Wedding, "Wedding Day"),
                (DayType::PostWedding, "Post-Wedding"),
            ]
        );

        assert!(plan.set_day_type(3, DayType::PreWedding));
        assert!(plan.set_day_type(0, DayType::PreWedding));
        let titles: Vec<&str> = plan.days().iter().map(|d| d.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Pre-Wedding Day 1", "Pre-Wedding Day 2", "Wedding Day", "Pre-Wedding Day 3"]
        );
    }

    #[test]
    fn test_add_custom_ritual() {
        let mut plan = CeremonyPlan::new().with_selections(vec!["Saptapadi".into()], vec![]);
        assert!(plan.add_custom_ritual(" Tea Ceremony  "));
        assert!(!plan.add_custom_ritual("Tea Ceremony"));
        assert!(!plan.add_custom_ritual("Saptapadi"));
        assert!(!plan.add_custom_ritual(""));
        assert_eq!(plan.selected_rituals(), ["Saptapadi", "Tea Ceremony"]);
        assert_eq!(plan.toggle_selected_ritual("Tea Ceremony"), Toggled::Removed);
    }

    #[test]
    fn test_added_event_rituals_deduplicated() {
        let mut plan = sample_plan();
        let draft = NewEvent::new("Toast").with_rituals(vec!["A".into(), "A".into()]);
        let id = plan.add_event(0, draft).expect("day exists");
        let rituals = |plan: &CeremonyPlan| plan.event(0, &id).map(|e| e.rituals.clone());
        assert_eq!(rituals(&plan), Some(vec!["A".to_string()]));

        assert_eq!(plan.assign_ritual_to_event(0, &id, "A"), Some(Toggled::Removed));
        assert_eq!(plan.assign_ritual_to_event(0, &id, "A"), Some(Toggled::Added));
        assert_eq!(rituals(&plan), Some(vec!["A".to_string()]));
    }

    #[test]
    fn test_add_event_assigns_fresh_id() {
        let mut plan = sample_plan();
        let first = plan
            .add_event(1, NewEvent::new("Gift Opening").at("11:00"))
            .expect("day exists");
        let second = plan
            .add_event(1, NewEvent::new("Gift Opening").at("11:00"))
            .expect("day exists");
        assert_ne!(first, second);
        assert!(first.starts_with("day1-event-"));
        let event = plan.event(1, &first).expect("event added");
        assert_eq!(event.duration, DEFAULT_NEW_EVENT_DURATION);
    }

    #[test]
    fn test_add_event_rejects_blank_draft() {
        let mut plan = sample_plan();
        assert_eq!(plan.add_event(0, NewEvent::new("  ")), None);
        assert_eq!(plan.add_event(0, NewEvent::new("Toast").at("")), None);
        assert_eq!(plan.days()[0].events.len(), 2);
    }

    #[test]
    fn test_delete_event() {
        let mut plan = sample_plan();
        assert!(plan.delete_event(0, "day0-event1"));
        assert_eq!(plan.days()[0].events.len(), 1);
    }

    #[test]
    fn test_normalize_repairs_numbering_and_ids() {
        let mut plan = sample_plan().with_selections(vec![], vec!["Tea".into()]);
        plan.days[0].day_number = 7;
        plan.days[0].events[1].id = "day0-event0".to_string();
        plan.selected_traditions.push("Tea".to_string());

        let repairs = plan.normalize();
        assert_eq!(repairs, 3);
        assert_eq!(plan.days()[0].day_number, 1);
        assert_ne!(plan.days()[0].events[0].id, plan.days()[0].events[1].id);
        assert_eq!(plan.selected_traditions(), ["Tea"]);
        assert_eq!(plan.normalize(), 0);
    }
}
