//! Testing utilities for the ceremony engine.
//!
//! This module provides tools for integration testing:
//! - `PlanHarness` for scripted editing sessions on a generated plan
//! - Fixtures for a known wedding date and plan
//! - Assertion helpers for verifying plan invariants

use crate::config::PlannerConfig;
use crate::export::ExportRow;
use crate::generator::{generate_days_with, ResetConfirmed};
use crate::plan::{CeremonyPlan, DayEvent, DayType, NewEvent, Toggled};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Wedding date used by the fixtures: 20 June 2026.
pub fn sample_wedding_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 20).unwrap_or_default()
}

/// A generated plan for `day_count` days around [`sample_wedding_date`].
pub fn sample_plan(day_count: usize, traditions: &[&str]) -> CeremonyPlan {
    CeremonyPlan::with_days(generate_days_with(
        &PlannerConfig::default(),
        sample_wedding_date(),
        day_count,
        traditions,
    ))
    .with_selections(Vec::new(), traditions.iter().map(|t| t.to_string()).collect())
}

/// A harness for scripted plan-editing scenarios.
///
/// Wraps a plan plus the config and date it was generated with, so
/// scenarios read as a sequence of user actions.
pub struct PlanHarness {
    pub plan: CeremonyPlan,
    pub config: PlannerConfig,
    pub wedding_date: NaiveDate,
    traditions: Vec<String>,
}

impl PlanHarness {
    /// Harness over the default four-day plan.
    pub fn new() -> Self {
        Self::with_days(PlannerConfig::default().default_day_count, &[])
    }

    /// Harness over a plan of `day_count` days for `traditions`.
    pub fn with_days(day_count: usize, traditions: &[&str]) -> Self {
        Self {
            plan: sample_plan(day_count, traditions),
            config: PlannerConfig::default(),
            wedding_date: sample_wedding_date(),
            traditions: traditions.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Toggle a plan-level ritual.
    pub fn pick_ritual(&mut self, label: &str) -> Toggled {
        self.plan.toggle_selected_ritual(label)
    }

    /// Toggle `ritual` on the `event_index`-th event of a day.
    ///
    /// # Panics
    ///
    /// Panics if the day or event does not exist.
    #[track_caller]
    pub fn assign(&mut self, day_index: usize, event_index: usize, ritual: &str) -> Toggled {
        let id = self.event_id(day_index, event_index);
        match self.plan.assign_ritual_to_event(day_index, &id, ritual) {
            Some(toggled) => toggled,
            None => panic!("no event {event_index} on day {day_index}"),
        }
    }

    /// Add an event using the config's blank-draft defaults.
    pub fn add_event(&mut self, day_index: usize, name: &str, time: &str) -> Option<String> {
        let draft: NewEvent = self.config.new_event(name).at(time);
        self.plan.add_event(day_index, draft)
    }

    /// Regenerate with a confirmed reset.
    pub fn regenerate(&mut self, day_count: usize) {
        self.plan.regenerate(
            ResetConfirmed::acknowledge(),
            &self.config,
            self.wedding_date,
            day_count,
            self.traditions.as_slice(),
        );
    }

    /// Id of the `event_index`-th event of a day.
    ///
    /// # Panics
    ///
    /// Panics if the day or event does not exist.
    #[track_caller]
    pub fn event_id(&self, day_index: usize, event_index: usize) -> String {
        self.event_at(day_index, event_index).id.clone()
    }

    #[track_caller]
    pub fn event_at(&self, day_index: usize, event_index: usize) -> &DayEvent {
        match self
            .plan
            .day(day_index)
            .and_then(|d| d.events.get(event_index))
        {
            Some(event) => event,
            None => panic!("no event {event_index} on day {day_index}"),
        }
    }

    /// Export rows for the current plan.
    pub fn export(&self) -> Vec<ExportRow> {
        self.plan.to_table()
    }
}

impl Default for PlanHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert days are numbered `1..=N` in order.
#[track_caller]
pub fn assert_contiguous_days(plan: &CeremonyPlan) {
    let numbers: Vec<u32> = plan.days().iter().map(|d| d.day_number).collect();
    let expected: Vec<u32> = (1..=plan.days().len() as u32).collect();
    assert_eq!(numbers, expected, "Expected days numbered 1..=N");
}

/// Assert event ids are non-empty and unique within each day.
#[track_caller]
pub fn assert_unique_event_ids(plan: &CeremonyPlan) {
    for day in plan.days() {
        let mut seen = HashSet::new();
        for event in &day.events {
            assert!(
                !event.id.trim().is_empty(),
                "Expected a non-empty event id on day {}",
                day.day_number
            );
            assert!(
                seen.insert(event.id.as_str()),
                "Duplicate event id '{}' on day {}",
                event.id,
                day.day_number
            );
        }
    }
}

/// Assert exactly one day is the wedding day.
#[track_caller]
pub fn assert_single_wedding_day(plan: &CeremonyPlan) {
    let count = plan
        .days()
        .iter()
        .filter(|d| d.day_type == DayType::Wedding)
        .count();
    assert_eq!(count, 1, "Expected exactly one wedding day, found {count}");
}

/// Assert the plan's dates are consecutive, one day apart.
#[track_caller]
pub fn assert_consecutive_dates(plan: &CeremonyPlan) {
    for pair in plan.days().windows(2) {
        match (pair[0].date, pair[1].date) {
            (Some(a), Some(b)) => assert_eq!(
                (b - a).num_days(),
                1,
                "Expected day {} to follow day {}",
                pair[1].day_number,
                pair[0].day_number
            ),
            _ => panic!("Expected every day to have a date"),
        }
    }
}

/// Assert an event on a day references `ritual`.
#[track_caller]
pub fn assert_has_ritual(plan: &CeremonyPlan, day_index: usize, event_id: &str, ritual: &str) {
    assert!(
        plan.event(day_index, event_id)
            .is_some_and(|e| e.has_ritual(ritual)),
        "Expected event '{event_id}' on day {day_index} to reference '{ritual}'"
    );
}
