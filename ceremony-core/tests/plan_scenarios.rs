//! Scenario tests for planning, editing, and exporting a ceremony.
//!
//! Each test walks a plan through a sequence of user actions and checks the
//! resulting state. Run with: `cargo test -p ceremony-core --test plan_scenarios`

use ceremony_core::testing::{
    assert_consecutive_dates, assert_contiguous_days, assert_has_ritual,
    assert_single_wedding_day, assert_unique_event_ids, sample_wedding_date, PlanHarness,
};
use ceremony_core::{
    example_schedule, generate_days, interfaith_example, interfaith_options, rituals_for,
    CeremonyPlan, DayType, NewEvent, PlannerConfig, RitualOptions, Toggled,
};
use chrono::NaiveDate;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn event_names(plan: &CeremonyPlan, day_index: usize) -> Vec<String> {
    plan.days()[day_index]
        .events
        .iter()
        .map(|e| e.name.clone())
        .collect()
}

// =============================================================================
// Generation
// =============================================================================

#[test]
fn test_three_day_hindu_plan() {
    init_tracing();
    let days = generate_days(date(2026, 6, 20), 3, &["Hindu"]);
    let plan = CeremonyPlan::with_days(days);

    assert_contiguous_days(&plan);
    assert_consecutive_dates(&plan);
    assert_single_wedding_day(&plan);

    let days = plan.days();
    assert_eq!(days[0].date, Some(date(2026, 6, 19)));
    assert_eq!(days[0].day_type, DayType::PreWedding);
    assert_eq!(event_names(&plan, 0), ["Mehndi/Sangeet", "Welcome Dinner"]);

    assert_eq!(days[1].date, Some(date(2026, 6, 20)));
    assert_eq!(days[1].day_type, DayType::Wedding);
    assert_eq!(
        event_names(&plan, 1),
        ["Main Ceremony", "Reception", "Grand Celebration"]
    );

    assert_eq!(days[2].date, Some(date(2026, 6, 21)));
    assert_eq!(days[2].day_type, DayType::PostWedding);
    assert_eq!(event_names(&plan, 2), ["Farewell Brunch", "Gift Opening"]);
}

#[test]
fn test_default_plan_titles() {
    let harness = PlanHarness::new();
    let titles: Vec<&str> = harness
        .plan
        .days()
        .iter()
        .map(|d| d.title.as_str())
        .collect();
    assert_eq!(
        titles,
        ["Pre-Wedding Day 1", "Pre-Wedding Day 2", "Wedding Day", "Post-Wedding"]
    );
    assert_eq!(harness.plan.days()[0].date, Some(date(2026, 6, 18)));
}

#[test]
fn test_seven_day_plan_stays_well_formed() {
    let harness = PlanHarness::with_days(7, &["Hindu", "Muslim"]);
    assert_eq!(harness.plan.days().len(), 7);
    assert_contiguous_days(&harness.plan);
    assert_consecutive_dates(&harness.plan);
    assert_unique_event_ids(&harness.plan);
    assert_single_wedding_day(&harness.plan);
}

// =============================================================================
// Editing
// =============================================================================

#[test]
fn test_ritual_assignment_flow() {
    init_tracing();
    let mut harness = PlanHarness::with_days(3, &["Hinduism"]);
    let suggestions = RitualOptions::for_traditions(&["Hinduism"]);
    let ritual = suggestions.rituals[0].clone();

    assert_eq!(harness.pick_ritual(&ritual), Toggled::Added);
    assert_eq!(harness.assign(1, 0, &ritual), Toggled::Added);
    let ceremony_id = harness.event_id(1, 0);
    assert_has_ritual(&harness.plan, 1, &ceremony_id, &ritual);

    // Deselecting keeps the event's reference.
    assert_eq!(harness.pick_ritual(&ritual), Toggled::Removed);
    assert_has_ritual(&harness.plan, 1, &ceremony_id, &ritual);
    assert_eq!(harness.plan.dangling_rituals(), [ritual.clone()]);

    let rows = harness.export();
    let detail = rows
        .iter()
        .find(|r| r.fields()[2] == "Main Ceremony")
        .expect("detail row");
    assert_eq!(detail.fields()[1], "  10:00");
}

#[test]
fn test_day_type_change_retitles_day() {
    let mut harness = PlanHarness::new();
    let events_before = harness.plan.days()[1].events.clone();

    assert!(harness.plan.set_day_type(1, DayType::PostWedding));
    assert_eq!(harness.plan.days()[1].title, "Post-Wedding");
    assert_eq!(harness.plan.days()[1].events, events_before);

    assert!(harness.plan.set_day_type(3, DayType::PreWedding));
    assert_eq!(harness.plan.days()[3].title, "Pre-Wedding Day 2");
}

#[test]
fn test_add_and_delete_events() {
    let mut harness = PlanHarness::with_days(2, &[]);
    let id = harness
        .add_event(0, "Tea Ceremony", "08:00")
        .expect("event added");
    assert_unique_event_ids(&harness.plan);
    let added = harness.plan.event(0, &id).expect("event present");
    assert_eq!(added.time, "08:00");
    assert_eq!(added.duration, PlannerConfig::default().new_event_duration);

    assert!(harness.plan.delete_event(0, &id));
    assert!(!harness.plan.delete_event(0, &id));
    assert_eq!(harness.plan.days()[0].events.len(), 3);
}

#[test]
fn test_stale_edits_leave_plan_untouched() {
    let mut harness = PlanHarness::with_days(2, &[]);
    let before = harness.plan.clone();

    assert_eq!(harness.plan.assign_ritual_to_event(4, "day0-event0", "Havan"), None);
    assert!(!harness.plan.set_day_type(2, DayType::Wedding));
    assert!(!harness.plan.delete_event(1, "day0-event0"));
    assert_eq!(
        harness
            .plan
            .add_event(2, NewEvent::new("After Party").at("22:00")),
        None
    );
    assert_eq!(harness.plan, before);
}

#[test]
fn test_regenerate_discards_edits() {
    let mut harness = PlanHarness::new();
    harness.add_event(0, "Tea Ceremony", "08:00");
    harness.pick_ritual("Saptapadi");

    harness.regenerate(3);
    assert_eq!(harness.plan.days().len(), 3);
    assert!(harness.plan.days()[0]
        .events
        .iter()
        .all(|e| e.name != "Tea Ceremony"));
    assert_eq!(harness.plan.selected_rituals(), ["Saptapadi"]);
}

// =============================================================================
// Reference data
// =============================================================================

#[test]
fn test_interfaith_reference_flow() {
    let options = interfaith_options(&["Hindu", "Muslim"]);
    for ritual in rituals_for("Hinduism").iter().chain(rituals_for("Islam")) {
        assert!(options.all_rituals.iter().any(|r| r == ritual));
    }

    let example = interfaith_example("muslim", "hindu").expect("example exists");
    assert_eq!(example.subject_label, "Hindu & Muslim");
    assert_eq!(example.total_days, 4);
    assert!(example.why_effective.is_some());

    assert!(example_schedule("Jewish").is_some());
    assert!(interfaith_example("buddhist", "wiccan").is_none());
}

// =============================================================================
// Export and persistence
// =============================================================================

#[test]
fn test_export_then_save_and_restore() {
    init_tracing();
    let mut harness = PlanHarness::with_days(3, &["Hindu"]);
    harness.pick_ritual("Saptapadi");
    harness.assign(1, 0, "Saptapadi");
    for event_index in (0..2).rev() {
        let id = harness.event_id(2, event_index);
        assert!(harness.plan.delete_event(2, &id));
    }

    let csv = harness.plan.to_csv(&harness.config);
    assert!(csv.starts_with("\"Ceremony Schedule\"\n\n\"Day\",\"Type\",\"Date\",\"Events\"\n"));
    assert!(csv.contains("\"Day 3\",\"POST WEDDING\",\"2026-06-21\",\"No events scheduled\"\n"));
    assert!(csv.ends_with("\"Selected Traditions\",\"Hindu\",\"\",\"\"\n"));

    let json = harness.plan.to_json().expect("serializes");
    let restored = CeremonyPlan::from_json(&json).expect("loads");
    assert_eq!(restored, harness.plan);
    assert_eq!(restored.days()[0].date, Some(sample_wedding_date().pred_opt().expect("date")));
}
