//! Day-plan generation.
//!
//! Turns a wedding date and a day count into a fresh sequence of
//! [`WeddingDay`]s, each pre-filled with a few default events. The templates
//! depend only on the day count; they are a fixed policy table.
//!
//! Generation never merges with an existing plan. Replacing a live plan goes
//! through [`CeremonyPlan::regenerate`], which demands an explicit
//! [`ResetConfirmed`] because every edit to the old days is lost.

use crate::config::PlannerConfig;
use crate::plan::{CeremonyPlan, DayEvent, DayType, WeddingDay};
use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};

const WEDDING_EVENTS: &[&str] = &["Main Ceremony", "Reception", "Grand Celebration"];
const SHORT_PRE_WEDDING_EVENTS: &[&str] = &["Mehndi/Sangeet", "Welcome Dinner", "Rehearsal"];
const FIRST_PRE_WEDDING_EVENTS: &[&str] = &["Mehndi Ceremony", "Welcome Dinner", "Family Gathering"];
const SECOND_PRE_WEDDING_EVENTS: &[&str] =
    &["Sangeet/Music Night", "Haldi Ceremony", "Rehearsal Dinner"];
const SHORT_POST_WEDDING_EVENTS: &[&str] = &["Farewell Brunch", "Gift Opening"];
const POST_WEDDING_EVENTS: &[&str] = &["Farewell Brunch", "Gift Opening", "Thank You Gathering"];
const EXTRA_DAY_EVENTS: &[&str] = &["Activities", "Celebration"];

/// Shape of one generated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTemplate {
    /// Days from the wedding date.
    pub offset: i64,
    pub day_type: DayType,
    pub events: &'static [&'static str],
}

impl DayTemplate {
    const fn new(offset: i64, day_type: DayType, events: &'static [&'static str]) -> Self {
        Self {
            offset,
            day_type,
            events,
        }
    }
}

/// Templates for a celebration of `day_count` days. A count of 0 is treated
/// as 1.
pub fn templates_for(day_count: usize) -> Vec<DayTemplate> {
    match day_count {
        0 | 1 => vec![DayTemplate::new(0, DayType::Wedding, WEDDING_EVENTS)],
        2 => vec![
            DayTemplate::new(-1, DayType::PreWedding, SHORT_PRE_WEDDING_EVENTS),
            DayTemplate::new(0, DayType::Wedding, WEDDING_EVENTS),
        ],
        3 => vec![
            DayTemplate::new(-1, DayType::PreWedding, &SHORT_PRE_WEDDING_EVENTS[..2]),
            DayTemplate::new(0, DayType::Wedding, WEDDING_EVENTS),
            DayTemplate::new(1, DayType::PostWedding, SHORT_POST_WEDDING_EVENTS),
        ],
        n => {
            let mut templates = vec![
                DayTemplate::new(-2, DayType::PreWedding, FIRST_PRE_WEDDING_EVENTS),
                DayTemplate::new(-1, DayType::PreWedding, SECOND_PRE_WEDDING_EVENTS),
                DayTemplate::new(0, DayType::Wedding, WEDDING_EVENTS),
                DayTemplate::new(1, DayType::PostWedding, POST_WEDDING_EVENTS),
            ];
            // Day i (0-based) lands at offset i - 2, which is after the
            // wedding for every day past the fourth.
            for i in 4..n {
                templates.push(DayTemplate::new(
                    i as i64 - 2,
                    DayType::PostWedding,
                    EXTRA_DAY_EVENTS,
                ));
            }
            templates
        }
    }
}

/// Generate a fresh day plan with the default configuration.
///
/// Always returns exactly `max(day_count, 1)` days numbered from 1. The
/// chosen `traditions` do not change the templates; use
/// [`crate::RitualOptions::for_traditions`] for tradition-aware suggestions.
pub fn generate_days<S: AsRef<str>>(
    wedding_date: NaiveDate,
    day_count: usize,
    traditions: &[S],
) -> Vec<WeddingDay> {
    generate_days_with(&PlannerConfig::default(), wedding_date, day_count, traditions)
}

/// Generate a fresh day plan using `config` for event time slots.
pub fn generate_days_with<S: AsRef<str>>(
    config: &PlannerConfig,
    wedding_date: NaiveDate,
    day_count: usize,
    traditions: &[S],
) -> Vec<WeddingDay> {
    if day_count == 0 {
        warn!("day count of 0 requested, generating a single day");
    }
    let traditions: Vec<&str> = traditions.iter().map(AsRef::as_ref).collect();
    debug!(%wedding_date, day_count, ?traditions, "generating day plan");

    let mut pre_wedding_ordinal = 0;
    templates_for(day_count)
        .into_iter()
        .enumerate()
        .map(|(day_index, template)| {
            if template.day_type == DayType::PreWedding {
                pre_wedding_ordinal += 1;
            }
            WeddingDay {
                day_number: day_index as u32 + 1,
                date: wedding_date.checked_add_signed(Duration::days(template.offset)),
                title: template.day_type.title(pre_wedding_ordinal),
                day_type: template.day_type,
                events: default_events(config, day_index, template.events),
            }
        })
        .collect()
}

fn default_events(config: &PlannerConfig, day_index: usize, names: &[&str]) -> Vec<DayEvent> {
    names
        .iter()
        .enumerate()
        .map(|(event_index, name)| {
            let slot = config.slot(event_index);
            DayEvent::new(
                format!("day{day_index}-event{event_index}"),
                *name,
                slot.time,
                slot.duration,
            )
        })
        .collect()
}

// ============================================================================
// Regeneration
// ============================================================================

/// Proof that the user agreed to discard the current days.
#[derive(Debug)]
pub struct ResetConfirmed(());

impl ResetConfirmed {
    /// Record the user's confirmation. Call only from the confirm action.
    pub fn acknowledge() -> Self {
        Self(())
    }
}

impl CeremonyPlan {
    /// Replace every day with a freshly generated sequence.
    ///
    /// The new days are built in full before the swap. Selected rituals and
    /// traditions are kept.
    pub fn regenerate<S: AsRef<str>>(
        &mut self,
        _confirmed: ResetConfirmed,
        config: &PlannerConfig,
        wedding_date: NaiveDate,
        day_count: usize,
        traditions: &[S],
    ) -> &[WeddingDay] {
        let days = generate_days_with(config, wedding_date, day_count, traditions);
        let discarded = std::mem::replace(&mut self.days, days);
        debug!(
            discarded = discarded.len(),
            generated = self.days.len(),
            "regenerated day plan"
        );
        &self.days
    }

    /// Generate the default plan if there are no days yet. Returns `true` if
    /// days were generated.
    pub fn ensure_days<S: AsRef<str>>(
        &mut self,
        config: &PlannerConfig,
        wedding_date: NaiveDate,
        traditions: &[S],
    ) -> bool {
        if !self.days.is_empty() {
            return false;
        }
        self.days = generate_days_with(config, wedding_date, config.default_day_count, traditions);
        true
    }
}
