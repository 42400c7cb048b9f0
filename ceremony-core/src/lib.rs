//! Ceremony schedule composition engine for multi-day and interfaith weddings.
//!
//! This crate provides:
//! - A catalog of 15 traditions with their rituals, customs, and ceremony structure
//! - Merged ritual options for couples blending several traditions
//! - Worked example schedules, looked up per tradition or per pair
//! - Generation of a dated multi-day plan with default events
//! - In-place editing of the plan (rituals, day types, events)
//! - Tabular and CSV export, plus a JSON snapshot format
//!
//! # Quick Start
//!
//! ```ignore
//! use ceremony_core::{generate_days, CeremonyPlan, NewEvent, PlannerConfig};
//! use chrono::NaiveDate;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let date = NaiveDate::from_ymd_opt(2026, 6, 20).ok_or("bad date")?;
//!     let mut plan = CeremonyPlan::with_days(generate_days(date, 3, &["Hindu"]))
//!         .with_selections(vec![], vec!["Hinduism".into()]);
//!
//!     plan.toggle_selected_ritual("Saptapadi");
//!     plan.assign_ritual_to_event(1, "day1-event0", "Saptapadi");
//!     plan.add_event(0, NewEvent::new("Tea Ceremony").at("09:00"));
//!
//!     print!("{}", plan.to_csv(&PlannerConfig::default()));
//!     let saved = plan.to_json()?;
//!     let restored = CeremonyPlan::from_json(&saved)?;
//!     assert_eq!(restored, plan);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod export;
pub mod generator;
pub mod interfaith;
pub mod persist;
pub mod plan;
mod schedule_data;
pub mod schedules;
pub mod testing;
pub mod tradition;

// Primary public API
pub use catalog::{
    ceremony_label, profile_for, rituals_for, structure_for, traditions_for, CeremonyType,
    RitualOptions, TraditionProfile,
};
pub use config::{EventSlot, PlannerConfig};
pub use export::{render_csv, to_table, ExportRow};
pub use generator::{generate_days, generate_days_with, ResetConfirmed};
pub use interfaith::{interfaith_options, InterfaithOptions};
pub use persist::{PersistError, SavedCeremony};
pub use plan::{CeremonyPlan, DayEvent, DayType, EventLocation, NewEvent, Toggled, WeddingDay};
pub use schedules::{
    example_schedule, interfaith_example, supported_pairs, supported_traditions, DaySchedule,
    ExampleSchedule, ScheduleEvent,
};
pub use testing::PlanHarness;
pub use tradition::{Tradition, TraditionPair};
