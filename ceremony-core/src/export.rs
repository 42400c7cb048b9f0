//! Schedule export.
//!
//! Flattens the edited plan into four-column rows and renders them as CSV
//! that spreadsheet tools open cleanly.

use crate::config::PlannerConfig;
use crate::plan::{CeremonyPlan, WeddingDay};

/// Column headings written above the rows.
pub const HEADER: [&str; 4] = ["Day", "Type", "Date", "Events"];

const NO_EVENTS: &str = "No events scheduled";
const NONE_SELECTED: &str = "None selected";
const NO_DATE: &str = "TBD";

/// One exported row. Always exactly four fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow(pub [String; 4]);

impl ExportRow {
    fn new(
        day: impl Into<String>,
        kind: impl Into<String>,
        date: impl Into<String>,
        events: impl Into<String>,
    ) -> Self {
        Self([day.into(), kind.into(), date.into(), events.into()])
    }

    pub fn fields(&self) -> &[String; 4] {
        &self.0
    }

    /// The row as one CSV line, without the line terminator.
    pub fn to_csv_line(&self) -> String {
        csv_line(self.0.iter().map(String::as_str))
    }
}

/// Build the export rows for a day plan and the selected label sets.
///
/// Each day yields a summary row followed by one detail row per event. Two
/// rows listing the selected rituals and traditions close the table.
pub fn to_table<R: AsRef<str>, T: AsRef<str>>(
    days: &[WeddingDay],
    selected_rituals: &[R],
    selected_traditions: &[T],
) -> Vec<ExportRow> {
    let mut rows = Vec::new();

    for day in days {
        rows.push(summary_row(day));
        for event in &day.events {
            rows.push(ExportRow::new(
                "",
                format!("  {}", event.time),
                event.name.as_str(),
                format!("{} - {}", event.duration, event.description),
            ));
        }
    }

    rows.push(ExportRow::new("Selected Rituals", joined(selected_rituals), "", ""));
    rows.push(ExportRow::new("Selected Traditions", joined(selected_traditions), "", ""));
    rows
}

fn summary_row(day: &WeddingDay) -> ExportRow {
    let date = day
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NO_DATE.to_string());
    let events = if day.events.is_empty() {
        NO_EVENTS.to_string()
    } else {
        day.events
            .iter()
            .map(|e| format!("{} - {}", e.time, e.name))
            .collect::<Vec<_>>()
            .join("; ")
    };
    ExportRow::new(
        format!("Day {}", day.day_number),
        day.day_type.export_label(),
        date,
        events,
    )
}

fn joined<S: AsRef<str>>(labels: &[S]) -> String {
    if labels.is_empty() {
        return NONE_SELECTED.to_string();
    }
    labels
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// CSV
// ============================================================================

/// Quote one field: wrap in double quotes and double any embedded quote.
pub fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn csv_line<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields
        .into_iter()
        .map(quote_field)
        .collect::<Vec<_>>()
        .join(",")
}

/// Render rows as CSV under the standard header. A non-empty `title` is
/// written first, followed by a blank line. Every line ends with `\n`.
pub fn render_csv(rows: &[ExportRow], title: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) {
        out.push_str(&quote_field(title));
        out.push_str("\n\n");
    }
    out.push_str(&csv_line(HEADER));
    out.push('\n');
    for row in rows {
        out.push_str(&row.to_csv_line());
        out.push('\n');
    }
    out
}

impl CeremonyPlan {
    /// Export rows for this plan.
    pub fn to_table(&self) -> Vec<ExportRow> {
        to_table(&self.days, &self.selected_rituals, &self.selected_traditions)
    }

    /// CSV export titled with the configured export title.
    pub fn to_csv(&self, config: &PlannerConfig) -> String {
        render_csv(&self.to_table(), Some(&config.export_title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{DayEvent, DayType};
    use chrono::NaiveDate;

    fn day(number: u32, events: Vec<DayEvent>) -> WeddingDay {
        WeddingDay {
            day_number: number,
            date: NaiveDate::from_ymd_opt(2026, 6, 19),
            title: "Pre-Wedding Day 1".to_string(),
            day_type: DayType::PreWedding,
            events,
        }
    }

    const NONE: [&str; 0] = [];

    #[test]
    fn test_summary_and_detail_rows() {
        let mut dinner = DayEvent::new("e1", "Welcome Dinner", "16:00", "4 hours");
        dinner.description = "Both families".to_string();
        let days = vec![day(1, vec![DayEvent::new("e0", "Mehndi", "10:00", "3 hours"), dinner])];

        let rows = to_table(&days, &["Saptapadi", "Havan"], &NONE);
        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows[0].fields(),
            &[
                "Day 1".to_string(),
                "PRE WEDDING".to_string(),
                "2026-06-19".to_string(),
                "10:00 - Mehndi; 16:00 - Welcome Dinner".to_string(),
            ]
        );
        assert_eq!(rows[1].fields()[1], "  10:00");
        assert_eq!(rows[1].fields()[3], "3 hours - ");
        assert_eq!(rows[2].fields()[3], "4 hours - Both families");
        assert_eq!(rows[3].fields()[..2], ["Selected Rituals", "Saptapadi, Havan"]);
        assert_eq!(rows[4].fields()[..2], ["Selected Traditions", "None selected"]);
    }

    #[test]
    fn test_empty_day_and_missing_date() {
        let mut empty = day(2, vec![]);
        empty.date = None;
        empty.day_type = DayType::PostWedding;
        let rows = to_table(&[empty], &NONE, &NONE);
        assert_eq!(rows[0].fields()[1], "POST WEDDING");
        assert_eq!(rows[0].fields()[2], "TBD");
        assert_eq!(rows[0].fields()[3], "No events scheduled");
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_quoting_is_exact() {
        assert_eq!(quote_field("plain"), "\"plain\"");
        assert_eq!(quote_field("a, b"), "\"a, b\"");
        assert_eq!(quote_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(quote_field(""), "\"\"");
        let row = ExportRow::new("", "  10:00", "Toast, \"Cheers\"", "1 hour - ");
        assert_eq!(
            row.to_csv_line(),
            r#""","  10:00","Toast, ""Cheers""","1 hour - ""#
        );
    }

    #[test]
    fn test_render_csv_layout() {
        let rows = to_table(&[], &NONE, &["Hinduism"]);
        let csv = render_csv(&rows, Some("Our Week"));
        assert_eq!(
            csv,
            "\"Our Week\"\n\n\"Day\",\"Type\",\"Date\",\"Events\"\n\
             \"Selected Rituals\",\"None selected\",\"\",\"\"\n\
             \"Selected Traditions\",\"Hinduism\",\"\",\"\"\n"
        );
        assert!(render_csv(&rows, None).starts_with("\"Day\""));
        assert!(render_csv(&rows, Some("  ")).starts_with("\"Day\""));
    }

    #[test]
    fn test_plan_to_csv_uses_config_title() {
        let plan = CeremonyPlan::with_days(vec![day(1, vec![])]);
        let csv = plan.to_csv(&PlannerConfig::default());
        assert!(csv.starts_with("\"Ceremony Schedule\"\n\n"));
        assert!(csv.contains("\"Day 1\",\"PRE WEDDING\",\"2026-06-19\",\"No events scheduled\"\n"));
    }
}
