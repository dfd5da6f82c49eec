//! Fixed calendar of the tracked semester.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Serialize;

/// Number of schedule weeks in the semester.
pub const TOTAL_WEEKS: u32 = 11;

/// First day of week 1 (2025-09-23, midnight UTC).
pub fn semester_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 23, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Start and end instants of a 1-based week. Each week ends six days
/// after it starts.
pub fn week_dates(week_number: u32) -> (DateTime<Utc>, DateTime<Utc>) {
    let offset = i64::from(week_number.saturating_sub(1));
    let start = semester_start() + Duration::weeks(offset);
    (start, start + Duration::days(6))
}

fn elapsed_weeks(now: DateTime<Utc>) -> u32 {
    let millis = (now - semester_start()).num_milliseconds().unsigned_abs();
    let week_millis = Duration::weeks(1).num_milliseconds().unsigned_abs();
    let weeks = millis.div_ceil(week_millis);
    u32::try_from(weeks).unwrap_or(u32::MAX)
}

/// Week the semester is in at `now`, capped at [`TOTAL_WEEKS`].
pub fn current_week(now: DateTime<Utc>) -> u32 {
    elapsed_weeks(now).min(TOTAL_WEEKS)
}

/// Percentage of the semester elapsed at `now`, 0-100.
pub fn week_progress(now: DateTime<Utc>) -> u32 {
    let weeks = f64::from(elapsed_weeks(now).min(TOTAL_WEEKS * 2));
    let percent = (weeks / f64::from(TOTAL_WEEKS) * 100.0).round() as u32;
    percent.min(100)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterStatus {
    pub start_date: DateTime<Utc>,
    pub total_weeks: u32,
    pub current_week: u32,
    pub progress: u32,
}

impl SemesterStatus {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            start_date: semester_start(),
            total_weeks: TOTAL_WEEKS,
            current_week: current_week(now),
            progress: week_progress(now),
        }
    }
}
