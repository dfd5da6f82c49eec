// src/entity/schedule.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Choice, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    #[default]
    Pending,
    Current,
    Completed,
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleStatus::Pending => write!(f, "pending"),
            ScheduleStatus::Current => write!(f, "current"),
            ScheduleStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for ScheduleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ScheduleStatus::Pending),
            "current" => Ok(ScheduleStatus::Current),
            "completed" => Ok(ScheduleStatus::Completed),
            _ => Err(format!("Invalid schedule status: {}", s)),
        }
    }
}

impl Choice for ScheduleStatus {
    const VARIANTS: &'static [&'static str] = &["pending", "current", "completed"];
}

/// One calendar week of a project's semester plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    pub id: String,
    /// Owning project; `None` only for orphaned rows
    pub project_id: Option<String>,
    pub week_number: u32,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub tasks: Vec<String>,
    pub deliverable: String,
    pub evaluation_criteria: Vec<String>,
    pub status: ScheduleStatus,
}

impl Record for WeeklySchedule {
    fn id(&self) -> &str {
        &self.id
    }
}
