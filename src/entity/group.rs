// src/entity/group.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Choice, Record};

/// Professor review state of a student group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupStatus::Pending => write!(f, "pending"),
            GroupStatus::Approved => write!(f, "approved"),
            GroupStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for GroupStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(GroupStatus::Pending),
            "approved" => Ok(GroupStatus::Approved),
            "rejected" => Ok(GroupStatus::Rejected),
            _ => Err(format!("Invalid group status: {}", s)),
        }
    }
}

impl Choice for GroupStatus {
    const VARIANTS: &'static [&'static str] = &["pending", "approved", "rejected"];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub project_id: Option<String>,
    pub leader_id: Option<String>,
    pub status: GroupStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for Group {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Join row between a group and a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub id: String,
    pub group_id: String,
    pub user_id: String,
    pub joined_at: DateTime<Utc>,
}

impl Record for GroupMember {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInterest {
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for ProjectInterest {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A group's mark that a schedule week's deliverable was produced.
/// Any row for a (schedule, group) pair means "completed".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCompletion {
    pub id: String,
    pub schedule_id: String,
    pub group_id: String,
    pub completed_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl Record for DeliveryCompletion {
    fn id(&self) -> &str {
        &self.id
    }
}
