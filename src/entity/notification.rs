// src/entity/notification.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Choice, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Deadline,
    Feedback,
    Announcement,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::Deadline => write!(f, "deadline"),
            NotificationType::Feedback => write!(f, "feedback"),
            NotificationType::Announcement => write!(f, "announcement"),
        }
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deadline" => Ok(NotificationType::Deadline),
            "feedback" => Ok(NotificationType::Feedback),
            "announcement" => Ok(NotificationType::Announcement),
            _ => Err(format!("Invalid notification type: {}", s)),
        }
    }
}

impl Choice for NotificationType {
    const VARIANTS: &'static [&'static str] = &["deadline", "feedback", "announcement"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for NotificationPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationPriority::Low => write!(f, "low"),
            NotificationPriority::Medium => write!(f, "medium"),
            NotificationPriority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for NotificationPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(NotificationPriority::Low),
            "medium" => Ok(NotificationPriority::Medium),
            "high" => Ok(NotificationPriority::High),
            _ => Err(format!("Invalid notification priority: {}", s)),
        }
    }
}

impl Choice for NotificationPriority {
    const VARIANTS: &'static [&'static str] = &["low", "medium", "high"];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub priority: NotificationPriority,
    /// Only ever flips false -> true
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Record for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}
