mod group;
mod notification;
mod professor;
mod project;
mod schedule;
mod user;

pub use group::{DeliveryCompletion, Group, GroupMember, GroupStatus, ProjectInterest};
pub use notification::{Notification, NotificationPriority, NotificationType};
pub use professor::Professor;
pub use project::{Outline, Project};
pub use schedule::{ScheduleStatus, WeeklySchedule};
pub use user::{PublicUser, User, UserType};

use uuid::Uuid;

/// Generate a fresh opaque record identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Anything stored in a store collection.
pub trait Record: Clone {
    fn id(&self) -> &str;
}

/// A closed set of string values accepted for an enumerated field.
pub trait Choice: Copy + std::str::FromStr + std::fmt::Display {
    /// Accepted wire values, in declaration order.
    const VARIANTS: &'static [&'static str];
}

/// The kinds of records held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Project,
    ScheduleItem,
    Professor,
    Notification,
    User,
    Group,
    GroupMember,
    ProjectInterest,
    DeliveryCompletion,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Project => write!(f, "Project"),
            EntityKind::ScheduleItem => write!(f, "Schedule item"),
            EntityKind::Professor => write!(f, "Professor"),
            EntityKind::Notification => write!(f, "Notification"),
            EntityKind::User => write!(f, "User"),
            EntityKind::Group => write!(f, "Group"),
            EntityKind::GroupMember => write!(f, "Group member"),
            EntityKind::ProjectInterest => write!(f, "Project interest"),
            EntityKind::DeliveryCompletion => write!(f, "Delivery completion"),
        }
    }
}
