use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use crate::entity::{
    new_id, DeliveryCompletion, Group, GroupMember, GroupStatus, Notification, Professor, Project,
    ProjectInterest, ScheduleStatus, User, WeeklySchedule,
};
use crate::error::{CohortError, Result};
use crate::schema::{
    NewDeliveryCompletion, NewGroup, NewGroupMember, NewNotification, NewProfessor, NewProject,
    NewProjectInterest, NewUser, NewWeeklySchedule,
};

use super::Collection;

/// Record counts per collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub projects: usize,
    pub schedule_items: usize,
    pub professors: usize,
    pub notifications: usize,
    pub users: usize,
    pub groups: usize,
    pub group_members: usize,
    pub interests: usize,
    pub completions: usize,
}

/// In-memory holder of every entity collection.
///
/// Identifiers are generated here and are the only uniqueness the store
/// guarantees, apart from the username check in [`MemStore::register_student`].
/// Soft references (`projectId`, `groupId`, ...) are stored as given and
/// never checked against their target collection.
#[derive(Debug, Default)]
pub struct MemStore {
    projects: Collection<Project>,
    schedules: Collection<WeeklySchedule>,
    professors: Collection<Professor>,
    notifications: Collection<Notification>,
    users: Collection<User>,
    groups: Collection<Group>,
    group_members: Collection<GroupMember>,
    interests: Collection<ProjectInterest>,
    completions: Collection<DeliveryCompletion>,
}

impl MemStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store populated with the semester reference data.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        crate::seed::populate(&mut store);
        store
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            projects: self.projects.len(),
            schedule_items: self.schedules.len(),
            professors: self.professors.len(),
            notifications: self.notifications.len(),
            users: self.users.len(),
            groups: self.groups.len(),
            group_members: self.group_members.len(),
            interests: self.interests.len(),
            completions: self.completions.len(),
        }
    }

    // Projects

    pub fn list_projects(&self) -> Vec<Project> {
        self.projects.all()
    }

    pub fn get_project(&self, id: &str) -> Option<Project> {
        self.projects.get(id).cloned()
    }

    /// Add a project. Theme numbers are not checked for uniqueness.
    pub fn create_project(&mut self, input: NewProject) -> Project {
        let project = Project {
            id: new_id(),
            title: input.title,
            description: input.description,
            theme: input.theme,
            context: input.context,
            problem: input.problem,
            architecture: input.architecture,
            technologies: input.technologies,
            modules: input.modules,
            deliverables: input.deliverables,
            created_at: Utc::now(),
        };
        debug!(id = %project.id, theme = project.theme, "stored project");
        self.projects.insert(project)
    }

    // Weekly schedule

    /// Schedule weeks of one project, ascending by week number.
    pub fn list_schedule(&self, project_id: &str) -> Vec<WeeklySchedule> {
        let mut weeks = self
            .schedules
            .filtered(|s| s.project_id.as_deref() == Some(project_id));
        weeks.sort_by_key(|s| s.week_number);
        weeks
    }

    pub fn get_schedule_item(&self, id: &str) -> Option<WeeklySchedule> {
        self.schedules.get(id).cloned()
    }

    pub fn create_schedule_item(&mut self, input: NewWeeklySchedule) -> WeeklySchedule {
        let item = WeeklySchedule {
            id: new_id(),
            project_id: input.project_id,
            week_number: input.week_number,
            title: input.title,
            start_date: input.start_date,
            end_date: input.end_date,
            tasks: input.tasks,
            deliverable: input.deliverable,
            evaluation_criteria: input.evaluation_criteria,
            status: input.status.unwrap_or_default(),
        };
        self.schedules.insert(item)
    }

    /// Overwrite a week's status in place. `None` when the id is unknown.
    pub fn update_schedule_status(
        &mut self,
        id: &str,
        status: ScheduleStatus,
    ) -> Option<WeeklySchedule> {
        let item = self.schedules.get_mut(id)?;
        item.status = status;
        Some(item.clone())
    }

    // Professors

    pub fn list_professors(&self) -> Vec<Professor> {
        self.professors.all()
    }

    pub fn get_professor(&self, id: &str) -> Option<Professor> {
        self.professors.get(id).cloned()
    }

    pub fn create_professor(&mut self, input: NewProfessor) -> Professor {
        self.professors.insert(Professor {
            id: new_id(),
            name: input.name,
            specialty: input.specialty,
            expertise: input.expertise,
            avatar: input.avatar,
            email: input.email,
        })
    }

    // Notifications

    /// All notifications, newest first. Ties keep insertion order.
    pub fn list_notifications(&self) -> Vec<Notification> {
        let mut notifications = self.notifications.all();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications
    }

    pub fn create_notification(&mut self, input: NewNotification) -> Notification {
        self.notifications.insert(Notification {
            id: new_id(),
            title: input.title,
            message: input.message,
            notification_type: input.notification_type,
            priority: input.priority.unwrap_or_default(),
            is_read: input.is_read.unwrap_or(false),
            created_at: Utc::now(),
        })
    }

    /// Mark a notification read. Repeating the call is a no-op that still
    /// returns the record.
    pub fn mark_notification_read(&mut self, id: &str) -> Option<Notification> {
        let notification = self.notifications.get_mut(id)?;
        notification.is_read = true;
        Some(notification.clone())
    }

    // Users

    pub fn list_users(&self) -> Vec<User> {
        self.users.all()
    }

    pub fn get_user(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }

    /// First user with exactly this username.
    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .iter()
            .find(|u| u.username.as_deref() == Some(username))
            .cloned()
    }

    /// Add a user without any uniqueness check.
    pub fn create_user(&mut self, input: NewUser) -> User {
        self.users.insert(User {
            id: new_id(),
            username: input.username,
            password: input.password,
            name: input.name,
            user_type: input.user_type,
            github_profile: input.github_profile,
            created_at: Utc::now(),
        })
    }

    /// Check the username (when one is supplied) and create the user.
    ///
    /// Callers must hold exclusive access to the store across this call so
    /// the check and the insert cannot interleave with another registration.
    pub fn register_student(&mut self, input: NewUser) -> Result<User> {
        if let Some(username) = input.username.as_deref() {
            if self.get_user_by_username(username).is_some() {
                return Err(CohortError::UsernameTaken(username.to_string()));
            }
        }
        Ok(self.create_user(input))
    }

    /// Exact, case-sensitive username and password match.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        match self.get_user_by_username(username) {
            Some(user) if user.password.as_deref() == Some(password) => Ok(user),
            _ => Err(CohortError::InvalidCredentials),
        }
    }

    // Groups

    pub fn list_groups(&self) -> Vec<Group> {
        self.groups.all()
    }

    pub fn get_group(&self, id: &str) -> Option<Group> {
        self.groups.get(id).cloned()
    }

    pub fn list_groups_by_project(&self, project_id: &str) -> Vec<Group> {
        self.groups
            .filtered(|g| g.project_id.as_deref() == Some(project_id))
    }

    /// New groups always start pending.
    pub fn create_group(&mut self, input: NewGroup) -> Group {
        self.groups.insert(Group {
            id: new_id(),
            name: input.name,
            project_id: input.project_id,
            leader_id: input.leader_id,
            status: GroupStatus::Pending,
            created_at: Utc::now(),
        })
    }

    pub fn update_group_status(&mut self, id: &str, status: GroupStatus) -> Option<Group> {
        let group = self.groups.get_mut(id)?;
        group.status = status;
        Some(group.clone())
    }

    // Group members

    pub fn list_group_members(&self, group_id: &str) -> Vec<GroupMember> {
        self.group_members.filtered(|m| m.group_id == group_id)
    }

    /// Duplicate (group, user) rows are permitted.
    pub fn add_group_member(&mut self, input: NewGroupMember) -> GroupMember {
        self.group_members.insert(GroupMember {
            id: new_id(),
            group_id: input.group_id,
            user_id: input.user_id,
            joined_at: Utc::now(),
        })
    }

    /// Delete the first membership matching both ids. Returns whether a row
    /// was removed.
    pub fn remove_group_member(&mut self, group_id: &str, user_id: &str) -> bool {
        let found = self
            .group_members
            .iter()
            .find(|m| m.group_id == group_id && m.user_id == user_id)
            .map(|m| m.id.clone());

        match found {
            Some(id) => self.group_members.remove(&id).is_some(),
            None => false,
        }
    }

    // Project interests

    pub fn list_interests_by_project(&self, project_id: &str) -> Vec<ProjectInterest> {
        self.interests.filtered(|i| i.project_id == project_id)
    }

    pub fn list_interests_by_user(&self, user_id: &str) -> Vec<ProjectInterest> {
        self.interests.filtered(|i| i.user_id == user_id)
    }

    pub fn create_interest(&mut self, input: NewProjectInterest) -> ProjectInterest {
        self.interests.insert(ProjectInterest {
            id: new_id(),
            user_id: input.user_id,
            project_id: input.project_id,
            message: input.message,
            created_at: Utc::now(),
        })
    }

    // Delivery completions

    pub fn list_completions_by_group(&self, group_id: &str) -> Vec<DeliveryCompletion> {
        self.completions.filtered(|c| c.group_id == group_id)
    }

    pub fn create_completion(&mut self, input: NewDeliveryCompletion) -> DeliveryCompletion {
        self.completions.insert(DeliveryCompletion {
            id: new_id(),
            schedule_id: input.schedule_id,
            group_id: input.group_id,
            completed_at: Utc::now(),
            notes: input.notes,
        })
    }

    /// True iff at least one completion matches both ids.
    pub fn is_delivery_completed(&self, schedule_id: &str, group_id: &str) -> bool {
        self.completions
            .iter()
            .any(|c| c.schedule_id == schedule_id && c.group_id == group_id)
    }
}
