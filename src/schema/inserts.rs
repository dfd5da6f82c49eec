use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Fields, Insertable};
use crate::entity::{
    Choice, NotificationPriority, NotificationType, Outline, ScheduleStatus, UserType,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub theme: u32,
    pub context: String,
    pub problem: String,
    pub architecture: Outline,
    pub technologies: Outline,
    pub modules: Outline,
    pub deliverables: Outline,
}

impl Insertable for NewProject {
    fn from_fields(f: &mut Fields<'_>) -> Option<Self> {
        let title = f.required_string("title");
        let description = f.required_string("description");
        let theme = f.required_u32("theme", 1);
        let context = f.required_string("context");
        let problem = f.required_string("problem");
        let architecture = f.outline("architecture");
        let technologies = f.outline("technologies");
        let modules = f.outline("modules");
        let deliverables = f.outline("deliverables");

        Some(Self {
            title: title?,
            description: description?,
            theme: theme?,
            context: context?,
            problem: problem?,
            architecture: architecture?,
            technologies: technologies?,
            modules: modules?,
            deliverables: deliverables?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWeeklySchedule {
    pub project_id: Option<String>,
    pub week_number: u32,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub tasks: Vec<String>,
    pub deliverable: String,
    pub evaluation_criteria: Vec<String>,
    pub status: Option<ScheduleStatus>,
}

impl Insertable for NewWeeklySchedule {
    fn from_fields(f: &mut Fields<'_>) -> Option<Self> {
        let project_id = f.optional_string("projectId");
        let week_number = f.required_u32("weekNumber", 1);
        let title = f.required_string("title");
        let start_date = f.required_datetime("startDate");
        let end_date = f.required_datetime("endDate");
        let tasks = f.string_list("tasks");
        let deliverable = f.required_string("deliverable");
        let evaluation_criteria = f.string_list("evaluationCriteria");
        let status = f.optional_choice::<ScheduleStatus>("status");

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                f.reject("endDate", "Must not be before startDate");
            }
        }

        Some(Self {
            project_id,
            week_number: week_number?,
            title: title?,
            start_date: start_date?,
            end_date: end_date?,
            tasks: tasks?,
            deliverable: deliverable?,
            evaluation_criteria: evaluation_criteria?,
            status,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfessor {
    pub name: String,
    pub specialty: String,
    pub expertise: Vec<String>,
    pub avatar: Option<String>,
    pub email: Option<String>,
}

impl Insertable for NewProfessor {
    fn from_fields(f: &mut Fields<'_>) -> Option<Self> {
        let name = f.required_string("name");
        let specialty = f.required_string("specialty");
        let expertise = f.string_list("expertise");
        let avatar = f.optional_string("avatar");
        let email = f.optional_string("email");

        Some(Self {
            name: name?,
            specialty: specialty?,
            expertise: expertise?,
            avatar,
            email,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub priority: Option<NotificationPriority>,
    pub is_read: Option<bool>,
}

impl Insertable for NewNotification {
    fn from_fields(f: &mut Fields<'_>) -> Option<Self> {
        let title = f.required_string("title");
        let message = f.required_string("message");
        let notification_type = f.required_choice::<NotificationType>("type");
        let priority = f.optional_choice::<NotificationPriority>("priority");
        let is_read = f.optional_bool("isRead");

        Some(Self {
            title: title?,
            message: message?,
            notification_type: notification_type?,
            priority,
            is_read,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub github_profile: Option<String>,
}

impl Insertable for NewUser {
    fn from_fields(f: &mut Fields<'_>) -> Option<Self> {
        let username = f.optional_string("username");
        let password = f.optional_string("password");
        let name = f.required_string("name");
        let user_type = f.required_choice::<UserType>("type");
        let github_profile = f.optional_string("githubProfile");

        Some(Self {
            username,
            password,
            name: name?,
            user_type: user_type?,
            github_profile,
        })
    }
}

/// Self-service sign-up body. Always produces a student account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRegistration {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: String,
    pub github_profile: Option<String>,
}

impl Insertable for StudentRegistration {
    fn from_fields(f: &mut Fields<'_>) -> Option<Self> {
        let username = f.optional_string("username");
        let password = f.optional_string("password");
        let name = f.required_string("name");
        let github_profile = f.optional_string("githubProfile");

        if let Some(user_type) = f.optional_choice::<UserType>("type") {
            if user_type != UserType::Student {
                f.reject("type", "Only student accounts can self-register");
            }
        }
        if name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            f.reject("name", "Name is required");
        }

        Some(Self {
            username,
            password,
            name: name?,
            github_profile,
        })
    }
}

impl From<StudentRegistration> for NewUser {
    fn from(reg: StudentRegistration) -> Self {
        Self {
            username: reg.username,
            password: reg.password,
            name: reg.name,
            user_type: UserType::Student,
            github_profile: reg.github_profile,
        }
    }
}

/// Group creation body. Status is always assigned by the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
    pub name: String,
    pub project_id: Option<String>,
    pub leader_id: Option<String>,
}

impl Insertable for NewGroup {
    fn from_fields(f: &mut Fields<'_>) -> Option<Self> {
        let name = f.required_string("name");
        let project_id = f.optional_string("projectId");
        let leader_id = f.optional_string("leaderId");

        Some(Self {
            name: name?,
            project_id,
            leader_id,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroupMember {
    pub group_id: String,
    pub user_id: String,
}

/// Membership body for a group route; the group comes from the path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRequest {
    pub user_id: String,
}

impl MembershipRequest {
    pub fn for_group(self, group_id: impl Into<String>) -> NewGroupMember {
        NewGroupMember {
            group_id: group_id.into(),
            user_id: self.user_id,
        }
    }
}

impl Insertable for MembershipRequest {
    fn from_fields(f: &mut Fields<'_>) -> Option<Self> {
        let user_id = f.required_string("userId");
        Some(Self { user_id: user_id? })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectInterest {
    pub user_id: String,
    pub project_id: String,
    pub message: Option<String>,
}

impl Insertable for NewProjectInterest {
    fn from_fields(f: &mut Fields<'_>) -> Option<Self> {
        let user_id = f.required_string("userId");
        let project_id = f.required_string("projectId");
        let message = f.optional_string("message");

        Some(Self {
            user_id: user_id?,
            project_id: project_id?,
            message,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeliveryCompletion {
    pub schedule_id: String,
    pub group_id: String,
    pub notes: Option<String>,
}

impl Insertable for NewDeliveryCompletion {
    fn from_fields(f: &mut Fields<'_>) -> Option<Self> {
        let schedule_id = f.required_string("scheduleId");
        let group_id = f.required_string("groupId");
        let notes = f.optional_string("notes");

        Some(Self {
            schedule_id: schedule_id?,
            group_id: group_id?,
            notes,
        })
    }
}

/// `{ "status": ... }` body of a status transition.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StatusChange<S> {
    pub status: S,
}

impl<S: Choice> Insertable for StatusChange<S> {
    fn from_fields(f: &mut Fields<'_>) -> Option<Self> {
        let status = f.required_choice::<S>("status");
        Some(Self { status: status? })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Insertable for Credentials {
    fn from_fields(f: &mut Fields<'_>) -> Option<Self> {
        let username = f.required_string("username");
        let password = f.required_string("password");

        if username.as_deref().is_some_and(str::is_empty) {
            f.reject("username", "Required");
        }
        if password.as_deref().is_some_and(str::is_empty) {
            f.reject("password", "Required");
        }

        Some(Self {
            username: username?,
            password: password?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::GroupStatus;
    use crate::schema::validate_insert;
    use serde_json::json;

    fn project_body() -> serde_json::Value {
        json!({
            "title": "Portal de Notícias",
            "description": "Portal comunitário",
            "theme": 2,
            "context": "ctx",
            "problem": "prob",
            "architecture": { "backend": "Django", "database": "PostgreSQL" },
            "technologies": ["django"],
            "modules": ["API REST"],
            "deliverables": ["Apresentação Final"]
        })
    }

    #[test]
    fn test_new_project_parses_mixed_outlines() {
        let project = validate_insert::<NewProject>(&project_body()).unwrap();
        assert_eq!(project.theme, 2);
        assert!(matches!(project.architecture, Outline::Map(_)));
        assert!(matches!(project.technologies, Outline::List(_)));
    }

    #[test]
    fn test_new_project_rejects_bad_outline() {
        let mut body = project_body();
        body["modules"] = json!([1, 2]);
        let err = validate_insert::<NewProject>(&body).unwrap_err();
        assert!(err.has_field("modules"));
    }

    #[test]
    fn test_schedule_end_before_start_rejected() {
        let body = json!({
            "weekNumber": 1,
            "title": "Planejamento",
            "startDate": "2025-09-30",
            "endDate": "2025-09-23",
            "tasks": [],
            "deliverable": "Protótipo",
            "evaluationCriteria": []
        });
        let err = validate_insert::<NewWeeklySchedule>(&body).unwrap_err();
        assert!(err.has_field("endDate"));
        assert_eq!(err.errors().len(), 1);
    }

    #[test]
    fn test_schedule_status_optional() {
        let body = json!({
            "projectId": "p1",
            "weekNumber": 3,
            "title": "Models",
            "startDate": "2025-10-07",
            "endDate": "2025-10-13",
            "tasks": ["Migrações"],
            "deliverable": "Base",
            "evaluationCriteria": ["Models"]
        });
        let item = validate_insert::<NewWeeklySchedule>(&body).unwrap();
        assert!(item.status.is_none());
        assert_eq!(item.project_id.as_deref(), Some("p1"));
    }

    #[test]
    fn test_notification_requires_known_type() {
        let body = json!({ "title": "t", "message": "m", "type": "reminder" });
        let err = validate_insert::<NewNotification>(&body).unwrap_err();
        assert!(err.has_field("type"));
    }

    #[test]
    fn test_registration_forces_student() {
        let body = json!({ "name": "Ana", "githubProfile": "ana-dev" });
        let reg = validate_insert::<StudentRegistration>(&body).unwrap();
        let user = NewUser::from(reg);
        assert_eq!(user.user_type, UserType::Student);
        assert_eq!(user.github_profile.as_deref(), Some("ana-dev"));
    }

    #[test]
    fn test_registration_rejects_professor_type() {
        let body = json!({ "name": "Ana", "type": "professor" });
        let err = validate_insert::<StudentRegistration>(&body).unwrap_err();
        assert!(err.has_field("type"));
    }

    #[test]
    fn test_registration_rejects_blank_name() {
        let body = json!({ "name": "   " });
        let err = validate_insert::<StudentRegistration>(&body).unwrap_err();
        assert!(err.has_field("name"));
    }

    #[test]
    fn test_credentials_require_both_fields() {
        let err = validate_insert::<Credentials>(&json!({ "username": "professor" })).unwrap_err();
        assert!(err.has_field("password"));
        assert!(!err.has_field("username"));
    }

    #[test]
    fn test_credentials_reject_empty_strings() {
        let err = validate_insert::<Credentials>(&json!({ "username": "", "password": "" }))
            .unwrap_err();
        assert!(err.has_field("username"));
        assert!(err.has_field("password"));

        let err =
            validate_insert::<Credentials>(&json!({ "username": "professor", "password": "" }))
                .unwrap_err();
        assert!(err.has_field("password"));
        assert!(!err.has_field("username"));
    }

    #[test]
    fn test_serde_wire_names_match_field_reader() {
        let typed: NewProject = serde_json::from_value(project_body()).unwrap();
        let checked = validate_insert::<NewProject>(&project_body()).unwrap();
        assert_eq!(typed.title, checked.title);
        assert_eq!(typed.theme, checked.theme);
        assert_eq!(typed.architecture, checked.architecture);

        let body = json!({ "title": "t", "message": "m", "type": "deadline", "isRead": true });
        let typed: NewNotification = serde_json::from_value(body.clone()).unwrap();
        let checked = validate_insert::<NewNotification>(&body).unwrap();
        assert_eq!(typed.notification_type, checked.notification_type);
        assert_eq!(typed.is_read, Some(true));
        assert_eq!(checked.is_read, Some(true));

        let change: StatusChange<GroupStatus> =
            serde_json::from_value(json!({ "status": "rejected" })).unwrap();
        assert_eq!(change.status, GroupStatus::Rejected);
    }

    #[test]
    fn test_status_change_parses_choice() {
        let change =
            validate_insert::<StatusChange<GroupStatus>>(&json!({ "status": "approved" })).unwrap();
        assert_eq!(change.status, GroupStatus::Approved);
    }

    #[test]
    fn test_membership_takes_group_from_path() {
        let req = validate_insert::<MembershipRequest>(&json!({ "userId": "u1" })).unwrap();
        let member = req.for_group("g1");
        assert_eq!(member.group_id, "g1");
        assert_eq!(member.user_id, "u1");
    }
}
