//! Projects, schedule weeks, professors, notifications and the semester
//! calendar.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use tracing::{debug, info};

use super::{ApiError, ApiResult, CohortServer};
use crate::entity::{EntityKind, Notification, Professor, Project, ScheduleStatus, WeeklySchedule};
use crate::schema::{
    parse_body, NewNotification, NewProfessor, NewProject, NewWeeklySchedule, StatusChange,
};
use crate::seed::semester::SemesterStatus;

pub async fn list_projects(State(server): State<CohortServer>) -> ApiResult<Json<Vec<Project>>> {
    let store = server.store.lock().await;
    Ok(Json(store.list_projects()))
}

pub async fn get_project(
    State(server): State<CohortServer>,
    Path(id): Path<String>,
) -> ApiResult<Json<Project>> {
    let store = server.store.lock().await;
    store
        .get_project(&id)
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::Project))
}

pub async fn create_project(
    State(server): State<CohortServer>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let input: NewProject = parse_body(&body)?;
    let project = server.store.lock().await.create_project(input);
    info!(id = %project.id, theme = project.theme, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn list_schedule(
    State(server): State<CohortServer>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<Vec<WeeklySchedule>>> {
    let store = server.store.lock().await;
    let weeks = store.list_schedule(&project_id);
    debug!(project_id = %project_id, weeks = weeks.len(), "schedule listed");
    Ok(Json(weeks))
}

pub async fn get_schedule_item(
    State(server): State<CohortServer>,
    Path(id): Path<String>,
) -> ApiResult<Json<WeeklySchedule>> {
    let store = server.store.lock().await;
    store
        .get_schedule_item(&id)
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::ScheduleItem))
}

pub async fn create_schedule_item(
    State(server): State<CohortServer>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<WeeklySchedule>)> {
    let input: NewWeeklySchedule = parse_body(&body)?;
    let item = server.store.lock().await.create_schedule_item(input);
    info!(
        id = %item.id,
        project_id = ?item.project_id,
        week = item.week_number,
        "schedule item created"
    );
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_schedule_status(
    State(server): State<CohortServer>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<WeeklySchedule>> {
    let change: StatusChange<ScheduleStatus> =
        parse_body(&body).map_err(|e| ApiError::invalid("Invalid status", e))?;

    let mut store = server.store.lock().await;
    let item = store
        .update_schedule_status(&id, change.status)
        .ok_or(ApiError::NotFound(EntityKind::ScheduleItem))?;
    info!(id = %item.id, status = %item.status, "schedule status updated");
    Ok(Json(item))
}

pub async fn list_professors(
    State(server): State<CohortServer>,
) -> ApiResult<Json<Vec<Professor>>> {
    let store = server.store.lock().await;
    Ok(Json(store.list_professors()))
}

pub async fn get_professor(
    State(server): State<CohortServer>,
    Path(id): Path<String>,
) -> ApiResult<Json<Professor>> {
    let store = server.store.lock().await;
    store
        .get_professor(&id)
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::Professor))
}

pub async fn create_professor(
    State(server): State<CohortServer>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Professor>)> {
    let input: NewProfessor = parse_body(&body)?;
    let professor = server.store.lock().await.create_professor(input);
    info!(id = %professor.id, "professor created");
    Ok((StatusCode::CREATED, Json(professor)))
}

pub async fn list_notifications(
    State(server): State<CohortServer>,
) -> ApiResult<Json<Vec<Notification>>> {
    let store = server.store.lock().await;
    Ok(Json(store.list_notifications()))
}

pub async fn create_notification(
    State(server): State<CohortServer>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Notification>)> {
    let input: NewNotification = parse_body(&body)?;
    let notification = server.store.lock().await.create_notification(input);
    info!(
        id = %notification.id,
        kind = %notification.notification_type,
        "notification created"
    );
    Ok((StatusCode::CREATED, Json(notification)))
}

pub async fn mark_notification_read(
    State(server): State<CohortServer>,
    Path(id): Path<String>,
) -> ApiResult<Json<Notification>> {
    let mut store = server.store.lock().await;
    let notification = store
        .mark_notification_read(&id)
        .ok_or(ApiError::NotFound(EntityKind::Notification))?;
    debug!(id = %notification.id, "notification marked read");
    Ok(Json(notification))
}

pub async fn semester_status() -> Json<SemesterStatus> {
    Json(SemesterStatus::at(Utc::now()))
}
