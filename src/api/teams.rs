//! Groups, memberships, project interests and delivery completions.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{debug, info};

use super::{ApiError, ApiResult, CohortServer};
use crate::entity::{
    DeliveryCompletion, EntityKind, Group, GroupMember, GroupStatus, ProjectInterest,
};
use crate::schema::{
    parse_body, MembershipRequest, NewDeliveryCompletion, NewGroup, NewProjectInterest,
    StatusChange,
};

pub async fn list_groups(State(server): State<CohortServer>) -> ApiResult<Json<Vec<Group>>> {
    let store = server.store.lock().await;
    Ok(Json(store.list_groups()))
}

pub async fn get_group(
    State(server): State<CohortServer>,
    Path(id): Path<String>,
) -> ApiResult<Json<Group>> {
    let store = server.store.lock().await;
    store
        .get_group(&id)
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::Group))
}

pub async fn list_project_groups(
    State(server): State<CohortServer>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<Vec<Group>>> {
    let store = server.store.lock().await;
    Ok(Json(store.list_groups_by_project(&project_id)))
}

pub async fn create_group(
    State(server): State<CohortServer>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Group>)> {
    let input: NewGroup = parse_body(&body)?;
    let group = server.store.lock().await.create_group(input);
    info!(id = %group.id, project_id = ?group.project_id, "group created");
    Ok((StatusCode::CREATED, Json(group)))
}

pub async fn update_group_status(
    State(server): State<CohortServer>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Group>> {
    let change: StatusChange<GroupStatus> =
        parse_body(&body).map_err(|e| ApiError::invalid("Invalid status", e))?;

    let mut store = server.store.lock().await;
    let group = store
        .update_group_status(&id, change.status)
        .ok_or(ApiError::NotFound(EntityKind::Group))?;
    info!(id = %group.id, status = %group.status, "group status updated");
    Ok(Json(group))
}

pub async fn list_members(
    State(server): State<CohortServer>,
    Path(group_id): Path<String>,
) -> ApiResult<Json<Vec<GroupMember>>> {
    let store = server.store.lock().await;
    Ok(Json(store.list_group_members(&group_id)))
}

pub async fn add_member(
    State(server): State<CohortServer>,
    Path(group_id): Path<String>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<GroupMember>)> {
    let request: MembershipRequest = parse_body(&body)?;
    let member = server
        .store
        .lock()
        .await
        .add_group_member(request.for_group(group_id));
    info!(group_id = %member.group_id, user_id = %member.user_id, "member added");
    Ok((StatusCode::CREATED, Json(member)))
}

pub async fn remove_member(
    State(server): State<CohortServer>,
    Path((group_id, user_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let mut store = server.store.lock().await;
    if !store.remove_group_member(&group_id, &user_id) {
        return Err(ApiError::NotFound(EntityKind::GroupMember));
    }
    info!(group_id = %group_id, user_id = %user_id, "member removed");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_project_interests(
    State(server): State<CohortServer>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<Vec<ProjectInterest>>> {
    let store = server.store.lock().await;
    Ok(Json(store.list_interests_by_project(&project_id)))
}

pub async fn list_user_interests(
    State(server): State<CohortServer>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<ProjectInterest>>> {
    let store = server.store.lock().await;
    Ok(Json(store.list_interests_by_user(&user_id)))
}

pub async fn create_interest(
    State(server): State<CohortServer>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<ProjectInterest>)> {
    let input: NewProjectInterest = parse_body(&body)?;
    let interest = server.store.lock().await.create_interest(input);
    info!(
        id = %interest.id,
        user_id = %interest.user_id,
        project_id = %interest.project_id,
        "interest recorded"
    );
    Ok((StatusCode::CREATED, Json(interest)))
}

pub async fn list_group_completions(
    State(server): State<CohortServer>,
    Path(group_id): Path<String>,
) -> ApiResult<Json<Vec<DeliveryCompletion>>> {
    let store = server.store.lock().await;
    Ok(Json(store.list_completions_by_group(&group_id)))
}

pub async fn create_completion(
    State(server): State<CohortServer>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<DeliveryCompletion>)> {
    let input: NewDeliveryCompletion = parse_body(&body)?;
    let completion = server.store.lock().await.create_completion(input);
    info!(
        id = %completion.id,
        schedule_id = %completion.schedule_id,
        group_id = %completion.group_id,
        "delivery completed"
    );
    Ok((StatusCode::CREATED, Json(completion)))
}

#[derive(Debug, Serialize)]
pub struct CompletionCheck {
    pub completed: bool,
}

pub async fn delivery_completed(
    State(server): State<CohortServer>,
    Path((schedule_id, group_id)): Path<(String, String)>,
) -> ApiResult<Json<CompletionCheck>> {
    let store = server.store.lock().await;
    let completed = store.is_delivery_completed(&schedule_id, &group_id);
    debug!(schedule_id = %schedule_id, group_id = %group_id, completed, "completion checked");
    Ok(Json(CompletionCheck { completed }))
}
