//! Login, self-registration and user listing.
//!
//! User records leave this module only as [`PublicUser`], never with the
//! stored password.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use super::{ApiError, ApiResult, CohortServer};
use crate::entity::{EntityKind, PublicUser};
use crate::schema::{parse_body, Credentials, NewUser, StudentRegistration};

/// `{ "user": ... }` envelope returned by login and registration.
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub user: PublicUser,
}

pub async fn login(
    State(server): State<CohortServer>,
    body: Bytes,
) -> ApiResult<Json<UserEnvelope>> {
    let credentials: Credentials = parse_body(&body)
        .map_err(|e| ApiError::invalid("Username and password are required", e))?;

    let store = server.store.lock().await;
    let user = store
        .authenticate(&credentials.username, &credentials.password)
        .map_err(|e| {
            warn!(username = %credentials.username, "login rejected");
            e
        })?;

    info!(id = %user.id, "login");
    Ok(Json(UserEnvelope { user: user.into() }))
}

pub async fn register(
    State(server): State<CohortServer>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<UserEnvelope>)> {
    let registration: StudentRegistration = parse_body(&body)?;

    let mut store = server.store.lock().await;
    let user = store
        .register_student(NewUser::from(registration))
        .map_err(|e| {
            warn!(error = %e, "registration rejected");
            e
        })?;

    info!(id = %user.id, "student registered");
    Ok((StatusCode::CREATED, Json(UserEnvelope { user: user.into() })))
}

pub async fn list_users(State(server): State<CohortServer>) -> ApiResult<Json<Vec<PublicUser>>> {
    let store = server.store.lock().await;
    Ok(Json(
        store.list_users().into_iter().map(PublicUser::from).collect(),
    ))
}

pub async fn get_user(
    State(server): State<CohortServer>,
    Path(id): Path<String>,
) -> ApiResult<Json<PublicUser>> {
    let store = server.store.lock().await;
    store
        .get_user(&id)
        .map(|user| Json(user.into()))
        .ok_or(ApiError::NotFound(EntityKind::User))
}
