use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use cohort::{CohortServer, MemStore};
use serde_json::{json, Value};
use tower::ServiceExt;

fn seeded_app() -> Router {
    CohortServer::new(MemStore::seeded()).router()
}

fn empty_app() -> Router {
    CohortServer::new(MemStore::new()).router()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn patch(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PATCH, uri, Some(body)).await
}

fn sample_project(title: &str, theme: u32) -> Value {
    json!({
        "title": title,
        "description": "A test project",
        "theme": theme,
        "context": "Context",
        "problem": "Problem",
        "architecture": { "backend": "Rust", "database": "PostgreSQL" },
        "technologies": ["Rust", "axum"],
        "modules": ["Auth", "Reports"],
        "deliverables": ["Code", "Docs"]
    })
}

fn field_errors(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["field"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn test_seed_produces_eight_projects_with_eleven_weeks() {
    let app = seeded_app();

    let (status, projects) = get(&app, "/api/projects").await;
    assert_eq!(status, StatusCode::OK);
    let projects = projects.as_array().unwrap();
    assert_eq!(projects.len(), 8);

    for project in projects {
        let id = project["id"].as_str().unwrap();
        let (status, weeks) = get(&app, &format!("/api/projects/{}/schedule", id)).await;
        assert_eq!(status, StatusCode::OK);
        let weeks = weeks.as_array().unwrap();
        assert_eq!(weeks.len(), 11);

        for (i, week) in weeks.iter().enumerate() {
            let expected = match i {
                0 => "completed",
                1 => "current",
                _ => "pending",
            };
            assert_eq!(week["status"], expected);
            assert_eq!(week["weekNumber"], i as u64 + 1);
        }
    }
}

#[tokio::test]
async fn test_project_round_trips_through_get() {
    let app = empty_app();

    let (status, created) = post(&app, "/api/projects", sample_project("Library System", 3)).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap();

    let (status, fetched) = get(&app, &format!("/api/projects/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Library System");
    assert_eq!(fetched["theme"], 3);
    assert_eq!(fetched["architecture"]["backend"], "Rust");
    assert_eq!(fetched["technologies"], json!(["Rust", "axum"]));
}

#[tokio::test]
async fn test_unknown_project_is_not_found() {
    let app = empty_app();
    let (status, body) = get(&app, "/api/projects/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Project not found");
}

#[tokio::test]
async fn test_create_project_reports_every_missing_field() {
    let app = empty_app();

    let (status, body) = post(&app, "/api/projects", json!({ "title": "Only a title" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed");

    let fields = field_errors(&body);
    for field in ["description", "theme", "context", "problem", "architecture"] {
        assert!(fields.iter().any(|f| f == field), "missing error for {}", field);
    }
    assert!(!fields.iter().any(|f| f == "title"));
}

#[tokio::test]
async fn test_malformed_json_is_a_validation_error() {
    let app = empty_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/groups")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(field_errors(&body), vec!["body".to_string()]);
}

#[tokio::test]
async fn test_schedule_is_sorted_by_week_number() {
    let app = empty_app();

    for week in [3, 1, 2] {
        let (status, _) = post(
            &app,
            "/api/schedule",
            json!({
                "projectId": "p1",
                "weekNumber": week,
                "title": format!("Week {}", week),
                "startDate": "2025-09-23",
                "endDate": "2025-09-29T00:00:00Z",
                "tasks": [],
                "deliverable": "Report",
                "evaluationCriteria": []
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, weeks) = get(&app, "/api/projects/p1/schedule").await;
    let numbers: Vec<u64> = weeks
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["weekNumber"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_schedule_rejects_end_before_start() {
    let app = empty_app();
    let (status, body) = post(
        &app,
        "/api/schedule",
        json!({
            "weekNumber": 1,
            "title": "Week 1",
            "startDate": "2025-09-29",
            "endDate": "2025-09-23",
            "tasks": [],
            "deliverable": "Report",
            "evaluationCriteria": []
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_errors(&body), vec!["endDate".to_string()]);
}

#[tokio::test]
async fn test_schedule_status_transition() {
    let app = seeded_app();
    let (_, projects) = get(&app, "/api/projects").await;
    let project_id = projects[0]["id"].as_str().unwrap().to_string();
    let (_, weeks) = get(&app, &format!("/api/projects/{}/schedule", project_id)).await;
    let week_id = weeks[2]["id"].as_str().unwrap().to_string();

    let uri = format!("/api/schedule/{}/status", week_id);
    let (status, updated) = patch(&app, &uri, json!({ "status": "current" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "current");

    let (status, body) = patch(&app, &uri, json!({ "status": "done" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status");

    let (_, fetched) = get(&app, &format!("/api/schedule/{}", week_id)).await;
    assert_eq!(fetched["status"], "current");

    let (status, _) = patch(
        &app,
        "/api/schedule/missing/status",
        json!({ "status": "completed" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_mark_notification_read_is_idempotent() {
    let app = seeded_app();
    let (_, notifications) = get(&app, "/api/notifications").await;
    let id = notifications[0]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/notifications/{}/read", id);

    for _ in 0..2 {
        let (status, body) = send(&app, Method::PATCH, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isRead"], true);
    }

    let (status, _) = send(&app, Method::PATCH, "/api/notifications/missing/read", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_notification_defaults() {
    let app = empty_app();
    let (status, created) = post(
        &app,
        "/api/notifications",
        json!({ "title": "Reminder", "message": "Demo on Friday", "type": "announcement" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["priority"], "medium");
    assert_eq!(created["isRead"], false);

    let (status, body) = post(
        &app,
        "/api/notifications",
        json!({ "title": "x", "message": "y", "type": "gossip" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_errors(&body), vec!["type".to_string()]);
}

#[tokio::test]
async fn test_professor_login() {
    let app = seeded_app();

    let (status, body) = post(
        &app,
        "/api/auth/login",
        json!({ "username": "professor", "password": "4731v8" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "professor");
    assert_eq!(body["user"]["type"], "professor");
    assert!(body["user"].get("password").is_none());

    let (status, body) = post(
        &app,
        "/api/auth/login",
        json!({ "username": "professor", "password": "wrong" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    let (status, body) = post(&app, "/api/auth/login", json!({ "username": "professor" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username and password are required");
}

#[tokio::test]
async fn test_login_rejects_empty_credentials() {
    let app = seeded_app();

    let (status, body) = post(
        &app,
        "/api/auth/login",
        json!({ "username": "", "password": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username and password are required");
    let fields = field_errors(&body);
    assert!(fields.iter().any(|f| f == "username"));
    assert!(fields.iter().any(|f| f == "password"));

    let (status, body) = post(
        &app,
        "/api/auth/login",
        json!({ "username": "professor", "password": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_errors(&body), vec!["password".to_string()]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_admit_one_username() {
    let app = empty_app();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                post(
                    &app,
                    "/api/auth/register",
                    json!({ "username": "dup", "password": "pw", "name": format!("Student {}", i) }),
                )
                .await
                .0
            })
        })
        .collect();

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::CONFLICT => conflicts += 1,
            other => panic!("unexpected status {}", other),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(conflicts, 15);

    let (_, users) = get(&app, "/api/users").await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "dup");
    assert_eq!(users[0]["type"], "student");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_member_removal_deletes_once() {
    let app = empty_app();
    let (_, group) = post(&app, "/api/groups", json!({ "name": "Team D" })).await;
    let members_uri = format!("/api/groups/{}/members", group["id"].as_str().unwrap());
    post(&app, &members_uri, json!({ "userId": "u1" })).await;

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let app = app.clone();
            let uri = format!("{}/u1", members_uri);
            tokio::spawn(async move { send(&app, Method::DELETE, &uri, None).await.0 })
        })
        .collect();

    let mut removed = 0;
    for handle in handles {
        let status = handle.await.unwrap();
        if status == StatusCode::NO_CONTENT {
            removed += 1;
        } else {
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
    }
    assert_eq!(removed, 1);

    let (_, members) = get(&app, &members_uri).await;
    assert!(members.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let app = empty_app();
    let body = json!({ "username": "ana", "password": "pw", "name": "Ana" });

    let (status, created) = post(&app, "/api/auth/register", body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["user"]["type"], "student");
    assert!(created["user"].get("password").is_none());
    let original_id = created["user"]["id"].clone();

    let (status, _) = post(
        &app,
        "/api/auth/register",
        json!({ "username": "ana", "password": "other", "name": "Impostor" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, users) = get(&app, "/api/users").await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], original_id);
    assert_eq!(users[0]["name"], "Ana");

    let (status, _) = post(
        &app,
        "/api/auth/login",
        json!({ "username": "ana", "password": "pw" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_register_rejects_professor_type() {
    let app = empty_app();
    let (status, body) = post(
        &app,
        "/api/auth/register",
        json!({ "username": "sneaky", "password": "pw", "name": "Sneaky", "type": "professor" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_errors(&body), vec!["type".to_string()]);
}

#[tokio::test]
async fn test_users_never_expose_passwords() {
    let app = seeded_app();
    let (status, users) = get(&app, "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    for user in users.as_array().unwrap() {
        assert!(user.get("password").is_none());
    }
}

#[tokio::test]
async fn test_group_creation_then_list_by_project() {
    let app = empty_app();

    let (status, group) = post(
        &app,
        "/api/groups",
        json!({ "name": "Team A", "projectId": "P", "leaderId": "U" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(group["status"], "pending");

    let (status, groups) = get(&app, "/api/projects/P/groups").await;
    assert_eq!(status, StatusCode::OK);
    let groups = groups.as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["name"], "Team A");
    assert_eq!(groups[0]["status"], "pending");
}

#[tokio::test]
async fn test_group_without_project_defaults_to_null() {
    let app = empty_app();
    let (status, group) = post(&app, "/api/groups", json!({ "name": "Floaters" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(group["projectId"], Value::Null);
    assert_eq!(group["leaderId"], Value::Null);
}

#[tokio::test]
async fn test_invalid_group_status_leaves_group_unchanged() {
    let app = empty_app();
    let (_, group) = post(&app, "/api/groups", json!({ "name": "Team B" })).await;
    let id = group["id"].as_str().unwrap().to_string();
    let uri = format!("/api/groups/{}/status", id);

    let (status, _) = patch(&app, &uri, json!({ "status": "archived" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) = get(&app, &format!("/api/groups/{}", id)).await;
    assert_eq!(fetched["status"], "pending");

    let (status, updated) = patch(&app, &uri, json!({ "status": "approved" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "approved");

    let (status, _) = patch(
        &app,
        "/api/groups/missing/status",
        json!({ "status": "approved" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_membership_add_and_remove() {
    let app = empty_app();
    let (_, group) = post(&app, "/api/groups", json!({ "name": "Team C" })).await;
    let group_id = group["id"].as_str().unwrap().to_string();
    let members_uri = format!("/api/groups/{}/members", group_id);

    let (status, member) = post(&app, &members_uri, json!({ "userId": "u1" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(member["groupId"], group_id.as_str());
    assert!(member["joinedAt"].is_string());

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("{}/nobody", members_uri),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, members) = get(&app, &members_uri).await;
    assert_eq!(members.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::DELETE, &format!("{}/u1", members_uri), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
    let (_, members) = get(&app, &members_uri).await;
    assert!(members.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_interests_by_project_and_user() {
    let app = empty_app();
    let (status, interest) = post(
        &app,
        "/api/interests",
        json!({ "userId": "u1", "projectId": "p1", "message": "Count me in" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(interest["createdAt"].is_string());

    post(&app, "/api/interests", json!({ "userId": "u2", "projectId": "p1" })).await;

    let (_, by_project) = get(&app, "/api/projects/p1/interests").await;
    assert_eq!(by_project.as_array().unwrap().len(), 2);

    let (_, by_user) = get(&app, "/api/users/u1/interests").await;
    let by_user = by_user.as_array().unwrap();
    assert_eq!(by_user.len(), 1);
    assert_eq!(by_user[0]["message"], "Count me in");
}

#[tokio::test]
async fn test_delivery_completion_check() {
    let app = empty_app();
    let check_uri = "/api/schedule/s1/groups/g1/completed";

    let (status, body) = get(&app, check_uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "completed": false }));

    let (status, _) = post(
        &app,
        "/api/completions",
        json!({ "scheduleId": "s1", "groupId": "g1" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, check_uri).await;
    assert_eq!(body, json!({ "completed": true }));

    let (_, completions) = get(&app, "/api/groups/g1/completions").await;
    assert_eq!(completions.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_professors_list_and_get() {
    let app = seeded_app();
    let (status, professors) = get(&app, "/api/professors").await;
    assert_eq!(status, StatusCode::OK);
    let professors = professors.as_array().unwrap();
    assert_eq!(professors.len(), 3);

    let id = professors[0]["id"].as_str().unwrap();
    let (status, fetched) = get(&app, &format!("/api/professors/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], professors[0]["name"]);
}

#[tokio::test]
async fn test_semester_status_shape() {
    let app = empty_app();
    let (status, body) = get(&app, "/api/semester").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalWeeks"], 11);
    let week = body["currentWeek"].as_u64().unwrap();
    assert!(week <= 11);
    assert!(body["progress"].as_u64().unwrap() <= 100);
}
