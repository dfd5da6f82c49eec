//! HTTP resource API over the domain store.
//!
//! Handlers are stateless: each one validates its input, takes the store
//! lock once for the whole operation, and maps the outcome to a status code
//! through [`ApiError`]. No endpoint checks who the caller is.

pub mod accounts;
pub mod catalog;
pub mod error;
pub mod teams;

pub use error::{ApiError, ApiResult};

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::Result;
use crate::storage::MemStore;

/// Shared handler state.
///
/// The whole store sits behind one async mutex so that multi-step
/// operations (username check then insert, member lookup then removal)
/// never interleave across requests.
#[derive(Clone)]
pub struct CohortServer {
    pub store: Arc<Mutex<MemStore>>,
}

impl CohortServer {
    pub fn new(store: MemStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Build the route table.
    pub fn router(self) -> Router {
        Router::new()
            // catalog
            .route(
                "/api/projects",
                get(catalog::list_projects).post(catalog::create_project),
            )
            .route("/api/projects/{id}", get(catalog::get_project))
            .route("/api/projects/{id}/schedule", get(catalog::list_schedule))
            .route("/api/projects/{id}/groups", get(teams::list_project_groups))
            .route(
                "/api/projects/{id}/interests",
                get(teams::list_project_interests),
            )
            .route("/api/schedule", post(catalog::create_schedule_item))
            .route("/api/schedule/{id}", get(catalog::get_schedule_item))
            .route(
                "/api/schedule/{id}/status",
                patch(catalog::update_schedule_status),
            )
            .route(
                "/api/schedule/{id}/groups/{group_id}/completed",
                get(teams::delivery_completed),
            )
            .route(
                "/api/professors",
                get(catalog::list_professors).post(catalog::create_professor),
            )
            .route("/api/professors/{id}", get(catalog::get_professor))
            .route(
                "/api/notifications",
                get(catalog::list_notifications).post(catalog::create_notification),
            )
            .route(
                "/api/notifications/{id}/read",
                patch(catalog::mark_notification_read),
            )
            .route("/api/semester", get(catalog::semester_status))
            // accounts
            .route("/api/auth/login", post(accounts::login))
            .route("/api/auth/register", post(accounts::register))
            .route("/api/users", get(accounts::list_users))
            .route("/api/users/{id}", get(accounts::get_user))
            .route("/api/users/{id}/interests", get(teams::list_user_interests))
            // groups and progress
            .route(
                "/api/groups",
                get(teams::list_groups).post(teams::create_group),
            )
            .route("/api/groups/{id}", get(teams::get_group))
            .route("/api/groups/{id}/status", patch(teams::update_group_status))
            .route(
                "/api/groups/{id}/members",
                get(teams::list_members).post(teams::add_member),
            )
            .route(
                "/api/groups/{id}/members/{user_id}",
                delete(teams::remove_member),
            )
            .route(
                "/api/groups/{id}/completions",
                get(teams::list_group_completions),
            )
            .route("/api/interests", post(teams::create_interest))
            .route("/api/completions", post(teams::create_completion))
            .layer(middleware::from_fn(log_requests))
            .with_state(self)
    }

    /// Bind `addr` and serve until Ctrl-C.
    pub async fn serve(self, addr: SocketAddr) -> Result<()> {
        let listener = TcpListener::bind(addr).await?;
        info!(addr = %listener.local_addr()?, "listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        warn!(%method, %path, status = status.as_u16(), elapsed_ms, "request");
    } else {
        info!(%method, %path, status = status.as_u16(), elapsed_ms, "request");
    }
    response
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
