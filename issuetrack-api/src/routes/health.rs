/// Liveness endpoint
///
/// `GET /health` is the one unauthenticated, non-auth route: load balancers
/// and deploy scripts poll it to decide whether the process should receive
/// traffic. It reuses the pool's health check, so "degraded" means the server
/// is up but Postgres is not answering.

use crate::app::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Health report returned to pollers
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" when the database answers, "degraded" otherwise
    pub status: String,

    /// Version of the running binary
    pub version: String,

    /// "connected" or "disconnected"
    pub database: String,
}

/// Reports process liveness and database reachability
///
/// Always answers 200; a broken database shows up in the body, not the
/// status code, so pollers can distinguish "process down" from "database
/// down".
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_reachable = issuetrack_shared::db::pool::health_check(&state.db)
        .await
        .is_ok();

    let (status, database) = if db_reachable {
        ("healthy", "connected")
    } else {
        ("degraded", "disconnected")
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: issuetrack_shared::VERSION.to_string(),
        database: database.to_string(),
    })
}
