use axum::{extract::State, http::StatusCode, response::Json};
use mongodb::bson::doc;
use mongodb::Database;
use serde_json::json;
use std::time::Duration;

/// GET /health
/// Basic health check endpoint (no database check)
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "property-catalog",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health/ready
/// Readiness probe with a document store connectivity check
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready"),
        (status = 503, description = "Document store unreachable")
    )
)]
pub async fn readiness_handler(
    State(database): State<Database>,
) -> (StatusCode, Json<serde_json::Value>) {
    let ping = tokio::time::timeout(
        Duration::from_secs(2),
        database.run_command(doc! { "ping": 1 }),
    )
    .await;

    match ping {
        Ok(Ok(_)) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "database": "connected",
            })),
        ),
        Ok(Err(e)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "database": "disconnected",
                "error": e.to_string(),
            })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "database": "timeout",
                "error": "Document store ping timed out after 2 seconds",
            })),
        ),
    }
}
