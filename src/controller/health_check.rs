use axum::http::StatusCode;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::{json, Value};

use crate::repositories::memory_repo::MemoryReservationRepo;

pub fn router(repo: MemoryReservationRepo) -> Router {
    Router::new()
        .route("/health", get(get_health_check))
        .route_layer(Extension(repo))
}

/// Liveness plus the number of reservations currently held.
async fn get_health_check(
    Extension(repo): Extension<MemoryReservationRepo>,
) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "reservations": repo.count().await })),
    )
}
