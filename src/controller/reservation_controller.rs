use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use tracing::warn;
use uuid::Uuid;

use crate::form::masking::{is_formatted_phone, is_valid_email};
use crate::models::reservation::ReservationRequest;
use crate::repositories::memory_repo::{InsertOutcome, MemoryReservationRepo, UpdateOutcome};

const DUPLICATE_CONTACT: &str = "Email or phone number already exists";

pub fn router(repo: MemoryReservationRepo) -> Router {
    Router::new()
        .route("/", post(add_reservation).get(get_all_reservations))
        .route(
            "/id/:id",
            get(get_reservation_by_id)
                .put(update_reservation)
                .delete(delete_reservation),
        )
        .route_layer(Extension(repo))
}

/// Server-side field checks. Returns the first failing field's message.
pub fn validate_reservation(body: &ReservationRequest) -> Result<(), &'static str> {
    if body.name.trim().is_empty() {
        return Err("Name cannot be empty");
    }
    if !body.name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
        return Err("Name should contain only alphabets");
    }
    if body.phone.trim().is_empty() {
        return Err("Phone number is required");
    }
    if !is_formatted_phone(&body.phone) {
        return Err("Phone number must be in the format '+91 XXXXX XXXXX'");
    }
    if body.email.trim().is_empty() {
        return Err("Email is required");
    }
    if !is_valid_email(&body.email) {
        return Err("Invalid email format");
    }
    if body.date.trim().is_empty() {
        return Err("Date is required");
    }
    if body.time.trim().is_empty() {
        return Err("Time is required");
    }
    Ok(())
}

fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

fn not_found() -> axum::response::Response {
    (StatusCode::NOT_FOUND, "Reservation not found").into_response()
}

/// Unreadable or mistyped bodies are a bad request, not 422.
fn read_body(body: Result<Json<ReservationRequest>, JsonRejection>) -> Result<ReservationRequest, axum::response::Response> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            warn!("Rejected unreadable reservation payload: {}", rejection.body_text());
            Err((StatusCode::BAD_REQUEST, format!("Invalid reservation: {}", rejection.body_text())).into_response())
        }
    }
}

fn server_error(e: anyhow::Error) -> axum::response::Response {
    warn!("Reservation store failed due to: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Server error. Please try later.").into_response()
}

pub async fn add_reservation(
    Extension(repo): Extension<MemoryReservationRepo>,
    body: Result<Json<ReservationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let body = match read_body(body) {
        Ok(body) => body,
        Err(response) => return response,
    };
    if let Err(message) = validate_reservation(&body) {
        warn!("Rejected invalid reservation: {}", message);
        return (StatusCode::BAD_REQUEST, message).into_response();
    }

    return match repo.add_reservation(body).await {
        Ok(InsertOutcome::Created(_)) => {
            (StatusCode::CREATED, "Reservation successful").into_response()
        }
        Ok(InsertOutcome::DuplicateContact) => {
            (StatusCode::BAD_REQUEST, DUPLICATE_CONTACT).into_response()
        }
        Err(e) => server_error(e),
    };
}

pub async fn get_all_reservations(
    Extension(repo): Extension<MemoryReservationRepo>,
) -> impl IntoResponse {
    return match repo.retrieve_all_reservations().await {
        Ok(reservations) if reservations.is_empty() => StatusCode::NO_CONTENT.into_response(),
        Ok(reservations) => (StatusCode::OK, Json(reservations)).into_response(),
        Err(e) => server_error(e),
    };
}

pub async fn get_reservation_by_id(
    Extension(repo): Extension<MemoryReservationRepo>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&id) else {
        return not_found();
    };

    return match repo.retrieve_reservation(&id).await {
        Ok(Some(reservation)) => (StatusCode::OK, Json(reservation)).into_response(),
        Ok(None) => not_found(),
        Err(e) => server_error(e),
    };
}

pub async fn update_reservation(
    Extension(repo): Extension<MemoryReservationRepo>,
    Path(id): Path<String>,
    body: Result<Json<ReservationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&id) else {
        return not_found();
    };
    let body = match read_body(body) {
        Ok(body) => body,
        Err(response) => return response,
    };
    if let Err(message) = validate_reservation(&body) {
        return (StatusCode::BAD_REQUEST, message).into_response();
    }

    return match repo.update_reservation(&id, body).await {
        Ok(UpdateOutcome::Updated(reservation)) => (StatusCode::OK, Json(reservation)).into_response(),
        Ok(UpdateOutcome::NotFound) => not_found(),
        Ok(UpdateOutcome::DuplicateContact) => {
            (StatusCode::BAD_REQUEST, DUPLICATE_CONTACT).into_response()
        }
        Err(e) => server_error(e),
    };
}

pub async fn delete_reservation(
    Extension(repo): Extension<MemoryReservationRepo>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&id) else {
        return not_found();
    };

    return match repo.remove_reservation(&id).await {
        Ok(true) => (StatusCode::OK, "Reservation deleted successfully").into_response(),
        Ok(false) => not_found(),
        Err(e) => server_error(e),
    };
}
