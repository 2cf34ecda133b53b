//! Error kinds for the reservation flow.
//!
//! Every way a submission attempt can end badly is one of the four
//! [`ReservationError`] kinds. The status-to-kind mapping lives in
//! [`ReservationError::from_status`] and the kind-to-text mapping in
//! [`ReservationError::user_message`], so neither is repeated elsewhere.

use thiserror::Error;

pub const DUPLICATE_CONTACT_MESSAGE: &str = "Email or phone number already exists.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try later.";

/// Local checks that stop a submission before any network call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please agree to the reservation policy before submitting.")]
    PolicyNotAccepted,

    #[error("Phone number must be 10 digits.")]
    InvalidPhone,

    #[error("Please fill in all required fields correctly.")]
    MissingFields,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// HTTP 400, usually a phone or email that is already booked.
    #[error("reservation rejected: {detail:?}")]
    Conflict { detail: Option<String> },

    /// HTTP 500 or any other non-success status.
    #[error("server responded with {status}: {detail:?}")]
    ServerError { status: u16, detail: Option<String> },

    #[error("transport error: {0}")]
    TransportError(String),
}

impl ReservationError {
    /// Classifies a non-success response. An empty body carries no detail.
    pub fn from_status(status: u16, body: String) -> Self {
        let detail = if body.is_empty() { None } else { Some(body) };
        match status {
            400 => ReservationError::Conflict { detail },
            _ => ReservationError::ServerError { status, detail },
        }
    }

    /// Text shown to the user in the blocking notification.
    pub fn user_message(&self) -> String {
        match self {
            ReservationError::ValidationFailed(e) => e.to_string(),
            ReservationError::Conflict { detail } => detail
                .clone()
                .unwrap_or_else(|| DUPLICATE_CONTACT_MESSAGE.to_string()),
            ReservationError::ServerError { status: 500, detail } => detail
                .clone()
                .unwrap_or_else(|| SERVER_ERROR_MESSAGE.to_string()),
            ReservationError::ServerError { detail, .. } => {
                format!("Error in booking: {}", detail.as_deref().unwrap_or_default())
            }
            ReservationError::TransportError(_) => SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ReservationError {
    fn from(e: reqwest::Error) -> Self {
        ReservationError::TransportError(e.to_string())
    }
}

/// Raised while wiring the flow or its backend, before any user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required handle `{0}` was not provided")]
    MissingHandle(&'static str),

    #[error("invalid reservation endpoint: {0}")]
    InvalidEndpoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_conflict() {
        let err = ReservationError::from_status(400, "Duplicate".into());
        assert_eq!(err, ReservationError::Conflict { detail: Some("Duplicate".into()) });
        assert_eq!(err.user_message(), "Duplicate");
    }

    #[test]
    fn test_empty_bodies_fall_back_to_defaults() {
        assert_eq!(
            ReservationError::from_status(400, String::new()).user_message(),
            DUPLICATE_CONTACT_MESSAGE
        );
        assert_eq!(
            ReservationError::from_status(500, String::new()).user_message(),
            SERVER_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_internal_error_shows_server_text() {
        let err = ReservationError::from_status(500, "Mongo is down".into());
        assert_eq!(err.user_message(), "Mongo is down");
    }

    #[test]
    fn test_other_status_is_generic_booking_error() {
        let err = ReservationError::from_status(503, "maintenance".into());
        assert_eq!(err, ReservationError::ServerError { status: 503, detail: Some("maintenance".into()) });
        assert_eq!(err.user_message(), "Error in booking: maintenance");

        let err = ReservationError::from_status(404, String::new());
        assert_eq!(err.user_message(), "Error in booking: ");
    }

    #[test]
    fn test_transport_error_uses_server_message() {
        let err = ReservationError::TransportError("connection refused".into());
        assert_eq!(err.user_message(), SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ReservationError::from(ValidationError::MissingFields).user_message(),
            "Please fill in all required fields correctly."
        );
        assert_eq!(
            ReservationError::from(ValidationError::InvalidPhone).user_message(),
            "Phone number must be 10 digits."
        );
    }
}
