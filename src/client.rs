//! Reservation backend seam and its HTTP implementation.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::{info, warn};

use crate::error::{ConfigError, ReservationError};
use crate::models::reservation::ReservationRequest;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/reservations";

#[async_trait]
pub trait ReservationBackend: Send + Sync {
    /// Submits one reservation. Non-success statuses come back as
    /// [`ReservationError::Conflict`] or [`ReservationError::ServerError`].
    async fn create_reservation(&self, request: &ReservationRequest) -> Result<(), ReservationError>;
}

/// POSTs reservations as JSON. No request timeout is set, so a call waits
/// until the server answers or the connection fails.
#[derive(Debug, Clone)]
pub struct HttpReservationClient {
    client: Client,
    endpoint: Url,
}

impl HttpReservationClient {
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ConfigError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ReservationBackend for HttpReservationClient {
    async fn create_reservation(&self, request: &ReservationRequest) -> Result<(), ReservationError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        info!("Reservation endpoint responded with {}", status);

        if status.is_success() {
            return Ok(());
        }

        // A body that cannot be read means the response never completed.
        let body = response.text().await?;
        warn!("Reservation rejected with {}: {}", status, body);

        Err(ReservationError::from_status(status.as_u16(), body))
    }
}
