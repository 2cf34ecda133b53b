use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// The normalized payload posted to the reservation endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReservationRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub persons: u32,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StoredReservation {
    pub id: Uuid,
    #[serde(flatten)]
    pub reservation: ReservationRequest,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl StoredReservation {
    pub fn new(reservation: ReservationRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            reservation,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
