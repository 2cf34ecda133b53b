use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::reservation::{ReservationRequest, StoredReservation};

#[derive(Debug)]
pub enum InsertOutcome {
    Created(StoredReservation),
    DuplicateContact,
}

#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(StoredReservation),
    NotFound,
    DuplicateContact,
}

fn shares_contact(existing: &StoredReservation, reservation: &ReservationRequest) -> bool {
    existing.reservation.phone == reservation.phone || existing.reservation.email == reservation.email
}

/// Process-local reservation store. Phone and email are unique across
/// records, the way the booking backend indexes them.
#[derive(Debug, Clone, Default)]
pub struct MemoryReservationRepo {
    reservations: Arc<RwLock<HashMap<Uuid, StoredReservation>>>,
}

impl MemoryReservationRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_reservation(
        &self,
        reservation: ReservationRequest,
    ) -> anyhow::Result<InsertOutcome> {
        let mut reservations = self.reservations.write().await;

        if reservations.values().any(|existing| shares_contact(existing, &reservation)) {
            warn!("Rejected reservation with already booked contact: {}", reservation.email);
            return Ok(InsertOutcome::DuplicateContact);
        }

        let stored = StoredReservation::new(reservation);
        reservations.insert(stored.id, stored.clone());
        info!("Stored reservation {} for {}", stored.id, stored.reservation.name);

        Ok(InsertOutcome::Created(stored))
    }

    pub async fn retrieve_all_reservations(&self) -> anyhow::Result<Vec<StoredReservation>> {
        let reservations = self.reservations.read().await;
        let mut all: Vec<StoredReservation> = reservations.values().cloned().collect();
        all.sort_by_key(|r| r.created_at);
        Ok(all)
    }

    pub async fn retrieve_reservation(&self, id: &Uuid) -> anyhow::Result<Option<StoredReservation>> {
        Ok(self.reservations.read().await.get(id).cloned())
    }

    /// Replaces the fields of an existing record, keeping its id and creation
    /// time. The new phone and email must not belong to any other record.
    pub async fn update_reservation(
        &self,
        id: &Uuid,
        reservation: ReservationRequest,
    ) -> anyhow::Result<UpdateOutcome> {
        let mut reservations = self.reservations.write().await;

        let taken = reservations
            .values()
            .any(|existing| existing.id != *id && shares_contact(existing, &reservation));
        if taken {
            warn!("Rejected update of {} to an already booked contact: {}", id, reservation.email);
            return Ok(UpdateOutcome::DuplicateContact);
        }

        Ok(match reservations.get_mut(id) {
            Some(existing) => {
                existing.reservation = reservation;
                UpdateOutcome::Updated(existing.clone())
            }
            None => UpdateOutcome::NotFound,
        })
    }

    pub async fn remove_reservation(&self, id: &Uuid) -> anyhow::Result<bool> {
        Ok(self.reservations.write().await.remove(id).is_some())
    }

    pub async fn count(&self) -> usize {
        self.reservations.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(phone: &str, email: &str) -> ReservationRequest {
        ReservationRequest {
            name: "Asha Rao".into(),
            phone: phone.into(),
            email: email.into(),
            date: "2026-10-24".into(),
            time: "19:30".into(),
            persons: 2,
            message: String::new(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_phone_or_email_rejected() {
        let repo = MemoryReservationRepo::new();
        let first = repo.add_reservation(request("+91 98765 43210", "a@x.com")).await.unwrap();
        assert!(matches!(first, InsertOutcome::Created(_)));

        let same_phone = repo.add_reservation(request("+91 98765 43210", "b@x.com")).await.unwrap();
        assert!(matches!(same_phone, InsertOutcome::DuplicateContact));

        let same_email = repo.add_reservation(request("+91 11111 22222", "a@x.com")).await.unwrap();
        assert!(matches!(same_email, InsertOutcome::DuplicateContact));

        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let repo = MemoryReservationRepo::new();
        let stored = match repo.add_reservation(request("+91 98765 43210", "a@x.com")).await.unwrap() {
            InsertOutcome::Created(stored) => stored,
            InsertOutcome::DuplicateContact => panic!("unexpected duplicate"),
        };

        let mut changed = stored.reservation.clone();
        changed.persons = 6;
        let updated = match repo.update_reservation(&stored.id, changed).await.unwrap() {
            UpdateOutcome::Updated(updated) => updated,
            other => panic!("unexpected update outcome: {:?}", other),
        };
        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.reservation.persons, 6);

        assert!(repo.remove_reservation(&stored.id).await.unwrap());
        assert!(!repo.remove_reservation(&stored.id).await.unwrap());
        assert!(repo.retrieve_reservation(&stored.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = MemoryReservationRepo::new();
        let res = repo.update_reservation(&Uuid::new_v4(), request("+91 98765 43210", "a@x.com")).await.unwrap();
        assert!(matches!(res, UpdateOutcome::NotFound));
    }

    #[tokio::test]
    async fn test_update_cannot_take_another_records_contact() {
        let repo = MemoryReservationRepo::new();
        repo.add_reservation(request("+91 11111 11111", "a@x.com")).await.unwrap();
        let second = match repo.add_reservation(request("+91 22222 22222", "b@x.com")).await.unwrap() {
            InsertOutcome::Created(stored) => stored,
            InsertOutcome::DuplicateContact => panic!("unexpected duplicate"),
        };

        let res = repo.update_reservation(&second.id, request("+91 22222 22222", "a@x.com")).await.unwrap();
        assert!(matches!(res, UpdateOutcome::DuplicateContact));

        let res = repo.update_reservation(&second.id, request("+91 11111 11111", "b@x.com")).await.unwrap();
        assert!(matches!(res, UpdateOutcome::DuplicateContact));

        let kept = repo.retrieve_reservation(&second.id).await.unwrap().unwrap();
        assert_eq!(kept.reservation.email, "b@x.com");
        assert_eq!(kept.reservation.phone, "+91 22222 22222");
    }

    #[tokio::test]
    async fn test_update_may_keep_own_contact() {
        let repo = MemoryReservationRepo::new();
        let stored = match repo.add_reservation(request("+91 11111 11111", "a@x.com")).await.unwrap() {
            InsertOutcome::Created(stored) => stored,
            InsertOutcome::DuplicateContact => panic!("unexpected duplicate"),
        };

        let res = repo.update_reservation(&stored.id, request("+91 11111 11111", "a@x.com")).await.unwrap();
        assert!(matches!(res, UpdateOutcome::Updated(_)));
    }
}
