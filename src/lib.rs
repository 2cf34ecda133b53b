//! Reservation form handling for the Spicy Symphony restaurant site.
//!
//! The [`flow::ReservationFlow`] masks and validates form input, posts the
//! booking to the reservation endpoint and reports the outcome through the
//! handles it was built with. [`controller`] holds an in-memory development
//! backend speaking the same wire contract.

pub mod carousel;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod flow;
pub mod form;
pub mod helpers;
pub mod models;
pub mod repositories;
pub mod ui;

pub use client::{HttpReservationClient, ReservationBackend};
pub use error::{ConfigError, ReservationError, ValidationError};
pub use flow::{ReservationFlow, ReservationFlowBuilder};
pub use form::ReservationForm;
pub use models::reservation::ReservationRequest;
