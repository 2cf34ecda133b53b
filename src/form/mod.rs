//! Field state of the reservation form.
//!
//! Edits go through the `input_*` methods, which apply the same live masking
//! a user sees while typing. [`ReservationForm::build_request`] runs the
//! pre-submission checks and produces the payload.

pub mod masking;

use tracing::debug;

use crate::error::ValidationError;
use crate::models::reservation::ReservationRequest;

use self::masking::{filter_name, format_phone, is_valid_email, mask_phone, parse_persons, phone_digits};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationForm {
    name: String,
    phone: String,
    email: String,
    date: String,
    time: String,
    persons: String,
    message: String,
    policy_accepted: bool,
    email_invalid: bool,
}

impl ReservationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_name(&mut self, raw: &str) {
        self.name = filter_name(raw);
    }

    pub fn input_phone(&mut self, raw: &str) {
        self.phone = mask_phone(raw);
    }

    /// Stores the value as typed and refreshes the advisory error indicator.
    pub fn input_email(&mut self, raw: &str) {
        self.email = raw.to_string();
        self.email_invalid = !is_valid_email(&self.email);
    }

    pub fn set_date(&mut self, date: &str) {
        self.date = date.to_string();
    }

    pub fn set_time(&mut self, time: &str) {
        self.time = time.to_string();
    }

    /// Selects a party-size label such as `"2-4"`.
    pub fn select_persons(&mut self, label: &str) {
        self.persons = label.to_string();
    }

    pub fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    pub fn set_policy_accepted(&mut self, accepted: bool) {
        self.policy_accepted = accepted;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn persons(&self) -> &str {
        &self.persons
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn policy_accepted(&self) -> bool {
        self.policy_accepted
    }

    pub fn email_invalid(&self) -> bool {
        self.email_invalid
    }

    /// Clears every field, the policy flag and the email indicator.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks run in order: policy flag, phone digit count, then required fields.
    pub fn build_request(&self) -> Result<ReservationRequest, ValidationError> {
        if !self.policy_accepted {
            return Err(ValidationError::PolicyNotAccepted);
        }

        let phone = format_phone(&phone_digits(&self.phone)).ok_or(ValidationError::InvalidPhone)?;

        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        let persons = parse_persons(&self.persons);

        debug!(
            "Building reservation for {} on {} at {} ({:?} persons)",
            name, self.date, self.time, persons
        );

        let persons = match persons {
            Some(persons) if !name.is_empty() && !email.is_empty() && !self.date.is_empty() && !self.time.is_empty() => persons,
            _ => return Err(ValidationError::MissingFields),
        };

        Ok(ReservationRequest {
            name,
            phone,
            email,
            date: self.date.clone(),
            time: self.time.clone(),
            persons,
            message: self.message.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ReservationForm {
        let mut form = ReservationForm::new();
        form.input_name("  Asha Rao ");
        form.input_phone("9876543210");
        form.input_email(" asha@example.com ");
        form.set_date("2026-10-24");
        form.set_time("19:30");
        form.select_persons("2-4");
        form.set_message("  anniversary  ");
        form.set_policy_accepted(true);
        form
    }

    #[test]
    fn test_build_request_normalizes_fields() {
        let request = filled_form().build_request().unwrap();
        assert_eq!(
            request,
            ReservationRequest {
                name: "Asha Rao".into(),
                phone: "+91 98765 43210".into(),
                email: "asha@example.com".into(),
                date: "2026-10-24".into(),
                time: "19:30".into(),
                persons: 2,
                message: "anniversary".into(),
            }
        );
    }

    #[test]
    fn test_policy_checked_before_anything_else() {
        let mut form = ReservationForm::new();
        form.input_phone("12");
        assert_eq!(form.build_request(), Err(ValidationError::PolicyNotAccepted));
    }

    #[test]
    fn test_short_phone_rejected() {
        let mut form = filled_form();
        form.input_phone("987654321");
        assert_eq!(form.build_request(), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_each_required_field_is_checked() {
        let blank_name = |f: &mut ReservationForm| f.input_name("   ");
        let blank_email = |f: &mut ReservationForm| f.input_email("");
        let blank_date = |f: &mut ReservationForm| f.set_date("");
        let blank_time = |f: &mut ReservationForm| f.set_time("");
        let no_persons = |f: &mut ReservationForm| f.select_persons("");
        let cases: [&dyn Fn(&mut ReservationForm); 5] = [&blank_name, &blank_email, &blank_date, &blank_time, &no_persons];

        for clear in cases {
            let mut form = filled_form();
            clear(&mut form);
            assert_eq!(form.build_request(), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn test_message_is_optional() {
        let mut form = filled_form();
        form.set_message("");
        assert_eq!(form.build_request().unwrap().message, "");
    }

    #[test]
    fn test_email_indicator_follows_input() {
        let mut form = ReservationForm::new();
        form.input_email("asha@");
        assert!(form.email_invalid());
        assert_eq!(form.email(), "asha@");
        form.input_email("asha@example.com");
        assert!(!form.email_invalid());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled_form();
        form.input_email("broken");
        form.reset();
        assert_eq!(form, ReservationForm::default());
        assert!(!form.policy_accepted());
        assert!(!form.email_invalid());
    }
}
