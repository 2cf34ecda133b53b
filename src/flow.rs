//! The reservation submission flow.
//!
//! [`ReservationFlow`] owns the form state and is wired to its notifier,
//! confirmation overlay and backend at construction. A submission runs the
//! local checks, makes at most one backend call and reports the outcome.
//! The form is cleared only after a confirmed booking.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::client::ReservationBackend;
use crate::error::{ConfigError, ReservationError};
use crate::form::ReservationForm;
use crate::ui::{ConfirmationOverlay, Notifier};

pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(20);

/// A pending auto-dismiss. Dropping or cancelling it stops the hide.
#[derive(Debug, Default)]
struct DismissTimer {
    handle: Option<JoinHandle<()>>,
}

impl DismissTimer {
    fn arm(&mut self, overlay: Arc<dyn ConfirmationOverlay>, after: Duration) {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            overlay.hide();
        }));
    }

    /// Resolves once the pending hide has run. Returns at once when nothing is armed.
    async fn finished(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            let _ = handle.await;
            self.handle = None;
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Default)]
pub struct ReservationFlowBuilder {
    notifier: Option<Arc<dyn Notifier>>,
    overlay: Option<Arc<dyn ConfirmationOverlay>>,
    backend: Option<Arc<dyn ReservationBackend>>,
    dismiss_after: Option<Duration>,
}

impl ReservationFlowBuilder {
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn overlay(mut self, overlay: Arc<dyn ConfirmationOverlay>) -> Self {
        self.overlay = Some(overlay);
        self
    }

    pub fn backend(mut self, backend: Arc<dyn ReservationBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = Some(dismiss_after);
        self
    }

    pub fn build(self) -> Result<ReservationFlow, ConfigError> {
        Ok(ReservationFlow {
            form: ReservationForm::new(),
            notifier: self.notifier.ok_or(ConfigError::MissingHandle("notifier"))?,
            overlay: self.overlay.ok_or(ConfigError::MissingHandle("overlay"))?,
            backend: self.backend.ok_or(ConfigError::MissingHandle("backend"))?,
            dismiss_after: self.dismiss_after.unwrap_or(DEFAULT_DISMISS_AFTER),
            dismiss_timer: DismissTimer::default(),
        })
    }
}

pub struct ReservationFlow {
    form: ReservationForm,
    notifier: Arc<dyn Notifier>,
    overlay: Arc<dyn ConfirmationOverlay>,
    backend: Arc<dyn ReservationBackend>,
    dismiss_after: Duration,
    dismiss_timer: DismissTimer,
}

impl ReservationFlow {
    pub fn builder() -> ReservationFlowBuilder {
        ReservationFlowBuilder::default()
    }

    pub fn form(&self) -> &ReservationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ReservationForm {
        &mut self.form
    }

    /// Validates, submits and reports. Errors are shown through the notifier
    /// before being returned.
    pub async fn submit(&mut self) -> Result<(), ReservationError> {
        info!("Reservation submission triggered");

        let result = self.try_submit().await;
        match &result {
            Ok(()) => self.confirm(),
            Err(e) => {
                warn!("Reservation attempt failed due to: {}", e);
                self.notifier.notify(&e.user_message());
            }
        }

        result
    }

    async fn try_submit(&self) -> Result<(), ReservationError> {
        let request = self.form.build_request()?;
        info!("Sending reservation for {} ({} persons)", request.name, request.persons);
        self.backend.create_reservation(&request).await
    }

    fn confirm(&mut self) {
        self.overlay.show();
        self.dismiss_timer.arm(self.overlay.clone(), self.dismiss_after);
        self.form.reset();
    }

    /// Waits for the auto-dismiss armed by the last successful submission.
    pub async fn wait_for_dismiss(&mut self) {
        self.dismiss_timer.finished().await;
    }

    /// Closes the confirmation and cancels its pending auto-dismiss.
    pub fn dismiss(&mut self) {
        self.dismiss_timer.cancel();
        self.overlay.hide();
    }
}
