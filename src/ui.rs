//! UI handles the reservation flow is wired to.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

/// Blocking user notification, the equivalent of an alert box.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Confirmation panel shown after a successful booking.
pub trait ConfirmationOverlay: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

/// Writes notifications to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}

#[derive(Debug, Default)]
pub struct ConsoleOverlay {
    visible: AtomicBool,
}

impl ConsoleOverlay {
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

impl ConfirmationOverlay for ConsoleOverlay {
    fn show(&self) {
        self.visible.store(true, Ordering::SeqCst);
        println!("Reservation confirmed! We look forward to serving you at Spicy Symphony.");
    }

    fn hide(&self) {
        if self.visible.swap(false, Ordering::SeqCst) {
            info!("Confirmation overlay dismissed");
        }
    }
}
