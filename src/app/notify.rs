//! Transient toast notifications.
//!
//! [`Notifier`] is the notification service handed to every component that needs
//! to tell the user something. Toasts stack in arrival order and disappear once
//! their deadline passes; the plugin runtime schedules a timer per toast and
//! feeds the resulting tick back through [`Notifier::expire`].

use chrono::{DateTime, Duration, Utc};

/// How long a toast stays on screen.
pub const TOAST_LIFETIME_MS: i64 = 2500;

/// Visual flavour of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Primary,
    Danger,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub expires_at: DateTime<Utc>,
}

/// Stack of live toasts.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    toasts: Vec<Toast>,
}

impl Notifier {
    /// Shows `message` until `now` plus [`TOAST_LIFETIME_MS`].
    ///
    /// Returns the lifetime so the caller can schedule the expiry tick.
    pub fn notify(&mut self, message: impl Into<String>, variant: ToastVariant, now: DateTime<Utc>) -> Duration {
        let lifetime = Duration::milliseconds(TOAST_LIFETIME_MS);
        let message = message.into();

        tracing::debug!(message = %message, variant = ?variant, "showing toast");

        self.toasts.push(Toast {
            message,
            variant,
            expires_at: now + lifetime,
        });
        lifetime
    }

    /// Drops every toast whose deadline is at or before `now`.
    ///
    /// Returns `true` if anything was removed.
    pub fn expire(&mut self, now: DateTime<Utc>) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        before != self.toasts.len()
    }

    /// Live toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Earliest pending deadline, if any toast is live.
    #[must_use]
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.toasts.iter().map(|toast| toast.expires_at).min()
    }
}
