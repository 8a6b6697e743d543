//! Side effects requested by the event handler.
//!
//! The handler mutates [`AppState`](super::AppState) directly and returns
//! whatever the plugin runtime must do on its behalf. Keeping these effects as
//! values lets the state machine run in tests without a Zellij host.

use std::time::Duration;

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Requests an `Event::Tick` after the given delay.
    ///
    /// Used for toast expiry and the delayed post-login navigation.
    ScheduleTimer {
        /// Delay in milliseconds.
        millis: u64,
    },
}

impl Action {
    /// Timer action for a `chrono` delay. Negative delays fire immediately.
    #[must_use]
    pub fn timer(delay: chrono::Duration) -> Self {
        Self::ScheduleTimer {
            millis: u64::try_from(delay.num_milliseconds()).unwrap_or(0),
        }
    }

    /// Delay of a timer action in seconds, as Zellij's `set_timeout` expects.
    #[must_use]
    pub fn timer_seconds(self) -> Option<f64> {
        match self {
            Self::ScheduleTimer { millis } => Some(Duration::from_millis(millis).as_secs_f64()),
            Self::CloseFocus => None,
        }
    }
}
