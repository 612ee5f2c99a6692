//! Single-slot notice board with a cancellable expiry deadline.

use super::{Notifier, Severity};
use crate::config::DEFAULT_NOTICE_TTL;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug)]
struct PendingNotice {
    notice: Notice,
    expires_at: Instant,
}

/// Holds the live notice and its deadline.
///
/// Showing a notice replaces the previous deadline, which cancels the earlier
/// auto-clear. Expiry is evaluated lazily against the caller's clock.
#[derive(Debug)]
pub struct NoticeBoard {
    ttl: Duration,
    pending: Option<PendingNotice>,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, pending: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Shows `message` as of `now`, cancelling any pending clear.
    pub fn show_at(&mut self, message: &str, severity: Severity, now: Instant) {
        self.pending = Some(PendingNotice {
            notice: Notice {
                message: message.to_string(),
                severity,
            },
            expires_at: now + self.ttl,
        });
    }

    /// Live notice at `now`; drops it once its deadline has passed.
    pub fn current_at(&mut self, now: Instant) -> Option<&Notice> {
        if self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.expires_at)
        {
            self.pending = None;
        }
        self.pending.as_ref().map(|pending| &pending.notice)
    }

    pub fn current(&mut self) -> Option<&Notice> {
        self.current_at(Instant::now())
    }

    /// Cancels the live notice immediately.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

impl Notifier for NoticeBoard {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.show_at(message, severity, Instant::now());
    }
}
