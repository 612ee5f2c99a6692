//! Transient user feedback.
//!
//! # Responsibility
//! - Define the fire-and-forget notifier contract used by the session.
//! - Provide a notice board whose expiry timer is replaced, not stacked,
//!   when a newer notice arrives.
//!
//! # Invariants
//! - At most one notice is live at a time.
//! - An older notice's expiry never clears a newer notice.

pub mod board;

pub use board::{Notice, NoticeBoard};

/// Outcome class of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

/// Receives outcome messages. Delivery never fails from the caller's view.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}
