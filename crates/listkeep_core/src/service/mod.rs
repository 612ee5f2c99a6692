//! Session-level use cases.
//!
//! # Responsibility
//! - Turn front-end events into registry, interaction and view updates.
//! - Keep front ends decoupled from storage details.

pub mod list_session;
