//! Form interaction state.
//!
//! # Responsibility
//! - Track whether the form creates a new item or edits an existing one.
//! - Resolve a raw submit into the matching registry operation.
//!
//! # Invariants
//! - Exactly one interaction state exists per session; it is never persisted.
//! - Every successful submit leaves the state in `Create` mode.

pub mod machine;
