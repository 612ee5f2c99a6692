//! Domain model for the list.
//!
//! # Responsibility
//! - Define the canonical item record shared by registry, storage and view.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - A persisted item never carries an empty display value.

pub mod item;
