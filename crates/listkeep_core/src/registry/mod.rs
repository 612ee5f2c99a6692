//! In-memory item registry with write-through persistence.
//!
//! # Responsibility
//! - Own the authoritative ordered item collection.
//! - Mirror every mutation into the durable snapshot before returning.
//!
//! # Invariants
//! - Item ids are unique within the collection.
//! - Insertion order is display order; nothing re-sorts the list.

pub mod item_registry;
