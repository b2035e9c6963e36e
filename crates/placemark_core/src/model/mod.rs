//! Domain model for saved places.
//!
//! # Responsibility
//! - Define the canonical location record and its identity semantics.
//!
//! # Invariants
//! - Every location is identified by a stable `LocationId`.
//! - Record equality is identity equality, never content equality.

pub mod location;
