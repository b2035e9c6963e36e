//! Transient edit workflow for one selected place.
//!
//! # Responsibility
//! - Stage edits without touching the store until an explicit commit.
//! - Run the best-effort nearby lookup for display context.

pub mod edit_session;
