//! Domain model for the portfolio profile.
//!
//! # Responsibility
//! - Define the canonical profile record shared by display and edit flows.
//!
//! # Invariants
//! - Exactly one profile exists per store; it is replaced wholesale, never deleted.

pub mod profile;
