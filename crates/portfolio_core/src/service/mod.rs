//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate document store calls into profile-level APIs.
//! - Keep display/edit flows decoupled from storage details.

pub mod profile_store;
