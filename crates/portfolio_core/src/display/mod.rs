//! Display view projections.
//!
//! # Responsibility
//! - Derive presentation data (menu, resume, links, title) from a profile.
//! - Track the active on-page section.
//!
//! # Invariants
//! - Every projection is a pure function of the profile passed in; nothing
//!   here mutates or caches the canonical copy.

pub mod links;
pub mod menu;
pub mod navigation;
pub mod resume;
