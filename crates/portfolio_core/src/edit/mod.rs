//! Profile edit flow.
//!
//! # Responsibility
//! - Mirror the canonical profile into an editable draft.
//! - Validate drafts and reconcile them back through the profile store.
//!
//! # Invariants
//! - Drafts are all-or-nothing: a submit writes the whole profile or nothing.

pub mod draft;
pub mod editor;
pub mod validation;
