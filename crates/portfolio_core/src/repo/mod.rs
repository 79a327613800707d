//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the document store contract the profile store depends on.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Documents are replaced wholesale; there is no field-level patch API.
//! - Missing documents are reported as `None`, not as errors.

pub mod document_repo;
