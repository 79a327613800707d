//! Core domain logic for the portfolio application.
//! This crate owns the canonical profile, its storage and the display/edit flows.

pub mod db;
pub mod display;
pub mod edit;
pub mod logging;
pub mod model;
pub mod repo;
pub mod route;
pub mod service;

pub use display::links::{
    contact_action, contact_label, document_download, download_file_name, page_title,
    ContactAction, DocumentKind, Download,
};
pub use display::menu::{section_id_for_label, visible_menu_sections, MenuSection};
pub use display::navigation::SectionNavigator;
pub use display::resume::{resume_data, ResumeContact, ResumeData, ResumeEducation, ResumeSkills};
pub use edit::draft::{DraftError, DraftList, ProfileDraft};
pub use edit::editor::{EditHost, EditOutcome, EditorError, EditorState, ProfileEditor};
pub use edit::validation::{validate_draft, FieldViolation, Rule, ValidationReport};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::profile::{ContactInfo, Education, Experience, Profile};
pub use repo::document_repo::{
    DocumentEvent, DocumentKey, DocumentStore, DocumentSubscription, RepoError, RepoResult,
    SqliteDocumentStore, SubscriberRegistry, DEFAULT_PROFILE_ID, PROFILE_COLLECTION,
};
pub use route::Route;
pub use service::profile_store::{ProfileStore, ProfileStoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
