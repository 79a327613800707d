//! Edit flow state machine.
//!
//! # Responsibility
//! - Snapshot the canonical profile into a draft once the store has loaded.
//! - Run submit/cancel/clear/reset against the profile store.
//!
//! # Invariants
//! - `Uninitialized -> Editing` happens once per visit; an active draft is
//!   never resnapshotted implicitly.
//! - A draft that fails validation never reaches the store.
//! - `saving` is true only while a store call is in flight, and every change
//!   of it is reported to the host.

use crate::edit::draft::ProfileDraft;
use crate::edit::validation::{validate_draft, ValidationReport};
use crate::model::profile::Profile;
use crate::repo::document_repo::DocumentStore;
use crate::route::Route;
use crate::service::profile_store::{ProfileStore, ProfileStoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const NOTICE_INVALID: &str = "Please fill in all required fields correctly";
pub const NOTICE_SAVED: &str = "Profile updated successfully!";
pub const NOTICE_SAVE_FAILED: &str = "Failed to update profile. Please try again.";
pub const NOTICE_CLEARED: &str = "All fields cleared!";
pub const NOTICE_CLEAR_FAILED: &str = "Failed to clear profile. Please try again.";
pub const NOTICE_RESET: &str = "Profile reset to default values!";
pub const NOTICE_RESET_FAILED: &str = "Failed to reset profile. Please try again.";

pub const CONFIRM_CLEAR: &str =
    "Are you sure you want to clear all fields? This will remove all your profile data.";
pub const CONFIRM_RESET: &str = "Are you sure you want to reset all fields to their default values? This will overwrite all your current changes.";

/// UI services the editor drives: transient notices, confirmation prompts and
/// navigation.
pub trait EditHost {
    /// Asks the user to confirm a destructive action.
    fn confirm(&mut self, prompt: &str) -> bool;
    /// Shows a transient notice.
    fn notify(&mut self, notice: &str);
    fn navigate(&mut self, route: Route);
    /// Called with `true` before a store call starts and `false` once it has
    /// finished, whatever its outcome. Controls should stay disabled between
    /// the two.
    fn busy_changed(&mut self, busy: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    /// Waiting for the store to finish loading.
    Uninitialized,
    Editing(ProfileDraft),
}

/// Result of an editor action that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Completed,
    /// The user declined the confirmation prompt.
    Declined,
    /// Validation failed; nothing was written.
    Rejected(ValidationReport),
}

#[derive(Debug)]
pub enum EditorError {
    /// No draft exists yet.
    NotEditing,
    Store(ProfileStoreError),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEditing => write!(f, "editor has no draft"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotEditing => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ProfileStoreError> for EditorError {
    fn from(value: ProfileStoreError) -> Self {
        Self::Store(value)
    }
}

pub type EditResult = Result<EditOutcome, EditorError>;

/// Edit-form controller over a draft of the canonical profile.
#[derive(Debug)]
pub struct ProfileEditor {
    state: EditorState,
    saving: bool,
}

impl Default for ProfileEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileEditor {
    pub fn new() -> Self {
        Self {
            state: EditorState::Uninitialized,
            saving: false,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditorState::Editing(_))
    }

    /// True while a store call started by the editor is in flight.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn draft(&self) -> Option<&ProfileDraft> {
        match &self.state {
            EditorState::Editing(draft) => Some(draft),
            EditorState::Uninitialized => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut ProfileDraft> {
        match &mut self.state {
            EditorState::Editing(draft) => Some(draft),
            EditorState::Uninitialized => None,
        }
    }

    /// Enters `Editing` from the store's current profile once loading is done.
    ///
    /// Returns whether a snapshot was taken. Calling it while already editing
    /// keeps the existing draft.
    pub fn sync_with<S: DocumentStore>(&mut self, store: &ProfileStore<S>) -> bool {
        if self.is_editing() || store.is_loading() {
            return false;
        }
        self.snapshot(store.current_profile());
        true
    }

    /// Validates the draft and saves it as the new profile.
    ///
    /// On success the draft is discarded and the host navigates to the
    /// display route. On a store failure the draft is kept.
    pub fn submit<S: DocumentStore, H: EditHost>(
        &mut self,
        store: &mut ProfileStore<S>,
        host: &mut H,
    ) -> EditResult {
        let draft = self.draft().ok_or(EditorError::NotEditing)?;
        if let Err(report) = validate_draft(draft) {
            info!(
                "event=draft_submit module=edit status=rejected violations={}",
                report.violations.len()
            );
            host.notify(NOTICE_INVALID);
            return Ok(EditOutcome::Rejected(report));
        }

        let profile = draft.to_profile();
        match self.while_saving(host, || store.save(profile)) {
            Ok(()) => {
                info!("event=draft_submit module=edit status=ok");
                host.notify(NOTICE_SAVED);
                self.state = EditorState::Uninitialized;
                host.navigate(Route::Display);
                Ok(EditOutcome::Completed)
            }
            Err(err) => {
                warn!("event=draft_submit module=edit status=error error={err}");
                host.notify(NOTICE_SAVE_FAILED);
                Err(err.into())
            }
        }
    }

    /// Discards the draft without saving and returns to the display route.
    pub fn cancel<H: EditHost>(&mut self, host: &mut H) {
        self.state = EditorState::Uninitialized;
        host.navigate(Route::Display);
    }

    /// After confirmation, saves the empty profile and resnapshots the draft.
    pub fn clear_all<S: DocumentStore, H: EditHost>(
        &mut self,
        store: &mut ProfileStore<S>,
        host: &mut H,
    ) -> EditResult {
        if !self.is_editing() {
            return Err(EditorError::NotEditing);
        }
        if !host.confirm(CONFIRM_CLEAR) {
            return Ok(EditOutcome::Declined);
        }

        match self.while_saving(host, || store.save(Profile::empty())) {
            Ok(()) => {
                info!("event=draft_clear module=edit status=ok");
                host.notify(NOTICE_CLEARED);
                self.snapshot(store.current_profile());
                Ok(EditOutcome::Completed)
            }
            Err(err) => {
                warn!("event=draft_clear module=edit status=error error={err}");
                host.notify(NOTICE_CLEAR_FAILED);
                Err(err.into())
            }
        }
    }

    /// After confirmation, resets the stored profile to the placeholder and
    /// resnapshots the draft.
    pub fn reset_to_default<S: DocumentStore, H: EditHost>(
        &mut self,
        store: &mut ProfileStore<S>,
        host: &mut H,
    ) -> EditResult {
        if !self.is_editing() {
            return Err(EditorError::NotEditing);
        }
        if !host.confirm(CONFIRM_RESET) {
            return Ok(EditOutcome::Declined);
        }

        match self.while_saving(host, || store.reset_to_default()) {
            Ok(()) => {
                info!("event=draft_reset module=edit status=ok");
                host.notify(NOTICE_RESET);
                self.snapshot(store.current_profile());
                Ok(EditOutcome::Completed)
            }
            Err(err) => {
                warn!("event=draft_reset module=edit status=error error={err}");
                host.notify(NOTICE_RESET_FAILED);
                Err(err.into())
            }
        }
    }

    fn snapshot(&mut self, profile: &Profile) {
        self.state = EditorState::Editing(ProfileDraft::from_profile(profile));
    }

    fn while_saving<H: EditHost, T>(&mut self, host: &mut H, op: impl FnOnce() -> T) -> T {
        self.saving = true;
        host.busy_changed(true);
        let result = op();
        self.saving = false;
        host.busy_changed(false);
        result
    }
}
