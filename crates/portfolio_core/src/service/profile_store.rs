//! Profile store: canonical in-memory copy of the profile document.
//!
//! # Responsibility
//! - Own the cached `Profile` together with its loading/error status.
//! - Keep the cache in sync with the stored document through a live
//!   subscription, bootstrapping the placeholder on first run.
//! - Provide whole-document mutation entry points (`save`, `reset_to_default`).
//!
//! # Invariants
//! - Only this type mutates the cached profile.
//! - Every remote call is attempted once; failures set a generic error message
//!   and are returned to the caller on write paths.
//! - Events are applied in arrival order, so the last effect to land wins.
//! - The placeholder is only written while the document is still absent.

use crate::model::profile::{ContactInfo, Education, Profile};
use crate::repo::document_repo::{
    DocumentEvent, DocumentKey, DocumentStore, DocumentSubscription, RepoError, RepoResult,
};
use log::{error, info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const LOAD_FAILED: &str = "Failed to load user profile";
const INIT_FAILED: &str = "Failed to initialize profile";
const UPDATE_FAILED: &str = "Failed to update profile";
const RESET_FAILED: &str = "Failed to reset profile";
const REFRESH_FAILED: &str = "Failed to refresh profile";

/// Store-boundary error: a generic user-facing message plus its cause.
#[derive(Debug)]
pub struct ProfileStoreError {
    message: &'static str,
    source: RepoError,
}

impl ProfileStoreError {
    fn new(message: &'static str, source: RepoError) -> Self {
        Self { message, source }
    }

    /// Generic message also recorded as the store's `last_error`.
    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn repo_error(&self) -> &RepoError {
        &self.source
    }
}

impl Display for ProfileStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.message, self.source)
    }
}

impl Error for ProfileStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

pub type StoreResult<T> = Result<T, ProfileStoreError>;

/// Owned canonical profile state over a document store.
///
/// Construct once at application start and pass by reference to whichever
/// flow needs it. The subscription closes on `unsubscribe` or drop.
pub struct ProfileStore<S: DocumentStore> {
    store: S,
    key: DocumentKey,
    profile: Profile,
    loading: bool,
    error: Option<String>,
    subscription: Option<DocumentSubscription>,
}

impl<S: DocumentStore> ProfileStore<S> {
    /// Creates a store on the default profile document and subscribes to it.
    pub fn new(store: S) -> Self {
        Self::with_key(store, DocumentKey::default_profile())
    }

    /// Creates a store on an explicit document key and subscribes to it.
    ///
    /// The cache starts as the empty profile with `loading = true` until the
    /// first snapshot is processed.
    pub fn with_key(store: S, key: DocumentKey) -> Self {
        let mut profile_store = Self {
            store,
            key,
            profile: Profile::empty(),
            loading: true,
            error: None,
            subscription: None,
        };
        profile_store.subscribe_to_remote_changes();
        profile_store
    }

    /// Latest known profile.
    pub fn current_profile(&self) -> &Profile {
        &self.profile
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn key(&self) -> &DocumentKey {
        &self.key
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Opens the live subscription if none is active.
    ///
    /// A failure to subscribe is recorded as a load error; it is not returned.
    pub fn subscribe_to_remote_changes(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        match self.store.subscribe(&self.key) {
            Ok(subscription) => {
                info!(
                    "event=profile_subscribe module=service status=ok key={}",
                    self.key
                );
                self.subscription = Some(subscription);
            }
            Err(err) => {
                error!(
                    "event=profile_subscribe module=service status=error key={} error={}",
                    self.key, err
                );
                self.error = Some(LOAD_FAILED.to_string());
                self.loading = false;
            }
        }
    }

    /// Closes the live subscription. Returns whether one was active.
    pub fn unsubscribe(&mut self) -> bool {
        let closed = self.subscription.take().is_some();
        if closed {
            info!(
                "event=profile_unsubscribe module=service status=ok key={}",
                self.key
            );
        }
        closed
    }

    /// Applies all pending subscription events in arrival order.
    ///
    /// Call this on every turn of the owning loop: events queue without bound
    /// until drained. Returns the number of events applied.
    pub fn process_remote_events(&mut self) -> usize {
        let mut applied = 0;
        loop {
            let next = self
                .subscription
                .as_ref()
                .and_then(DocumentSubscription::try_next);
            let Some(event) = next else {
                break;
            };
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    /// Replaces the stored document with `profile` and adopts it locally.
    ///
    /// # Errors
    /// - Returns the write failure after recording `Failed to update profile`.
    pub fn save(&mut self, profile: Profile) -> StoreResult<()> {
        let started_at = Instant::now();
        match self.write(&profile) {
            Ok(()) => {
                self.profile = profile;
                self.error = None;
                info!(
                    "event=profile_save module=service status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=profile_save module=service status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                self.error = Some(UPDATE_FAILED.to_string());
                Err(ProfileStoreError::new(UPDATE_FAILED, err))
            }
        }
    }

    /// Overwrites the stored document with the built-in placeholder.
    ///
    /// `loading` is set for the duration of the call and cleared afterwards.
    pub fn reset_to_default(&mut self) -> StoreResult<()> {
        self.loading = true;
        let placeholder = Profile::placeholder();
        let result = match self.write(&placeholder) {
            Ok(()) => {
                self.profile = placeholder;
                self.error = None;
                info!("event=profile_reset module=service status=ok");
                Ok(())
            }
            Err(err) => {
                error!("event=profile_reset module=service status=error error={err}");
                self.error = Some(RESET_FAILED.to_string());
                Err(ProfileStoreError::new(RESET_FAILED, err))
            }
        };
        self.loading = false;
        result
    }

    /// Re-reads the stored document, bypassing the subscription.
    ///
    /// A missing document triggers the first-run bootstrap. A failed
    /// bootstrap is recorded in `last_error` but not returned.
    pub fn refresh(&mut self) -> StoreResult<()> {
        self.loading = true;
        let result = match self.fetch() {
            Ok(Some(profile)) => {
                self.profile = profile;
                self.error = None;
                info!("event=profile_refresh module=service status=ok found=true");
                Ok(())
            }
            Ok(None) => {
                info!("event=profile_refresh module=service status=ok found=false");
                let _ = self.bootstrap_default();
                Ok(())
            }
            Err(err) => {
                error!("event=profile_refresh module=service status=error error={err}");
                self.error = Some(REFRESH_FAILED.to_string());
                Err(ProfileStoreError::new(REFRESH_FAILED, err))
            }
        };
        self.loading = false;
        result
    }

    pub fn update_name(&mut self, name: impl Into<String>) -> StoreResult<()> {
        let name = name.into();
        self.save_with(|profile| profile.name = name)
    }

    pub fn update_title(&mut self, title: impl Into<String>) -> StoreResult<()> {
        let title = title.into();
        self.save_with(|profile| profile.title = title)
    }

    pub fn update_bio(&mut self, bio: impl Into<String>) -> StoreResult<()> {
        let bio = bio.into();
        self.save_with(|profile| profile.bio = bio)
    }

    pub fn update_skills(&mut self, skills: Vec<String>) -> StoreResult<()> {
        self.save_with(|profile| profile.skills = skills)
    }

    pub fn update_contact_info(&mut self, contact_info: Vec<ContactInfo>) -> StoreResult<()> {
        self.save_with(|profile| profile.contact_info = contact_info)
    }

    pub fn update_projects_link(&mut self, projects_link: impl Into<String>) -> StoreResult<()> {
        let projects_link = projects_link.into();
        self.save_with(|profile| profile.projects_link = Some(projects_link))
    }

    pub fn update_education(&mut self, education: Vec<Education>) -> StoreResult<()> {
        self.save_with(|profile| profile.education = education)
    }

    fn save_with(&mut self, change: impl FnOnce(&mut Profile)) -> StoreResult<()> {
        let mut next = self.profile.clone();
        change(&mut next);
        self.save(next)
    }

    fn apply_event(&mut self, event: DocumentEvent) {
        match event {
            DocumentEvent::Snapshot(Some(body)) => match decode_profile(body) {
                Ok(profile) => {
                    self.profile = profile;
                    self.loading = false;
                    self.error = None;
                    info!("event=profile_snapshot module=service status=ok found=true");
                }
                Err(err) => {
                    warn!("event=profile_snapshot module=service status=error error={err}");
                    self.error = Some(LOAD_FAILED.to_string());
                    self.loading = false;
                }
            },
            // The absence may be stale by the time it is drained; re-check
            // before writing so a document saved in between is never replaced.
            DocumentEvent::Snapshot(None) => match self.fetch() {
                Ok(Some(profile)) => {
                    self.profile = profile;
                    self.loading = false;
                    self.error = None;
                    info!("event=profile_snapshot module=service status=ok found=late");
                }
                Ok(None) => {
                    info!("event=profile_snapshot module=service status=ok found=false");
                    let _ = self.bootstrap_default();
                }
                Err(err) => {
                    warn!("event=profile_snapshot module=service status=error error={err}");
                    self.error = Some(LOAD_FAILED.to_string());
                    self.loading = false;
                }
            },
            DocumentEvent::Error(message) => {
                error!("event=profile_snapshot module=service status=error error={message}");
                self.error = Some(LOAD_FAILED.to_string());
                self.loading = false;
            }
        }
    }

    fn bootstrap_default(&mut self) -> RepoResult<()> {
        let placeholder = Profile::placeholder();
        let result = self.write(&placeholder);
        match &result {
            Ok(()) => {
                self.profile = placeholder;
                self.error = None;
                info!("event=profile_bootstrap module=service status=ok key={}", self.key);
            }
            Err(err) => {
                error!("event=profile_bootstrap module=service status=error error={err}");
                self.error = Some(INIT_FAILED.to_string());
            }
        }
        self.loading = false;
        result
    }

    fn fetch(&self) -> RepoResult<Option<Profile>> {
        self.store
            .get_document(&self.key)?
            .map(decode_profile)
            .transpose()
    }

    fn write(&self, profile: &Profile) -> RepoResult<()> {
        let body = serde_json::to_value(profile)?;
        self.store.set_document(&self.key, &body)
    }
}

fn decode_profile(body: Value) -> RepoResult<Profile> {
    serde_json::from_value(body).map_err(|err| RepoError::InvalidData(format!("profile: {err}")))
}
