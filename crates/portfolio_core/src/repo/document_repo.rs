//! Document store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide point lookup, whole-document replace and live subscriptions over
//!   JSON documents addressed by `(collection, doc_id)`.
//! - Deliver subscription events over explicit channels.
//!
//! # Invariants
//! - Writes always replace the full document body.
//! - Every successful write is published to all live subscribers of that key.
//! - A new subscription receives the current snapshot as its first event.
//! - Dropping a `DocumentSubscription` deregisters it.

use crate::db::DbError;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::{Rc, Weak};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Collection holding profile documents.
pub const PROFILE_COLLECTION: &str = "userProfiles";
/// Document id of the single-tenant profile.
pub const DEFAULT_PROFILE_ID: &str = "default-user";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for document persistence and subscriptions.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Stored or outgoing document body is not valid for its schema.
    InvalidData(String),
    /// Backend refused or could not complete the call.
    Unavailable(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid document data: {message}"),
            Self::Unavailable(message) => write!(f, "document store unavailable: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidData(value.to_string())
    }
}

/// Logical address of one document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentKey {
    pub collection: String,
    pub doc_id: String,
}

impl DocumentKey {
    pub fn new(collection: impl Into<String>, doc_id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            doc_id: doc_id.into(),
        }
    }

    /// Address of the single profile document (`userProfiles/default-user`).
    pub fn default_profile() -> Self {
        Self::new(PROFILE_COLLECTION, DEFAULT_PROFILE_ID)
    }
}

impl Display for DocumentKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.collection, self.doc_id)
    }
}

/// One delivery on a live subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    /// Current document body, or `None` when the document does not exist.
    Snapshot(Option<Value>),
    /// The backend failed to produce a snapshot.
    Error(String),
}

/// Repository interface for whole-document storage.
pub trait DocumentStore {
    /// Point lookup. Returns `None` when the document does not exist.
    fn get_document(&self, key: &DocumentKey) -> RepoResult<Option<Value>>;
    /// Replaces the full document body, creating it when missing.
    fn set_document(&self, key: &DocumentKey, body: &Value) -> RepoResult<()>;
    /// Opens a live subscription on one document.
    fn subscribe(&self, key: &DocumentKey) -> RepoResult<DocumentSubscription>;
}

impl<T: DocumentStore + ?Sized> DocumentStore for &T {
    fn get_document(&self, key: &DocumentKey) -> RepoResult<Option<Value>> {
        (**self).get_document(key)
    }

    fn set_document(&self, key: &DocumentKey, body: &Value) -> RepoResult<()> {
        (**self).set_document(key, body)
    }

    fn subscribe(&self, key: &DocumentKey) -> RepoResult<DocumentSubscription> {
        (**self).subscribe(key)
    }
}

struct Subscriber {
    key: DocumentKey,
    sender: Sender<DocumentEvent>,
}

#[derive(Default)]
struct RegistryState {
    next_id: u64,
    subscribers: BTreeMap<u64, Subscriber>,
}

/// Fan-out of document events to live subscriptions.
///
/// Shared by store implementations; single-threaded by construction.
#[derive(Default)]
pub struct SubscriberRegistry {
    state: Rc<RefCell<RegistryState>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber and queues `initial` as its first event.
    pub fn register(&self, key: &DocumentKey, initial: DocumentEvent) -> DocumentSubscription {
        let (sender, receiver) = mpsc::channel();
        // Receiver is alive here, so the initial send cannot fail.
        let _ = sender.send(initial);

        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.subscribers.insert(
            id,
            Subscriber {
                key: key.clone(),
                sender,
            },
        );
        debug!("event=doc_subscribe module=repo status=ok key={key} subscription_id={id}");

        DocumentSubscription {
            id,
            key: key.clone(),
            receiver,
            registry: Rc::downgrade(&self.state),
        }
    }

    /// Sends `event` to every subscriber of `key`.
    ///
    /// Subscribers whose receiving side is gone are pruned. Returns the number
    /// of subscribers reached.
    pub fn publish(&self, key: &DocumentKey, event: &DocumentEvent) -> usize {
        let mut state = self.state.borrow_mut();
        let mut delivered = 0;
        let mut stale = Vec::new();
        for (id, subscriber) in state.subscribers.iter() {
            if &subscriber.key != key {
                continue;
            }
            if subscriber.sender.send(event.clone()).is_ok() {
                delivered += 1;
            } else {
                stale.push(*id);
            }
        }
        for id in stale {
            state.subscribers.remove(&id);
        }
        delivered
    }

    /// Returns the number of live subscriptions across all keys.
    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }
}

/// Receiving end of a live document subscription.
///
/// Events are queued until the owner drains them. The queue is unbounded:
/// every write to the key adds one event, so an owner that keeps the handle
/// must drain it regularly (for profiles, `ProfileStore::process_remote_events`
/// on each turn) or drop it. Dropping the handle unsubscribes.
pub struct DocumentSubscription {
    id: u64,
    key: DocumentKey,
    receiver: Receiver<DocumentEvent>,
    registry: Weak<RefCell<RegistryState>>,
}

impl DocumentSubscription {
    pub fn key(&self) -> &DocumentKey {
        &self.key
    }

    /// Returns the next pending event without blocking.
    pub fn try_next(&self) -> Option<DocumentEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

impl std::fmt::Debug for DocumentSubscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentSubscription")
            .field("id", &self.id)
            .field("key", &self.key)
            .finish()
    }
}

impl Drop for DocumentSubscription {
    fn drop(&mut self) {
        if let Some(state) = self.registry.upgrade() {
            // Drop may run while a publish holds the borrow; the entry is
            // pruned on the next publish in that case.
            if let Ok(mut state) = state.try_borrow_mut() {
                state.subscribers.remove(&self.id);
            }
        }
        debug!(
            "event=doc_unsubscribe module=repo status=ok key={} subscription_id={}",
            self.key, self.id
        );
    }
}

/// SQLite-backed document store.
pub struct SqliteDocumentStore<'conn> {
    conn: &'conn Connection,
    subscribers: SubscriberRegistry,
}

impl<'conn> SqliteDocumentStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            subscribers: SubscriberRegistry::new(),
        }
    }

    /// Returns the number of live subscriptions on this store.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.subscriber_count()
    }
}

impl DocumentStore for SqliteDocumentStore<'_> {
    fn get_document(&self, key: &DocumentKey) -> RepoResult<Option<Value>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM documents WHERE collection = ?1 AND doc_id = ?2;",
                params![key.collection.as_str(), key.doc_id.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        match body {
            Some(text) => {
                let value = serde_json::from_str(&text).map_err(|err| {
                    RepoError::InvalidData(format!("documents.body for `{key}`: {err}"))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn set_document(&self, key: &DocumentKey, body: &Value) -> RepoResult<()> {
        if !body.is_object() {
            return Err(RepoError::InvalidData(format!(
                "document `{key}` body must be a JSON object"
            )));
        }

        self.conn.execute(
            "INSERT INTO documents (collection, doc_id, body)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (collection, doc_id) DO UPDATE SET
                body = excluded.body,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                key.collection.as_str(),
                key.doc_id.as_str(),
                body.to_string()
            ],
        )?;

        let delivered = self
            .subscribers
            .publish(key, &DocumentEvent::Snapshot(Some(body.clone())));
        debug!("event=doc_write module=repo status=ok key={key} delivered={delivered}");
        Ok(())
    }

    fn subscribe(&self, key: &DocumentKey) -> RepoResult<DocumentSubscription> {
        let initial = match self.get_document(key) {
            Ok(snapshot) => DocumentEvent::Snapshot(snapshot),
            Err(err) => {
                warn!("event=doc_subscribe module=repo status=error key={key} error={err}");
                DocumentEvent::Error(err.to_string())
            }
        };
        Ok(self.subscribers.register(key, initial))
    }
}

#[cfg(test)]
mod tests {
    use super::{DocumentEvent, DocumentKey, DocumentStore, SqliteDocumentStore};
    use crate::db::open_db_in_memory;
    use serde_json::json;

    #[test]
    fn default_profile_key_displays_as_path() {
        assert_eq!(
            DocumentKey::default_profile().to_string(),
            "userProfiles/default-user"
        );
    }

    #[test]
    fn subscription_starts_with_current_snapshot() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteDocumentStore::new(&conn);
        let key = DocumentKey::new("things", "a");

        let missing = store.subscribe(&key).unwrap();
        assert_eq!(missing.try_next(), Some(DocumentEvent::Snapshot(None)));
        assert_eq!(missing.try_next(), None);

        store.set_document(&key, &json!({"n": 1})).unwrap();
        assert_eq!(
            missing.try_next(),
            Some(DocumentEvent::Snapshot(Some(json!({"n": 1}))))
        );

        let present = store.subscribe(&key).unwrap();
        assert_eq!(
            present.try_next(),
            Some(DocumentEvent::Snapshot(Some(json!({"n": 1}))))
        );
    }

    #[test]
    fn writes_only_reach_subscribers_of_the_same_key() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteDocumentStore::new(&conn);
        let watched = DocumentKey::new("things", "a");
        let other = DocumentKey::new("things", "b");

        let subscription = store.subscribe(&watched).unwrap();
        let _ = subscription.try_next();
        store.set_document(&other, &json!({})).unwrap();
        assert_eq!(subscription.try_next(), None);
    }

    #[test]
    fn dropping_subscription_deregisters_it() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteDocumentStore::new(&conn);
        let key = DocumentKey::default_profile();

        let subscription = store.subscribe(&key).unwrap();
        assert_eq!(store.subscriber_count(), 1);
        drop(subscription);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn undrained_events_queue_in_write_order() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteDocumentStore::new(&conn);
        let key = DocumentKey::new("things", "a");
        let subscription = store.subscribe(&key).unwrap();

        for n in 0..3 {
            store.set_document(&key, &json!({ "n": n })).unwrap();
        }

        assert_eq!(subscription.try_next(), Some(DocumentEvent::Snapshot(None)));
        for n in 0..3 {
            assert_eq!(
                subscription.try_next(),
                Some(DocumentEvent::Snapshot(Some(json!({ "n": n }))))
            );
        }
        assert_eq!(subscription.try_next(), None);
    }

    #[test]
    fn non_object_body_is_rejected() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteDocumentStore::new(&conn);
        let err = store
            .set_document(&DocumentKey::default_profile(), &json!([1, 2]))
            .unwrap_err();
        assert!(err.to_string().contains("JSON object"));
    }
}
