//! Test doubles shared by integration tests.

#![allow(dead_code)]

use portfolio_core::{
    DocumentKey, DocumentStore, DocumentSubscription, EditHost, RepoError, RepoResult, Route,
    SqliteDocumentStore,
};
use serde_json::Value;
use std::cell::Cell;

/// SQLite store wrapper that counts writes and can be told to fail.
pub struct FlakyStore<'conn> {
    inner: SqliteDocumentStore<'conn>,
    pub writes: Cell<usize>,
    pub fail_writes: Cell<bool>,
    pub fail_reads: Cell<bool>,
    pub fail_subscribe: Cell<bool>,
}

impl<'conn> FlakyStore<'conn> {
    pub fn new(conn: &'conn rusqlite::Connection) -> Self {
        Self {
            inner: SqliteDocumentStore::new(conn),
            writes: Cell::new(0),
            fail_writes: Cell::new(false),
            fail_reads: Cell::new(false),
            fail_subscribe: Cell::new(false),
        }
    }

    pub fn inner(&self) -> &SqliteDocumentStore<'conn> {
        &self.inner
    }
}

impl DocumentStore for FlakyStore<'_> {
    fn get_document(&self, key: &DocumentKey) -> RepoResult<Option<Value>> {
        if self.fail_reads.get() {
            return Err(RepoError::Unavailable("read refused".to_string()));
        }
        self.inner.get_document(key)
    }

    fn set_document(&self, key: &DocumentKey, body: &Value) -> RepoResult<()> {
        if self.fail_writes.get() {
            return Err(RepoError::Unavailable("write refused".to_string()));
        }
        self.writes.set(self.writes.get() + 1);
        self.inner.set_document(key, body)
    }

    fn subscribe(&self, key: &DocumentKey) -> RepoResult<DocumentSubscription> {
        if self.fail_subscribe.get() {
            return Err(RepoError::Unavailable("subscribe refused".to_string()));
        }
        self.inner.subscribe(key)
    }
}

/// Host that records notices, navigation and busy transitions and answers
/// prompts with a fixed reply.
pub struct RecordingHost {
    pub confirm_reply: bool,
    pub prompts: Vec<String>,
    pub notices: Vec<String>,
    pub routes: Vec<Route>,
    pub busy: Vec<bool>,
}

impl RecordingHost {
    pub fn confirming(confirm_reply: bool) -> Self {
        Self {
            confirm_reply,
            prompts: Vec::new(),
            notices: Vec::new(),
            routes: Vec::new(),
            busy: Vec::new(),
        }
    }

    pub fn last_notice(&self) -> Option<&str> {
        self.notices.last().map(String::as_str)
    }
}

impl EditHost for RecordingHost {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.confirm_reply
    }

    fn notify(&mut self, notice: &str) {
        self.notices.push(notice.to_string());
    }

    fn navigate(&mut self, route: Route) {
        self.routes.push(route);
    }

    fn busy_changed(&mut self, busy: bool) {
        self.busy.push(busy);
    }
}
