//! In-memory document store
//!
//! A single-slot register per session key, last write wins. Ephemeral by
//! design: document state does not survive the process.

use roundtable_application::DocumentStore;
use roundtable_domain::DocumentContext;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Process-local session-keyed document storage
#[derive(Default)]
pub struct InMemoryDocumentStore {
    slots: RwLock<HashMap<String, DocumentContext>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn get(&self, session: &str) -> Option<DocumentContext> {
        self.slots
            .read()
            .unwrap()
            .get(session)
            .cloned()
    }

    fn set(&self, session: &str, document: DocumentContext) {
        debug!(session, bytes = document.text.len(), "Storing document");
        self.slots
            .write()
            .unwrap()
            .insert(session.to_string(), document);
    }

    fn clear(&self, session: &str) {
        debug!(session, "Clearing document");
        self.slots
            .write()
            .unwrap()
            .remove(session);
    }
}
