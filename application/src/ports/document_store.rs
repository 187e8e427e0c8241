//! Document store port
//!
//! A single-slot register per session: at most one reference document,
//! last write wins. Read-many/write-one; no transactional coupling to the
//! discussion — a document replaced or cleared between two steps simply
//! changes what the next grounded step sees.

use roundtable_domain::DocumentContext;

/// Session-keyed storage for the current reference document
pub trait DocumentStore: Send + Sync {
    /// Fetch the session's document, if one is stored
    fn get(&self, session: &str) -> Option<DocumentContext>;

    /// Store the session's document, replacing any previous one
    fn set(&self, session: &str, document: DocumentContext);

    /// Remove the session's document
    fn clear(&self, session: &str);
}
