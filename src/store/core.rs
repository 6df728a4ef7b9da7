//! # Document Collection Core
//!
//! This module defines the generic building blocks for the document store.
//!
//! ## Key Types
//!
//! - [`Document`]: The trait that all stored record types must implement.
//! - [`CollectionActor`]: The generic actor that owns one collection of records.
//! - [`CollectionClient`]: The generic client for talking to a collection.
//! - [`StoreError`]: Common errors (e.g., CollectionClosed).

use std::collections::HashMap;
use std::fmt::Debug;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record type must implement to live in a [`CollectionActor`].
///
/// # Architecture Note
/// By defining a contract (`Document`) that all our record types (User,
/// Product, Order) satisfy, we write the collection loop *once* and reuse it
/// for every service. The associated `Create` type keeps the payloads honest:
/// a users collection cannot be handed a `ProductCreate`.
///
/// The store is schema-loose on purpose. Creation is unvalidated: the store
/// assigns an identifier, attaches it to whatever payload arrived, and
/// persists the result as-is.
pub trait Document: Clone + Send + Sync + 'static {
    /// The data required to create a new record (everything but the id).
    type Create: Send + Sync + Debug;

    /// Construct the full record from the generated id and the payload.
    fn from_create(id: String, params: Self::Create) -> Self;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur on the collection channel itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("collection closed")]
    CollectionClosed,
    #[error("collection dropped response channel")]
    ResponseDropped,
}

/// Type alias for the one-shot response channel used by collections.
pub type Response<T> = oneshot::Sender<T>;

/// Internal message type sent to a collection to request operations.
///
/// The variants map to the two operations every store in the system exposes
/// (`Insert` backing POST, `List` backing GET) plus `Get`, which retrieval by
/// id needs nothing more than. There is no update or delete: no flow ever
/// mutates or removes a record once written.
#[derive(Debug)]
pub enum CollectionRequest<T: Document> {
    Insert {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: String,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC COLLECTION ACTOR
// =============================================================================

/// The task that owns one collection of records.
///
/// # Concurrency Model
/// Each `CollectionActor` processes its messages *sequentially* in a loop, so
/// the record map needs no `Mutex`. Requests from concurrent HTTP handlers
/// queue up on the channel and are applied one at a time.
///
/// Insertion order is retained alongside the map so `List` returns records in
/// store-native order, the order they were written.
pub struct CollectionActor<T: Document> {
    receiver: mpsc::Receiver<CollectionRequest<T>>,
    records: HashMap<String, T>,
    inserted: Vec<String>,
    next_id_fn: Box<dyn Fn() -> String + Send + Sync>,
}

impl<T: Document> CollectionActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> String + Send + Sync + 'static,
    ) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: HashMap::new(),
            inserted: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = CollectionClient::new(sender);
        (actor, client)
    }

    /// Runs the collection's event loop, processing messages until the
    /// channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "microshop::model::order::Order")
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::Insert { params, respond_to } => {
                    debug!(record_type, ?params, "Insert");
                    let id = (self.next_id_fn)();
                    let record = T::from_create(id.clone(), params);
                    self.records.insert(id.clone(), record.clone());
                    self.inserted.push(id.clone());
                    info!(record_type, %id, size = self.records.len(), "Inserted");
                    let _ = respond_to.send(record);
                }
                CollectionRequest::Get { id, respond_to } => {
                    let record = self.records.get(&id).cloned();
                    debug!(record_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(record);
                }
                CollectionRequest::List { respond_to } => {
                    let records = self
                        .inserted
                        .iter()
                        .filter_map(|id| self.records.get(id).cloned())
                        .collect::<Vec<_>>();
                    debug!(record_type, size = records.len(), "List");
                    let _ = respond_to.send(records);
                }
            }
        }

        info!(record_type, size = self.records.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe handle for a [`CollectionActor`].
#[derive(Clone)]
pub struct CollectionClient<T: Document> {
    sender: mpsc::Sender<CollectionRequest<T>>,
}

impl<T: Document> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn insert(&self, params: T::Create) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Insert { params, respond_to })
            .await
            .map_err(|_| StoreError::CollectionClosed)?;
        response.await.map_err(|_| StoreError::ResponseDropped)
    }

    pub async fn get(&self, id: String) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::CollectionClosed)?;
        response.await.map_err(|_| StoreError::ResponseDropped)
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::List { respond_to })
            .await
            .map_err(|_| StoreError::CollectionClosed)?;
        response.await.map_err(|_| StoreError::ResponseDropped)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: String,
        body: String,
    }

    #[derive(Debug)]
    struct NoteCreate {
        body: String,
    }

    impl Document for Note {
        type Create = NoteCreate;

        fn from_create(id: String, params: NoteCreate) -> Self {
            Self {
                id,
                body: params.body,
            }
        }
    }

    fn spawn_notes() -> CollectionClient<Note> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!("note_{}", id)
        };
        let (actor, client) = CollectionActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn insert_assigns_generated_ids() {
        let client = spawn_notes();

        let first = client
            .insert(NoteCreate { body: "one".into() })
            .await
            .unwrap();
        let second = client
            .insert(NoteCreate { body: "two".into() })
            .await
            .unwrap();

        assert_eq!(first.id, "note_1");
        assert_eq!(second.id, "note_2");
        assert_eq!(first.body, "one");
    }

    #[tokio::test]
    async fn get_returns_stored_record_or_none() {
        let client = spawn_notes();

        let note = client
            .insert(NoteCreate { body: "kept".into() })
            .await
            .unwrap();

        let found = client.get(note.id.clone()).await.unwrap();
        assert_eq!(found, Some(note));

        let missing = client.get("note_99".to_string()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let client = spawn_notes();

        for body in ["a", "b", "c"] {
            client
                .insert(NoteCreate { body: body.into() })
                .await
                .unwrap();
        }

        let all = client.list().await.unwrap();
        let bodies: Vec<_> = all.iter().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn client_errors_when_collection_is_gone() {
        let (actor, client) = CollectionActor::<Note>::new(1, || "note_1".to_string());
        drop(actor);

        let err = client.list().await.unwrap_err();
        assert_eq!(err, StoreError::CollectionClosed);
    }
}
