//! Generic in-process document collection.
//!
//! This module provides the building blocks shared by every service's
//! persistence layer:
//!
//! - [`Document`] - Trait that record types implement to be stored in a collection
//! - [`CollectionActor`] - The task that owns one collection of records
//! - [`CollectionClient`] - Handle for sending requests to a collection
//! - [`StoreError`] - Errors surfaced by the collection channel

pub mod core;

pub use self::core::*;
