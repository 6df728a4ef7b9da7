#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Microshop
//!
//! > **A teaching-scale microservices portfolio in Rust.**
//!
//! Three nearly identical HTTP services (users, products, orders) perform
//! simple CRUD against in-process document collections, instrumented with
//! request-count/latency metrics, plus a storefront client that fans out
//! three fetches and dumps JSON.
//!
//! The one piece with real design tension is the **order flow**: pricing an
//! order means fetching the full catalog from another service, filtering it
//! to the requested ids, summing prices, and persisting the result in a
//! single write. Everything else is a thin I/O wrapper around a collection.
//!
//! ## Concurrency Model
//!
//! Each collection runs in its own Tokio task and processes messages
//! sequentially, so stored records need no locks. HTTP handlers suspend
//! only at I/O boundaries (a collection round-trip, the outbound catalog
//! fetch). The only other shared mutable state is the per-process metrics
//! registry, incremented behind async mutexes.
//!
//! Two concurrent order requests may price against the same catalog
//! snapshot; nothing reserves stock, and no ordering between them is
//! guaranteed.
//!
//! ## Module Tour
//!
//! ### 1. The Store ([`store`])
//! The generic document collection: a [`CollectionActor`](store::CollectionActor)
//! owning one map of generated-id → record, written once and reused for
//! users, products, and orders.
//!
//! ### 2. The Records ([`model`], [`collections`])
//! Pure data structures and the per-resource wiring that gives each one a
//! prefixed id sequence and a running collection.
//!
//! ### 3. The Interface ([`clients`])
//! Type-safe wrappers over the generic collection client, plus the
//! [`CatalogClient`](clients::CatalogClient) the order flow uses to reach
//! the catalog service over HTTP.
//!
//! ### 4. The Surface ([`services`], [`metrics`], [`error`], [`runtime`])
//! One axum router per service with liveness, `/metrics`, and the `/api/*`
//! routes; the metrics middleware; the generic-500 error boundary; and the
//! serve loop with graceful shutdown.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run --bin user-service
//! RUST_LOG=info cargo run --bin product-service
//! PRODUCT_SERVICE_URL=http://localhost:8081 RUST_LOG=info cargo run --bin order-service
//!
//! # Then dump all three collections:
//! cargo run --bin storefront
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod collections;
pub mod config;
pub mod error;
pub mod metrics;
pub mod model;
pub mod runtime;
pub mod services;
pub mod store;
