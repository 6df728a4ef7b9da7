//! Type-safe wrappers around [`CollectionClient`](crate::store::CollectionClient),
//! plus the HTTP client the order flow uses to reach the catalog service.

pub mod catalog;
pub mod collection;
pub mod orders;
pub mod products;
pub mod users;

pub use catalog::*;
pub use collection::*;
pub use orders::*;
pub use products::*;
pub use users::*;
