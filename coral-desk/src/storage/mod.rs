//! Durable storage
//!
//! One whole-database JSON snapshot plus two single-value marker files,
//! all under an application data directory. Every mutation rewrites the
//! snapshot in full; there is no incremental persistence and no merge.

pub mod marker;
mod paths;
mod store;

pub use paths::StoragePaths;
pub use store::{DataStore, Database, StoreError, StoreResult};
