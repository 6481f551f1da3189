//! AppState - everything the application owns
//!
//! No module-level globals: the store, the session and the storage
//! paths live in one explicit value that the router and the entity
//! services receive.

use crate::router::{self, Resolution};
use crate::session::SessionManager;
use crate::storage::{DataStore, StoragePaths, StoreResult};
use std::path::PathBuf;

/// Application state: storage paths, the loaded store, and the session
pub struct AppState {
    pub paths: StoragePaths,
    pub store: DataStore,
    pub session: SessionManager,
}

impl AppState {
    /// Bring the application up from a data directory.
    ///
    /// Ensures the directory layout, loads (or seeds) the snapshot and
    /// rehydrates the session from its marker.
    pub fn init(base: impl Into<PathBuf>) -> StoreResult<Self> {
        let paths = StoragePaths::new(base);
        paths.ensure_dirs()?;

        let store = DataStore::load(&paths)?;
        let mut session = SessionManager::new(&paths);
        session.restore(&store);

        Ok(Self {
            paths,
            store,
            session,
        })
    }

    /// Resolve a location against the current session (see [`router::resolve`])
    pub fn resolve_route(&self, location: &str) -> Resolution {
        router::resolve(location, &self.session)
    }
}
