//! StoragePaths - data directory path management
//!
//! Central place for all paths under the application data directory.
//!
//! ## Directory layout
//!
//! ```text
//! {base}/
//! ├── auth/
//! │   ├── session.json               # session marker (signed-in email)
//! │   └── pending_verification.json  # email awaiting verification
//! │
//! └── data/
//!     └── store.json                 # whole-database snapshot
//! ```

use std::path::{Path, PathBuf};

/// Data directory path manager
///
/// Provides unified access to every file the application persists.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    /// Data directory root
    base: PathBuf,
}

impl StoragePaths {
    /// Create new StoragePaths rooted at `base`
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Data directory root
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Auth directory: {base}/auth/
    pub fn auth_dir(&self) -> PathBuf {
        self.base.join("auth")
    }

    /// Data directory: {base}/data/
    pub fn data_dir(&self) -> PathBuf {
        self.base.join("data")
    }

    /// Snapshot file: {base}/data/store.json
    pub fn store_file(&self) -> PathBuf {
        self.data_dir().join("store.json")
    }

    /// Session marker: {base}/auth/session.json
    ///
    /// Holds the signed-in account's email as a JSON string.
    pub fn session_file(&self) -> PathBuf {
        self.auth_dir().join("session.json")
    }

    /// Pending-verification marker: {base}/auth/pending_verification.json
    ///
    /// Set at registration, cleared at verification.
    pub fn pending_verification_file(&self) -> PathBuf {
        self.auth_dir().join("pending_verification.json")
    }

    /// Ensure the auth and data directories exist
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.auth_dir())?;
        std::fs::create_dir_all(self.data_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let paths = StoragePaths::new("/data/coral-desk");

        assert_eq!(paths.base(), Path::new("/data/coral-desk"));
        assert_eq!(paths.auth_dir(), PathBuf::from("/data/coral-desk/auth"));
        assert_eq!(paths.data_dir(), PathBuf::from("/data/coral-desk/data"));
        assert_eq!(
            paths.store_file(),
            PathBuf::from("/data/coral-desk/data/store.json")
        );
        assert_eq!(
            paths.session_file(),
            PathBuf::from("/data/coral-desk/auth/session.json")
        );
        assert_eq!(
            paths.pending_verification_file(),
            PathBuf::from("/data/coral-desk/auth/pending_verification.json")
        );
    }

    #[test]
    fn test_ensure_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let paths = StoragePaths::new(dir.path());
        paths.ensure_dirs().unwrap();
        assert!(paths.auth_dir().is_dir());
        assert!(paths.data_dir().is_dir());
    }
}
