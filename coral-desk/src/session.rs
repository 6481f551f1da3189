//! Identity & session
//!
//! At most one authenticated account at a time. A durable marker (the
//! signed-in email) lets a restarted process pick the session back up;
//! it is a remember-me convenience, not a security mechanism.

use crate::storage::{DataStore, StoragePaths, marker};
use shared::error::{AppError, AppResult};
use shared::models::Account;
use std::path::PathBuf;

/// Session manager: current identity plus its durable marker
pub struct SessionManager {
    /// Marker file path: {base}/auth/session.json
    marker_path: PathBuf,
    /// The authenticated account, if any
    current: Option<Account>,
}

impl SessionManager {
    /// Create a signed-out SessionManager
    pub fn new(paths: &StoragePaths) -> Self {
        Self {
            marker_path: paths.session_file(),
            current: None,
        }
    }

    /// Rehydrate the session from the durable marker.
    ///
    /// The identity is restored only if the marker resolves to an
    /// account that still exists and is verified; otherwise the session
    /// stays signed out. The marker is left in place either way.
    pub fn restore(&mut self, store: &DataStore) {
        let email = match marker::read(&self.marker_path) {
            Ok(Some(email)) => email,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, "Session marker unreadable, staying signed out");
                return;
            }
        };

        match store
            .db
            .accounts
            .iter()
            .find(|acc| acc.email == email && acc.verified)
        {
            Some(account) => {
                tracing::info!(email = %account.email, "Session restored");
                self.current = Some(account.clone());
            }
            None => {
                tracing::debug!(email = %email, "Stale session marker, staying signed out");
            }
        }
    }

    /// Authenticate against the store.
    ///
    /// Succeeds only on an exact email + password match against a
    /// verified account. Wrong credentials and an unverified account
    /// produce the same generic error; the store is never mutated by a
    /// login attempt.
    pub fn login(&mut self, store: &DataStore, email: &str, password: &str) -> AppResult<Account> {
        let account = store
            .db
            .accounts
            .iter()
            .find(|acc| acc.email == email && acc.password == password && acc.verified)
            .cloned()
            .ok_or_else(AppError::invalid_credentials)?;

        marker::write(&self.marker_path, &account.email)?;
        tracing::info!(email = %account.email, role = ?account.role, "Signed in");
        self.current = Some(account.clone());
        Ok(account)
    }

    /// Clear the in-memory identity and the durable marker.
    pub fn logout(&mut self) -> AppResult<()> {
        marker::clear(&self.marker_path)?;
        if let Some(account) = self.current.take() {
            tracing::info!(email = %account.email, "Signed out");
        }
        Ok(())
    }

    /// The authenticated account, if any
    pub fn current(&self) -> Option<&Account> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(|acc| acc.role.is_admin())
    }

    /// Keep the in-memory identity in step after its account was edited.
    ///
    /// The durable marker is not rewritten: it keeps the email the user
    /// signed in with, so an email edit does not survive a restart.
    pub(crate) fn sync_identity(&mut self, account: Account) {
        if self
            .current
            .as_ref()
            .is_some_and(|cur| cur.id == account.id)
        {
            self.current = Some(account);
        }
    }
}
