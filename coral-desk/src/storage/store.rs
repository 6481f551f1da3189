//! DataStore - whole-database snapshot persistence
//!
//! The entire database is one serde aggregate written to a single JSON
//! file. `load` fails soft: an absent or unreadable snapshot is replaced
//! by the fixed seed and persisted immediately. `save` overwrites the
//! slot unconditionally and is called synchronously after every
//! mutating service operation.

use super::paths::StoragePaths;
use shared::error::{AppError, ErrorCode};
use shared::models::{Account, Department, Employee, Request, Role};
use shared::util::entity_id;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::with_message(ErrorCode::StorageError, err.to_string())
    }
}

/// The aggregate database: four entity collections, one source of truth
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Database {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub requests: Vec<Request>,
}

impl Database {
    /// Fixed first-run dataset: one admin and one regular account (both
    /// pre-verified) and two departments.
    pub fn seed() -> Self {
        Self {
            accounts: vec![
                Account {
                    id: entity_id(),
                    first_name: "Admin".to_string(),
                    last_name: "User".to_string(),
                    email: "admin@example.com".to_string(),
                    password: "Password123!".to_string(),
                    role: Role::Admin,
                    verified: true,
                },
                Account {
                    id: entity_id(),
                    first_name: "Regular".to_string(),
                    last_name: "User".to_string(),
                    email: "user@example.com".to_string(),
                    password: "Password123!".to_string(),
                    role: Role::User,
                    verified: true,
                },
            ],
            departments: vec![
                Department {
                    id: entity_id(),
                    name: "Engineering".to_string(),
                    description: "Software development and IT".to_string(),
                },
                Department {
                    id: entity_id(),
                    name: "Human Resources".to_string(),
                    description: "HR and employee management".to_string(),
                },
            ],
            employees: Vec::new(),
            requests: Vec::new(),
        }
    }
}

/// Snapshot store manager
pub struct DataStore {
    /// Snapshot file path: {base}/data/store.json
    file_path: PathBuf,
    /// The in-memory database
    pub db: Database,
}

impl DataStore {
    /// Load the snapshot, seeding on absence or corruption.
    ///
    /// A snapshot that exists but cannot be read or parsed is treated
    /// the same as a missing one: the seed replaces it and is persisted
    /// right away.
    pub fn load(paths: &StoragePaths) -> StoreResult<Self> {
        let file_path = paths.store_file();

        if file_path.exists() {
            let parsed = std::fs::read_to_string(&file_path)
                .map_err(StoreError::from)
                .and_then(|content| Ok(serde_json::from_str::<Database>(&content)?));
            match parsed {
                Ok(db) => {
                    tracing::debug!(path = %file_path.display(), "Snapshot loaded");
                    return Ok(Self { file_path, db });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Snapshot unreadable, resetting to seed");
                }
            }
        }

        let store = Self {
            file_path,
            db: Database::seed(),
        };
        store.save()?;
        tracing::info!("Seed snapshot installed");
        Ok(store)
    }

    /// Serialize the entire database and overwrite the snapshot.
    pub fn save(&self) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(&self.db)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(
            accounts = self.db.accounts.len(),
            departments = self.db.departments.len(),
            employees = self.db.employees.len(),
            requests = self.db.requests.len(),
            "Snapshot saved"
        );
        Ok(())
    }
}
