//! Shared types for the Coral Desk workspace.
//!
//! Data models and the unified error system used by the application
//! core. Models are plain serde records; the snapshot format is JSON
//! with camelCase field names.

pub mod error;
pub mod models;
pub mod util;
