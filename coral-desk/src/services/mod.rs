//! Entity services
//!
//! CRUD over the store's collections, one module per entity. Uniform
//! shape: `list`, `create`, `update`, `delete`, plus entity-specific
//! operations. Every mutation persists the whole snapshot before
//! returning; every validation failure returns with the store
//! untouched. Role enforcement happens at the routing layer, not here.

pub mod accounts;
pub mod departments;
pub mod employees;
pub mod requests;
