//! Department Model

use serde::{Deserialize, Serialize};

/// Department entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCreate {
    pub name: String,
    pub description: String,
}

/// Update department payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}
