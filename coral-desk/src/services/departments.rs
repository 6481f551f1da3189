//! Departments Service
//!
//! Plain CRUD. No uniqueness constraints; employees reference
//! departments weakly, so deletion performs no integrity check.

use crate::state::AppState;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Department, DepartmentCreate, DepartmentUpdate};
use shared::util::entity_id;

/// All departments
pub fn list(state: &AppState) -> Vec<Department> {
    state.store.db.departments.clone()
}

pub fn create(state: &mut AppState, data: DepartmentCreate) -> AppResult<Department> {
    let department = Department {
        id: entity_id(),
        name: data.name,
        description: data.description,
    };
    state.store.db.departments.push(department.clone());
    state.store.save()?;
    tracing::info!(name = %department.name, "Department created");
    Ok(department)
}

pub fn update(state: &mut AppState, id: i64, data: DepartmentUpdate) -> AppResult<Department> {
    let department = state
        .store
        .db
        .departments
        .iter_mut()
        .find(|dept| dept.id == id)
        .ok_or_else(|| {
            AppError::not_found(ErrorCode::DepartmentNotFound, format!("Department {id}"))
        })?;

    if let Some(name) = data.name {
        department.name = name;
    }
    if let Some(description) = data.description {
        department.description = description;
    }

    let updated = department.clone();
    state.store.save()?;
    tracing::info!(name = %updated.name, "Department updated");
    Ok(updated)
}

pub fn delete(state: &mut AppState, id: i64) -> AppResult<()> {
    if !state.store.db.departments.iter().any(|dept| dept.id == id) {
        return Err(AppError::not_found(
            ErrorCode::DepartmentNotFound,
            format!("Department {id}"),
        ));
    }

    state.store.db.departments.retain(|dept| dept.id != id);
    state.store.save()?;
    tracing::info!(id, "Department deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    fn setup() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::init(dir.path()).unwrap();
        (dir, state)
    }

    #[test]
    fn test_crud_net_effect() {
        let (_dir, mut state) = setup();
        assert_eq!(list(&state).len(), 2); // seed

        let created = create(
            &mut state,
            DepartmentCreate {
                name: "Facilities".into(),
                description: "Buildings and maintenance".into(),
            },
        )
        .unwrap();
        assert_eq!(list(&state).len(), 3);

        update(
            &mut state,
            created.id,
            DepartmentUpdate {
                description: Some("Buildings, grounds and maintenance".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let listed = list(&state);
        let found = listed.iter().find(|d| d.id == created.id).unwrap();
        assert_eq!(found.name, "Facilities");
        assert_eq!(found.description, "Buildings, grounds and maintenance");

        delete(&mut state, created.id).unwrap();
        assert_eq!(list(&state).len(), 2);
        assert!(!list(&state).iter().any(|d| d.id == created.id));
    }

    #[test]
    fn test_update_not_found() {
        let (_dir, mut state) = setup();
        let err = update(&mut state, 424242, DepartmentUpdate::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::DepartmentNotFound);
    }

    #[test]
    fn test_delete_not_found() {
        let (_dir, mut state) = setup();
        let err = delete(&mut state, 424242).unwrap_err();
        assert_eq!(err.code, ErrorCode::DepartmentNotFound);
    }
}
