//! Employees Service
//!
//! CRUD over employee records. `user_id` and `dept_id` are accepted
//! without referential checks; dangling references resolve to a
//! placeholder at view time.

use crate::state::AppState;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::util::entity_id;

/// All employees
pub fn list(state: &AppState) -> Vec<Employee> {
    state.store.db.employees.clone()
}

pub fn create(state: &mut AppState, data: EmployeeCreate) -> AppResult<Employee> {
    let employee = Employee {
        id: entity_id(),
        employee_id: data.employee_id,
        user_id: data.user_id,
        dept_id: data.dept_id,
        position: data.position,
        hire_date: data.hire_date,
    };
    state.store.db.employees.push(employee.clone());
    state.store.save()?;
    tracing::info!(code = %employee.employee_id, "Employee created");
    Ok(employee)
}

pub fn update(state: &mut AppState, id: i64, data: EmployeeUpdate) -> AppResult<Employee> {
    let employee = state
        .store
        .db
        .employees
        .iter_mut()
        .find(|emp| emp.id == id)
        .ok_or_else(|| AppError::not_found(ErrorCode::EmployeeNotFound, format!("Employee {id}")))?;

    if let Some(employee_id) = data.employee_id {
        employee.employee_id = employee_id;
    }
    if let Some(user_id) = data.user_id {
        employee.user_id = user_id;
    }
    if let Some(dept_id) = data.dept_id {
        employee.dept_id = dept_id;
    }
    if let Some(position) = data.position {
        employee.position = position;
    }
    if let Some(hire_date) = data.hire_date {
        employee.hire_date = hire_date;
    }

    let updated = employee.clone();
    state.store.save()?;
    tracing::info!(code = %updated.employee_id, "Employee updated");
    Ok(updated)
}

pub fn delete(state: &mut AppState, id: i64) -> AppResult<()> {
    if !state.store.db.employees.iter().any(|emp| emp.id == id) {
        return Err(AppError::not_found(
            ErrorCode::EmployeeNotFound,
            format!("Employee {id}"),
        ));
    }

    state.store.db.employees.retain(|emp| emp.id != id);
    state.store.save()?;
    tracing::info!(id, "Employee deleted");
    Ok(())
}
