//! Read-side view assembly
//!
//! Builds the row/detail values the presentation layer renders. This is
//! where weak references get resolved: a deleted Account or Department
//! behind an employee row falls back to the "N/A" placeholder instead
//! of failing.

use crate::state::AppState;
use crate::storage::DataStore;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::models::{Request, RequestStatus, Role};

/// Placeholder shown for dangling references
const PLACEHOLDER: &str = "N/A";

/// Profile page data for the signed-in user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub verified: bool,
}

pub fn profile_view(state: &AppState) -> AppResult<ProfileView> {
    let account = state
        .session
        .current()
        .ok_or_else(AppError::not_authenticated)?;
    Ok(ProfileView {
        name: account.full_name(),
        email: account.email.clone(),
        role: account.role,
        verified: account.verified,
    })
}

/// One row of the user's own requests table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestRow {
    pub request_type: String,
    /// e.g. "Laptop (1), USB-C dock (2)"
    pub items: String,
    pub date: DateTime<Utc>,
    pub status: RequestStatus,
}

/// One row of the admin requests table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminRequestRow {
    /// Requester's full name, or the bare email when the account is gone
    pub requester: String,
    pub email: String,
    pub request_type: String,
    pub items: String,
    pub date: DateTime<Utc>,
    pub status: RequestStatus,
    /// Approve/Reject buttons are offered only while Pending
    pub decidable: bool,
}

/// One row of the admin employees table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRow {
    pub employee_id: String,
    /// Referenced account's email, or "N/A"
    pub user: String,
    pub position: String,
    /// Referenced department's name, or "N/A"
    pub department: String,
    pub hire_date: NaiveDate,
}

fn items_summary(request: &Request) -> String {
    request
        .items
        .iter()
        .map(|item| format!("{} ({})", item.name, item.qty))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rows for the signed-in user's requests page
pub fn request_rows(state: &AppState) -> AppResult<Vec<RequestRow>> {
    let email = &state
        .session
        .current()
        .ok_or_else(AppError::not_authenticated)?
        .email;
    Ok(state
        .store
        .db
        .requests
        .iter()
        .filter(|req| &req.employee_email == email)
        .map(|req| RequestRow {
            request_type: req.request_type.clone(),
            items: items_summary(req),
            date: req.date,
            status: req.status,
        })
        .collect())
}

/// Rows for the admin requests page (all requests)
pub fn admin_request_rows(store: &DataStore) -> Vec<AdminRequestRow> {
    store
        .db
        .requests
        .iter()
        .map(|req| {
            let requester = store
                .db
                .accounts
                .iter()
                .find(|acc| acc.email == req.employee_email)
                .map(|acc| acc.full_name())
                .unwrap_or_else(|| req.employee_email.clone());
            AdminRequestRow {
                requester,
                email: req.employee_email.clone(),
                request_type: req.request_type.clone(),
                items: items_summary(req),
                date: req.date,
                status: req.status,
                decidable: req.status == RequestStatus::Pending,
            }
        })
        .collect()
}

/// Rows for the admin employees page, weak refs resolved
pub fn employee_rows(store: &DataStore) -> Vec<EmployeeRow> {
    store
        .db
        .employees
        .iter()
        .map(|emp| {
            let user = store
                .db
                .accounts
                .iter()
                .find(|acc| acc.id == emp.user_id)
                .map(|acc| acc.email.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            let department = store
                .db
                .departments
                .iter()
                .find(|dept| dept.id == emp.dept_id)
                .map(|dept| dept.name.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            EmployeeRow {
                employee_id: emp.employee_id.clone(),
                user,
                position: emp.position.clone(),
                department,
                hire_date: emp.hire_date,
            }
        })
        .collect()
}
