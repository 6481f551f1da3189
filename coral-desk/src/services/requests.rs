//! Requests Service
//!
//! Submission and approval workflow. A request is created Pending by
//! the signed-in user and decided (Approved/Rejected) by an admin.

use crate::state::AppState;
use crate::storage::DataStore;
use chrono::Utc;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Request, RequestCreate, RequestDecision, RequestItem, RequestStatus};
use shared::util::entity_id;

/// All requests (admin view)
pub fn list_all(state: &AppState) -> Vec<Request> {
    state.store.db.requests.clone()
}

/// Requests owned by the given email
pub fn list_for(store: &DataStore, email: &str) -> Vec<Request> {
    store
        .db
        .requests
        .iter()
        .filter(|req| req.employee_email == email)
        .cloned()
        .collect()
}

/// Requests owned by the signed-in user
pub fn list_mine(state: &AppState) -> AppResult<Vec<Request>> {
    let email = &state
        .session
        .current()
        .ok_or_else(AppError::not_authenticated)?
        .email;
    Ok(list_for(&state.store, email))
}

/// Submit a request as the signed-in user.
///
/// Blank rows (empty name or zero quantity) are dropped first; at least
/// one valid item must remain. Items keep their input order. The new
/// request starts Pending, stamped now, owned by the identity's email.
pub fn create(state: &mut AppState, data: RequestCreate) -> AppResult<Request> {
    let owner = state
        .session
        .current()
        .ok_or_else(AppError::not_authenticated)?
        .email
        .clone();

    let items: Vec<RequestItem> = data
        .items
        .into_iter()
        .filter(|item| !item.name.trim().is_empty() && item.qty >= 1)
        .collect();
    if items.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyItems));
    }

    let request = Request {
        id: entity_id(),
        request_type: data.request_type,
        items,
        status: RequestStatus::Pending,
        date: Utc::now(),
        employee_email: owner,
    };
    state.store.db.requests.push(request.clone());
    state.store.save()?;
    tracing::info!(
        id = request.id,
        owner = %request.employee_email,
        items = request.items.len(),
        "Request submitted"
    );
    Ok(request)
}

/// Decide a request: Approved or Rejected.
///
/// An already-decided request may be decided again; the UI hides the
/// buttons once a request leaves Pending, but the operation itself
/// does not guard terminal states.
pub fn decide(state: &mut AppState, id: i64, decision: RequestDecision) -> AppResult<Request> {
    let request = state
        .store
        .db
        .requests
        .iter_mut()
        .find(|req| req.id == id)
        .ok_or_else(|| AppError::not_found(ErrorCode::RequestNotFound, format!("Request {id}")))?;
    request.status = decision.into();
    let updated = request.clone();
    state.store.save()?;
    tracing::info!(id, status = ?updated.status, "Request decided");
    Ok(updated)
}

/// Delete a request (any state)
pub fn delete(state: &mut AppState, id: i64) -> AppResult<()> {
    if !state.store.db.requests.iter().any(|req| req.id == id) {
        return Err(AppError::not_found(
            ErrorCode::RequestNotFound,
            format!("Request {id}"),
        ));
    }

    state.store.db.requests.retain(|req| req.id != id);
    state.store.save()?;
    tracing::info!(id, "Request deleted");
    Ok(())
}
