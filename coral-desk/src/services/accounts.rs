//! Accounts Service
//!
//! Self-service registration/verification plus the admin CRUD surface.
//! Email uniqueness is checked by linear scan at create/update time.

use crate::state::AppState;
use crate::storage::marker;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Account, AccountCreate, AccountRegister, AccountUpdate, Role};
use shared::util::entity_id;

/// Minimum accepted password length (registration and resets)
const MIN_PASSWORD_LEN: usize = 6;

/// All accounts
pub fn list(state: &AppState) -> Vec<Account> {
    state.store.db.accounts.clone()
}

fn email_taken(state: &AppState, email: &str, except_id: Option<i64>) -> bool {
    state
        .store
        .db
        .accounts
        .iter()
        .any(|acc| acc.email == email && Some(acc.id) != except_id)
}

/// Self-service registration.
///
/// Always creates an unverified `user` account and records the email in
/// the pending-verification marker for the verify step.
pub fn register(state: &mut AppState, data: AccountRegister) -> AppResult<Account> {
    if data.email.is_empty() {
        return Err(AppError::required_field("email"));
    }
    if data.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::new(ErrorCode::PasswordTooShort));
    }
    if email_taken(state, &data.email, None) {
        return Err(AppError::new(ErrorCode::EmailExists));
    }

    let account = Account {
        id: entity_id(),
        first_name: data.first_name,
        last_name: data.last_name,
        email: data.email,
        password: data.password,
        role: Role::User,
        verified: false,
    };
    state.store.db.accounts.push(account.clone());
    state.store.save()?;

    marker::write(&state.paths.pending_verification_file(), &account.email)?;
    tracing::info!(email = %account.email, "Account registered, verification pending");
    Ok(account)
}

/// The email currently awaiting verification, if any
pub fn pending_verification(state: &AppState) -> Option<String> {
    marker::read(&state.paths.pending_verification_file()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Pending-verification marker unreadable");
        None
    })
}

/// Complete the pending verification.
///
/// Flips the marked account to verified and clears the marker.
pub fn verify_pending(state: &mut AppState) -> AppResult<Account> {
    let email = pending_verification(state)
        .ok_or_else(|| AppError::new(ErrorCode::NoPendingVerification))?;

    let account = state
        .store
        .db
        .accounts
        .iter_mut()
        .find(|acc| acc.email == email)
        .ok_or_else(|| AppError::not_found(ErrorCode::AccountNotFound, format!("Account {email}")))?;
    account.verified = true;
    let verified = account.clone();
    state.store.save()?;

    marker::clear(&state.paths.pending_verification_file())?;
    tracing::info!(email = %verified.email, "Email verified");
    Ok(verified)
}

/// Create an account (admin path: role and verified flag are settable)
pub fn create(state: &mut AppState, data: AccountCreate) -> AppResult<Account> {
    if data.email.is_empty() {
        return Err(AppError::required_field("email"));
    }
    if data.password.is_empty() {
        return Err(AppError::required_field("password"));
    }
    if email_taken(state, &data.email, None) {
        return Err(AppError::new(ErrorCode::EmailExists));
    }

    let account = Account {
        id: entity_id(),
        first_name: data.first_name,
        last_name: data.last_name,
        email: data.email,
        password: data.password,
        role: data.role,
        verified: data.verified,
    };
    state.store.db.accounts.push(account.clone());
    state.store.save()?;
    tracing::info!(email = %account.email, role = ?account.role, "Account created");
    Ok(account)
}

/// Update an account. An omitted password keeps the existing one.
pub fn update(state: &mut AppState, id: i64, data: AccountUpdate) -> AppResult<Account> {
    if let Some(ref email) = data.email
        && email_taken(state, email, Some(id))
    {
        return Err(AppError::new(ErrorCode::EmailExists));
    }

    let account = state
        .store
        .db
        .accounts
        .iter_mut()
        .find(|acc| acc.id == id)
        .ok_or_else(|| AppError::not_found(ErrorCode::AccountNotFound, format!("Account {id}")))?;

    if let Some(first_name) = data.first_name {
        account.first_name = first_name;
    }
    if let Some(last_name) = data.last_name {
        account.last_name = last_name;
    }
    if let Some(email) = data.email {
        account.email = email;
    }
    if let Some(password) = data.password {
        account.password = password;
    }
    if let Some(role) = data.role {
        account.role = role;
    }
    if let Some(verified) = data.verified {
        account.verified = verified;
    }

    let updated = account.clone();
    state.store.save()?;
    state.session.sync_identity(updated.clone());
    tracing::info!(email = %updated.email, "Account updated");
    Ok(updated)
}

/// Delete an account.
///
/// Deleting the currently authenticated account is always rejected.
pub fn delete(state: &mut AppState, id: i64) -> AppResult<()> {
    if state.session.current().is_some_and(|acc| acc.id == id) {
        return Err(AppError::new(ErrorCode::CannotDeleteSelf));
    }
    if !state.store.db.accounts.iter().any(|acc| acc.id == id) {
        return Err(AppError::not_found(
            ErrorCode::AccountNotFound,
            format!("Account {id}"),
        ));
    }

    state.store.db.accounts.retain(|acc| acc.id != id);
    state.store.save()?;
    tracing::info!(id, "Account deleted");
    Ok(())
}

/// Admin password reset
pub fn reset_password(state: &mut AppState, id: i64, new_password: &str) -> AppResult<()> {
    if new_password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::new(ErrorCode::PasswordTooShort));
    }

    let account = state
        .store
        .db
        .accounts
        .iter_mut()
        .find(|acc| acc.id == id)
        .ok_or_else(|| AppError::not_found(ErrorCode::AccountNotFound, format!("Account {id}")))?;
    account.password = new_password.to_string();
    let updated = account.clone();
    state.store.save()?;
    state.session.sync_identity(updated);
    tracing::info!(id, "Password reset");
    Ok(())
}
