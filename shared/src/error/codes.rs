//! Unified error codes for Coral Desk
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Account errors
//! - 4xxx: Department errors
//! - 5xxx: Employee errors
//! - 6xxx: Request errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and stable notice wiring in the embedding shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password mismatch or unverified account)
    InvalidCredentials = 1002,
    /// Email has not been verified yet
    EmailNotVerified = 1003,
    /// No registration is awaiting verification
    NoPendingVerification = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Administrator role required
    AdminRequired = 2002,

    // ==================== 3xxx: Account ====================
    /// Account not found
    AccountNotFound = 3001,
    /// Account email already exists
    EmailExists = 3002,
    /// Cannot delete the currently authenticated account
    CannotDeleteSelf = 3003,
    /// Password too short
    PasswordTooShort = 3004,

    // ==================== 4xxx: Department ====================
    /// Department not found
    DepartmentNotFound = 4001,

    // ==================== 5xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 5001,

    // ==================== 6xxx: Request ====================
    /// Request not found
    RequestNotFound = 6001,
    /// Request has no valid items
    EmptyItems = 6002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Storage read/write error
    StorageError = 9002,
    /// Storage corrupted (snapshot unreadable, reset to seed)
    StorageCorrupted = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid credentials or email not verified",
            ErrorCode::EmailNotVerified => "Email not verified",
            ErrorCode::NoPendingVerification => "No registration is awaiting verification",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Account
            ErrorCode::AccountNotFound => "Account not found",
            ErrorCode::EmailExists => "Email already exists",
            ErrorCode::CannotDeleteSelf => "Cannot delete your own account",
            ErrorCode::PasswordTooShort => "Password must be at least 6 characters",

            // Department
            ErrorCode::DepartmentNotFound => "Department not found",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",

            // Request
            ErrorCode::RequestNotFound => "Request not found",
            ErrorCode::EmptyItems => "Please add at least one item",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::StorageError => "Storage error",
            ErrorCode::StorageCorrupted => "Stored snapshot was unreadable",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when a u16 does not map to a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::RequiredField,
            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::EmailNotVerified,
            1004 => Self::NoPendingVerification,
            2001 => Self::PermissionDenied,
            2002 => Self::AdminRequired,
            3001 => Self::AccountNotFound,
            3002 => Self::EmailExists,
            3003 => Self::CannotDeleteSelf,
            3004 => Self::PasswordTooShort,
            4001 => Self::DepartmentNotFound,
            5001 => Self::EmployeeNotFound,
            6001 => Self::RequestNotFound,
            6002 => Self::EmptyItems,
            9001 => Self::InternalError,
            9002 => Self::StorageError,
            9003 => Self::StorageCorrupted,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::AdminRequired.code(), 2002);
        assert_eq!(ErrorCode::CannotDeleteSelf.code(), 3003);
        assert_eq!(ErrorCode::EmptyItems.code(), 6002);
        assert_eq!(ErrorCode::StorageCorrupted.code(), 9003);
    }

    #[test]
    fn test_try_from_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::NotAuthenticated,
            ErrorCode::InvalidCredentials,
            ErrorCode::AdminRequired,
            ErrorCode::EmailExists,
            ErrorCode::RequestNotFound,
            ErrorCode::StorageError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()).unwrap(), code);
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(777), Err(InvalidErrorCode(777)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::EmailExists).unwrap();
        assert_eq!(json, "3002");
        let code: ErrorCode = serde_json::from_str("1002").unwrap();
        assert_eq!(code, ErrorCode::InvalidCredentials);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
    }
}
