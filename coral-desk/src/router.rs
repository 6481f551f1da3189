//! Router & access guard
//!
//! Maps a location string (hash fragment convention, `#/` prefix) to a
//! page, enforcing two access tiers before dispatch: protected routes
//! need any authenticated identity, admin routes need the admin role.
//! Resolution is a pure function of (location, identity, role).

use crate::session::SessionManager;
use serde::{Deserialize, Serialize};

/// Location prefix stripped before route matching
pub const HASH_PREFIX: &str = "#/";

/// Routes requiring any authenticated identity (prefix match)
const PROTECTED_ROUTES: &[&str] = &["profile", "requests"];

/// Routes requiring the admin role (prefix match)
const ADMIN_ROUTES: &[&str] = &[
    "admin/accounts",
    "admin/departments",
    "admin/employees",
    "admin/requests",
];

/// The fixed page set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Register,
    Verify,
    Login,
    Profile,
    Requests,
    AdminAccounts,
    AdminDepartments,
    AdminEmployees,
    AdminRequests,
}

impl Page {
    /// Resolve a route key to a page by exact match.
    ///
    /// Unrecognized keys fall back to `Home`; that is the default
    /// transition, not an error.
    pub fn from_route(route: &str) -> Self {
        match route {
            "" => Self::Home,
            "register" => Self::Register,
            "verify" => Self::Verify,
            "login" => Self::Login,
            "profile" => Self::Profile,
            "requests" => Self::Requests,
            "admin/accounts" => Self::AdminAccounts,
            "admin/departments" => Self::AdminDepartments,
            "admin/employees" => Self::AdminEmployees,
            "admin/requests" => Self::AdminRequests,
            _ => Self::Home,
        }
    }

    /// The canonical route key for this page
    pub fn route_key(&self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Register => "register",
            Self::Verify => "verify",
            Self::Login => "login",
            Self::Profile => "profile",
            Self::Requests => "requests",
            Self::AdminAccounts => "admin/accounts",
            Self::AdminDepartments => "admin/departments",
            Self::AdminEmployees => "admin/employees",
            Self::AdminRequests => "admin/requests",
        }
    }

    /// The full location for this page, e.g. `#/login`
    pub fn location(&self) -> String {
        format!("{}{}", HASH_PREFIX, self.route_key())
    }
}

/// Notice severity, mirroring the toast levels of the UI shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Danger,
}

/// A user-facing notice emitted alongside a redirect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Danger,
            message: message.into(),
        }
    }
}

/// Outcome of resolving a location
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Dispatch to this page
    Show(Page),
    /// Guard tripped: navigate to `to` and surface the notice. The
    /// redirect location re-enters resolution on the next cycle.
    Redirect { to: Page, notice: Notice },
}

/// Resolve a location against the current session.
///
/// Guard order: protected check, then admin check. The two sets are
/// disjoint, so the order has no observable effect on the outcome.
pub fn resolve(location: &str, session: &SessionManager) -> Resolution {
    let route = location.strip_prefix(HASH_PREFIX).unwrap_or(location);

    if PROTECTED_ROUTES.iter().any(|r| route.starts_with(r)) && !session.is_authenticated() {
        tracing::debug!(route, "Unauthenticated access to protected route");
        return Resolution::Redirect {
            to: Page::Login,
            notice: Notice::warning("Please login to access this page"),
        };
    }

    if ADMIN_ROUTES.iter().any(|r| route.starts_with(r)) {
        if !session.is_authenticated() {
            tracing::debug!(route, "Unauthenticated access to admin route");
            return Resolution::Redirect {
                to: Page::Login,
                notice: Notice::warning("Please login to access this page"),
            };
        }
        if !session.is_admin() {
            tracing::debug!(route, "Non-admin access to admin route");
            return Resolution::Redirect {
                to: Page::Home,
                notice: Notice::danger("Access denied. Admin only."),
            };
        }
    }

    Resolution::Show(Page::from_route(route))
}
