//! Purchase Request Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request lifecycle status
///
/// `Approved` and `Rejected` are terminal: the UI offers no further
/// transition once a request is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

/// Admin decision on a pending request
///
/// Typed separately from [`RequestStatus`] so `Pending` is not a
/// reachable transition target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestDecision {
    Approved,
    Rejected,
}

impl From<RequestDecision> for RequestStatus {
    fn from(decision: RequestDecision) -> Self {
        match decision {
            RequestDecision::Approved => RequestStatus::Approved,
            RequestDecision::Rejected => RequestStatus::Rejected,
        }
    }
}

/// One line of a request: an item name and a positive quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestItem {
    pub name: String,
    pub qty: u32,
}

/// Purchase request entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: i64,
    /// Free-form category, e.g. "Hardware" or "Software License"
    #[serde(rename = "type")]
    pub request_type: String,
    /// Ordered as submitted
    pub items: Vec<RequestItem>,
    pub status: RequestStatus,
    /// Creation timestamp
    pub date: DateTime<Utc>,
    /// Denormalized owner reference: the submitting account's email
    pub employee_email: String,
}

/// Create request payload (status, date and owner are assigned by the service)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCreate {
    #[serde(rename = "type")]
    pub request_type: String,
    pub items: Vec<RequestItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_form() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Pending).unwrap(),
            "\"Pending\""
        );
        assert_eq!(
            serde_json::to_string(&RequestStatus::Approved).unwrap(),
            "\"Approved\""
        );
        assert_eq!(
            serde_json::to_string(&RequestStatus::Rejected).unwrap(),
            "\"Rejected\""
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(!RequestStatus::Pending.is_terminal());
        assert!(RequestStatus::Approved.is_terminal());
        assert!(RequestStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_decision_into_status() {
        assert_eq!(
            RequestStatus::from(RequestDecision::Approved),
            RequestStatus::Approved
        );
        assert_eq!(
            RequestStatus::from(RequestDecision::Rejected),
            RequestStatus::Rejected
        );
    }

    #[test]
    fn test_request_wire_form() {
        let request = Request {
            id: 99,
            request_type: "Hardware".into(),
            items: vec![
                RequestItem {
                    name: "Laptop".into(),
                    qty: 1,
                },
                RequestItem {
                    name: "Mouse".into(),
                    qty: 2,
                },
            ],
            status: RequestStatus::Pending,
            date: "2026-08-07T12:00:00Z".parse().unwrap(),
            employee_email: "user@example.com".into(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"type\":\"Hardware\""));
        assert!(json.contains("\"employeeEmail\":\"user@example.com\""));
        assert!(json.contains("\"status\":\"Pending\""));

        let back: Request = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
        // input order preserved
        assert_eq!(back.items[0].name, "Laptop");
        assert_eq!(back.items[1].name, "Mouse");
    }
}
