//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee entity
///
/// `user_id` and `dept_id` are weak references: the referenced Account
/// or Department may have been deleted. Views resolve them lazily and
/// fall back to a placeholder; no cascading delete is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    /// Human-facing employee code (not unique-enforced)
    pub employee_id: String,
    /// Weak reference to an Account id
    pub user_id: i64,
    /// Weak reference to a Department id
    pub dept_id: i64,
    pub position: String,
    pub hire_date: NaiveDate,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub employee_id: String,
    pub user_id: i64,
    pub dept_id: i64,
    pub position: String,
    pub hire_date: NaiveDate,
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub employee_id: Option<String>,
    pub user_id: Option<i64>,
    pub dept_id: Option<i64>,
    pub position: Option<String>,
    pub hire_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hire_date_wire_form() {
        let employee = Employee {
            id: 7,
            employee_id: "EMP-001".into(),
            user_id: 1,
            dept_id: 2,
            position: "Technician".into(),
            hire_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        let json = serde_json::to_string(&employee).unwrap();
        assert!(json.contains("\"hireDate\":\"2024-05-01\""));
        assert!(json.contains("\"employeeId\":\"EMP-001\""));
        assert!(json.contains("\"deptId\":2"));

        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(back, employee);
    }
}
