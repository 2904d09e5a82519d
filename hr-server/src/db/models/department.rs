//! Department Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use super::{EmployeeId, Patch};

/// Department ID type
pub type DepartmentId = RecordId;

/// Department document
///
/// `employee_ids` is the inverse of `Employee.department_id` and is
/// maintained by the integrity service on employee writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<DepartmentId>,
    pub name: String,
    pub location: String,
    pub description: String,
    pub extension: String,
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub employee_ids: Vec<EmployeeId>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub manager_id: Option<EmployeeId>,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCreate {
    pub name: String,
    pub location: String,
    pub description: String,
    pub extension: String,
    #[serde(default)]
    pub employee_ids: Vec<String>,
    #[serde(default)]
    pub manager_id: Option<String>,
}

/// Update department payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub employee_ids: Option<Vec<String>>,
    #[serde(default)]
    pub manager_id: Patch<String>,
}

/// Fully resolved insert for the store layer
#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
    pub location: String,
    pub description: String,
    pub extension: String,
    pub employee_ids: Vec<EmployeeId>,
    pub manager_id: Option<EmployeeId>,
}

/// Fully resolved partial update for the store layer
#[derive(Debug, Clone, Default)]
pub struct DepartmentChanges {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub extension: Option<String>,
    pub employee_ids: Option<Vec<EmployeeId>>,
    pub manager_id: Patch<EmployeeId>,
}
