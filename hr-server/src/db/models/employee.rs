//! Employee Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use surrealdb::sql::Datetime;

use super::serde_helpers;
use super::{BenefitId, DepartmentId, Patch, PayrollId};

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee document
///
/// `department_id` is mirrored by the owning department's `employee_ids`
/// list; both sides are kept in sync by the integrity service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeId>,
    pub name: String,
    pub cpf: String,
    pub position: String,
    pub admission_date: Datetime,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub department_id: Option<DepartmentId>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub pay_roll_id: Option<PayrollId>,
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub benefits_id: Vec<BenefitId>,
}

/// Create employee payload
///
/// Reference fields arrive as raw strings and are parsed and checked by the
/// integrity service before anything is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub cpf: String,
    pub position: String,
    pub admission_date: Datetime,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub pay_roll_id: Option<String>,
    #[serde(default)]
    pub benefits_id: Vec<String>,
}

/// Update employee payload
///
/// `department_id` and `pay_roll_id` are nullable references: omitted keeps
/// the stored value, explicit null clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub admission_date: Option<Datetime>,
    #[serde(default)]
    pub department_id: Patch<String>,
    #[serde(default)]
    pub pay_roll_id: Patch<String>,
    #[serde(default)]
    pub benefits_id: Option<Vec<String>>,
}

/// Fully resolved insert: references parsed and existence-checked
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub cpf: String,
    pub position: String,
    pub admission_date: Datetime,
    pub department_id: Option<DepartmentId>,
    pub pay_roll_id: Option<PayrollId>,
    pub benefits_id: Vec<BenefitId>,
}

/// Fully resolved partial update for the store layer
#[derive(Debug, Clone, Default)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub position: Option<String>,
    pub admission_date: Option<Datetime>,
    pub department_id: Patch<DepartmentId>,
    pub pay_roll_id: Patch<PayrollId>,
    pub benefits_id: Option<Vec<BenefitId>>,
}
