//! EmployeeBenefit Model
//!
//! Assignment row linking an employee to a benefit for a period, with an
//! optional per-employee amount override.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use super::{BenefitId, EmployeeId, Patch};

/// EmployeeBenefit ID type
pub type EmployeeBenefitId = RecordId;

/// EmployeeBenefit document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeBenefit {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeBenefitId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee_id: EmployeeId,
    #[serde(with = "serde_helpers::record_id")]
    pub benefit_id: BenefitId,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub custom_amount: Option<f64>,
}

/// Create assignment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeBenefitCreate {
    pub employee_id: String,
    pub benefit_id: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub custom_amount: Option<f64>,
}

/// Update assignment payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeBenefitUpdate {
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub benefit_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Patch<String>,
    #[serde(default)]
    pub custom_amount: Patch<f64>,
}

/// Fully resolved insert for the store layer
#[derive(Debug, Clone)]
pub struct NewEmployeeBenefit {
    pub employee_id: EmployeeId,
    pub benefit_id: BenefitId,
    pub start_date: String,
    pub end_date: Option<String>,
    pub custom_amount: Option<f64>,
}

/// Fully resolved partial update for the store layer
#[derive(Debug, Clone, Default)]
pub struct EmployeeBenefitChanges {
    pub employee_id: Option<EmployeeId>,
    pub benefit_id: Option<BenefitId>,
    pub start_date: Option<String>,
    pub end_date: Patch<String>,
    pub custom_amount: Patch<f64>,
}
