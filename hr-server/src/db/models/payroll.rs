//! Payroll Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::EmployeeId;
use super::serde_helpers;

/// Payroll ID type
pub type PayrollId = RecordId;

/// Payroll document for one employee and reference month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payroll {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<PayrollId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee_id: EmployeeId,
    pub deductions: f64,
    pub discount: f64,
    pub net_salary: f64,
    /// `YYYY-MM`
    pub reference_month: String,
}

/// Create payroll payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollCreate {
    pub employee_id: String,
    pub deductions: f64,
    pub discount: f64,
    pub net_salary: f64,
    pub reference_month: String,
}

/// Update payroll payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayrollUpdate {
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub deductions: Option<f64>,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub net_salary: Option<f64>,
    #[serde(default)]
    pub reference_month: Option<String>,
}

/// Fully resolved insert for the store layer
#[derive(Debug, Clone)]
pub struct NewPayroll {
    pub employee_id: EmployeeId,
    pub deductions: f64,
    pub discount: f64,
    pub net_salary: f64,
    pub reference_month: String,
}

/// Fully resolved partial update for the store layer
#[derive(Debug, Clone, Default)]
pub struct PayrollChanges {
    pub employee_id: Option<EmployeeId>,
    pub deductions: Option<f64>,
    pub discount: Option<f64>,
    pub net_salary: Option<f64>,
    pub reference_month: Option<String>,
}
