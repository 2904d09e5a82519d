//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`employees`] - employee records
//! - [`departments`] - department records and rosters
//! - [`benefits`] - benefit catalog
//! - [`employee_benefits`] - per-employee benefit assignments
//! - [`payroll`] - payroll records

use serde::{Deserialize, Serialize};

pub mod health;

pub mod benefits;
pub mod departments;
pub mod employee_benefits;
pub mod employees;
pub mod payroll;

/// `{"count": n}` body returned by the count endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}

/// `{"detail": ...}` body returned by successful deletes
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub detail: String,
}
