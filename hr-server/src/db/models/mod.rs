//! Data models
//!
//! Document structs plus their create/update payloads. Record link fields
//! are typed [`surrealdb::RecordId`]s serialized through [`serde_helpers`].

pub mod benefit;
pub mod department;
pub mod employee;
pub mod employee_benefit;
pub mod patch;
pub mod payroll;
pub mod serde_helpers;

pub use benefit::{Benefit, BenefitCreate, BenefitId, BenefitUpdate};
pub use department::{
    Department, DepartmentChanges, DepartmentCreate, DepartmentId, DepartmentUpdate, NewDepartment,
};
pub use employee::{
    Employee, EmployeeChanges, EmployeeCreate, EmployeeId, EmployeeUpdate, NewEmployee,
};
pub use employee_benefit::{
    EmployeeBenefit, EmployeeBenefitChanges, EmployeeBenefitCreate, EmployeeBenefitId,
    EmployeeBenefitUpdate, NewEmployeeBenefit,
};
pub use patch::Patch;
pub use payroll::{NewPayroll, Payroll, PayrollChanges, PayrollCreate, PayrollId, PayrollUpdate};
