//! Cross-Table Query Service
//!
//! Multi-hop reads composed from sequential lookups and in-memory set
//! operations. The container (department, benefit, employee) is
//! existence-checked before the dependent fetch runs: a missing container
//! is 404, an existing container with no matching members is an empty list.

use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::ids::parse_record_id;
use crate::db::models::{Benefit, BenefitId, Department, Employee, Payroll};
use crate::db::repository::{
    BenefitRepository, DepartmentRepository, EmployeeBenefitRepository, EmployeeRepository,
    PayrollRepository,
};
use crate::utils::{AppError, AppResult};

/// One row of the benefit/department/employee composite query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitDepartmentEmployee {
    pub benefit: Benefit,
    pub department: Department,
    pub employee: Employee,
}

/// Read-side coordinator for queries spanning more than one table
#[derive(Clone)]
pub struct RelationService {
    employees: EmployeeRepository,
    departments: DepartmentRepository,
    benefits: BenefitRepository,
    assignments: EmployeeBenefitRepository,
    payrolls: PayrollRepository,
}

impl RelationService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            employees: EmployeeRepository::new(db.clone()),
            departments: DepartmentRepository::new(db.clone()),
            benefits: BenefitRepository::new(db.clone()),
            assignments: EmployeeBenefitRepository::new(db.clone()),
            payrolls: PayrollRepository::new(db),
        }
    }

    /// Employees assigned to a department
    pub async fn employees_of_department(
        &self,
        department_id: &str,
    ) -> AppResult<Vec<Employee>> {
        let thing = parse_record_id("department", department_id)?;
        if self.departments.find_by_record(&thing).await?.is_none() {
            return Err(AppError::not_found("Department"));
        }
        let employees = self.employees.find_by_department(&thing).await?;
        Ok(employees)
    }

    /// Employees enrolled in a benefit
    pub async fn employees_of_benefit(&self, benefit_id: &str) -> AppResult<Vec<Employee>> {
        let thing = parse_record_id("benefit", benefit_id)?;
        if self.benefits.find_by_record(&thing).await?.is_none() {
            return Err(AppError::not_found("Benefit"));
        }
        let employees = self.employees.find_by_benefit(&thing).await?;
        Ok(employees)
    }

    /// Employees enrolled in a benefit within one department, each row paired
    /// with the shared benefit and department documents. Both containers are
    /// checked before the employee query runs, benefit first.
    pub async fn employees_of_benefit_and_department(
        &self,
        benefit_id: &str,
        department_id: &str,
    ) -> AppResult<Vec<BenefitDepartmentEmployee>> {
        let benefit_thing = parse_record_id("benefit", benefit_id)?;
        let benefit = self
            .benefits
            .find_by_record(&benefit_thing)
            .await?
            .ok_or_else(|| AppError::not_found("Benefit"))?;

        let department_thing = parse_record_id("department", department_id)?;
        let department = self
            .departments
            .find_by_record(&department_thing)
            .await?
            .ok_or_else(|| AppError::not_found("Department"))?;

        let employees = self
            .employees
            .find_by_benefit_and_department(&benefit_thing, &department_thing)
            .await?;

        Ok(employees
            .into_iter()
            .map(|employee| BenefitDepartmentEmployee {
                benefit: benefit.clone(),
                department: department.clone(),
                employee,
            })
            .collect())
    }

    /// Benefits listed on an employee's record
    pub async fn benefits_of_employee(&self, employee_id: &str) -> AppResult<Vec<Benefit>> {
        let thing = parse_record_id("employee", employee_id)?;
        let employee = self
            .employees
            .find_by_record(&thing)
            .await?
            .ok_or_else(|| AppError::not_found("Employee"))?;

        if employee.benefits_id.is_empty() {
            return Ok(Vec::new());
        }
        let benefits = self.benefits.find_by_ids(&employee.benefits_id).await?;
        Ok(benefits)
    }

    /// Active benefits held by an employee through assignment rows
    pub async fn active_benefits_of_employee(
        &self,
        employee_id: &str,
    ) -> AppResult<Vec<Benefit>> {
        let thing = parse_record_id("employee", employee_id)?;
        if self.employees.find_by_record(&thing).await?.is_none() {
            return Err(AppError::not_found("Employee"));
        }

        let assignments = self.assignments.find_by_employee(&thing).await?;
        let mut benefits = Vec::new();
        for assignment in &assignments {
            if let Some(benefit) = self
                .benefits
                .find_active_by_record(&assignment.benefit_id)
                .await?
            {
                benefits.push(benefit);
            }
        }
        Ok(benefits)
    }

    /// Union of the benefits held by a department's employees, deduplicated
    pub async fn benefits_of_department(&self, department_id: &str) -> AppResult<Vec<Benefit>> {
        let thing = parse_record_id("department", department_id)?;
        if self.departments.find_by_record(&thing).await?.is_none() {
            return Err(AppError::not_found("Department"));
        }

        let employees = self.employees.find_by_department(&thing).await?;
        let mut benefit_ids: Vec<BenefitId> = Vec::new();
        for employee in &employees {
            for benefit in &employee.benefits_id {
                if !benefit_ids.contains(benefit) {
                    benefit_ids.push(benefit.clone());
                }
            }
        }

        if benefit_ids.is_empty() {
            return Ok(Vec::new());
        }
        let benefits = self.benefits.find_by_ids(&benefit_ids).await?;
        Ok(benefits)
    }

    /// Payrolls of a department's roster, in roster order. Employees without
    /// a payroll are skipped.
    pub async fn payrolls_of_department(&self, department_id: &str) -> AppResult<Vec<Payroll>> {
        let thing = parse_record_id("department", department_id)?;
        let department = self
            .departments
            .find_by_record(&thing)
            .await?
            .ok_or_else(|| AppError::not_found("Department"))?;

        let mut payrolls = Vec::new();
        for employee in &department.employee_ids {
            if let Some(payroll) = self.payrolls.find_by_employee(employee).await? {
                payrolls.push(payroll);
            }
        }
        Ok(payrolls)
    }

    /// Employees enrolled in at least `min` benefits
    pub async fn employees_with_min_benefits(&self, min: usize) -> AppResult<Vec<Employee>> {
        let employees = self.employees.find_with_min_benefits(min).await?;
        Ok(employees)
    }
}
