//! Referential Integrity Service
//!
//! The store enforces no cross-table constraints, so every write that
//! carries a reference goes through here. Reference checks run before the
//! primary write; inverse-list maintenance (department rosters) runs after
//! it. The two sides are not wrapped in a transaction, matching the
//! document-store model this service fronts.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tracing::warn;

use crate::db::ids::parse_record_id;
use crate::db::models::{
    Benefit, BenefitCreate, BenefitId, BenefitUpdate, Department, DepartmentChanges,
    DepartmentCreate, DepartmentId, DepartmentUpdate, Employee, EmployeeBenefit,
    EmployeeBenefitChanges, EmployeeBenefitCreate, EmployeeBenefitUpdate, EmployeeChanges,
    EmployeeCreate, EmployeeId, EmployeeUpdate, NewDepartment, NewEmployee, NewEmployeeBenefit,
    NewPayroll, Patch, Payroll, PayrollChanges, PayrollCreate, PayrollUpdate,
};
use crate::db::repository::{
    BenefitRepository, DepartmentRepository, EmployeeBenefitRepository, EmployeeRepository,
    PayrollRepository,
};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_cpf, validate_money,
    validate_optional_text, validate_reference_month, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Write-side coordinator for all five tables
#[derive(Clone)]
pub struct IntegrityService {
    employees: EmployeeRepository,
    departments: DepartmentRepository,
    benefits: BenefitRepository,
    assignments: EmployeeBenefitRepository,
    payrolls: PayrollRepository,
}

impl IntegrityService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            employees: EmployeeRepository::new(db.clone()),
            departments: DepartmentRepository::new(db.clone()),
            benefits: BenefitRepository::new(db.clone()),
            assignments: EmployeeBenefitRepository::new(db.clone()),
            payrolls: PayrollRepository::new(db),
        }
    }

    // =========================================================================
    // Reference resolution
    // =========================================================================

    async fn resolve_employee(&self, raw: &str) -> AppResult<EmployeeId> {
        let id = parse_record_id("employee", raw)?;
        if self.employees.find_by_record(&id).await?.is_none() {
            return Err(AppError::reference_not_found("Employee"));
        }
        Ok(id)
    }

    async fn resolve_department(&self, raw: &str) -> AppResult<DepartmentId> {
        let id = parse_record_id("department", raw)?;
        if self.departments.find_by_record(&id).await?.is_none() {
            return Err(AppError::reference_not_found("Department"));
        }
        Ok(id)
    }

    async fn resolve_benefit(&self, raw: &str) -> AppResult<BenefitId> {
        let id = parse_record_id("benefit", raw)?;
        if self.benefits.find_by_record(&id).await?.is_none() {
            return Err(AppError::reference_not_found("Benefit"));
        }
        Ok(id)
    }

    /// Resolve a list of benefit ids, failing on the first missing entry.
    async fn resolve_benefits(&self, raws: &[String]) -> AppResult<Vec<BenefitId>> {
        let mut ids = Vec::with_capacity(raws.len());
        for raw in raws {
            let id = parse_record_id("benefit", raw)?;
            if self.benefits.find_by_record(&id).await?.is_none() {
                return Err(AppError::reference_not_found(format!("Benefit {raw}")));
            }
            ids.push(id);
        }
        Ok(ids)
    }

    // =========================================================================
    // Employee
    // =========================================================================

    /// Create an employee. The referenced department and benefits must exist;
    /// after the insert the department roster gains the new id.
    pub async fn create_employee(&self, data: EmployeeCreate) -> AppResult<Employee> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_cpf(&data.cpf)?;
        validate_required_text(&data.position, "position", MAX_SHORT_TEXT_LEN)?;

        let department_id = match data.department_id {
            Some(ref raw) => Some(self.resolve_department(raw).await?),
            None => None,
        };
        let benefits_id = self.resolve_benefits(&data.benefits_id).await?;
        // Payroll references are parsed but not existence-checked; the
        // payroll side is created after the employee in normal flows.
        let pay_roll_id = data
            .pay_roll_id
            .as_deref()
            .map(|raw| parse_record_id("payroll", raw))
            .transpose()?;

        let created = self
            .employees
            .create(NewEmployee {
                name: data.name,
                cpf: data.cpf,
                position: data.position,
                admission_date: data.admission_date,
                department_id: department_id.clone(),
                pay_roll_id,
                benefits_id,
            })
            .await?;

        if let (Some(department), Some(id)) = (department_id.as_ref(), created.id.as_ref()) {
            self.departments.add_employee(department, id).await?;
        }

        Ok(created)
    }

    /// Update an employee, keeping department rosters in sync when the
    /// assignment changes. Omitted fields keep their stored values; an
    /// explicit null clears `department_id` or `pay_roll_id`.
    pub async fn update_employee(&self, id: &str, data: EmployeeUpdate) -> AppResult<Employee> {
        let thing = parse_record_id("employee", id)?;
        let existing = self
            .employees
            .find_by_record(&thing)
            .await?
            .ok_or_else(|| AppError::not_found("Employee"))?;

        if let Some(ref name) = data.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        if let Some(ref cpf) = data.cpf {
            validate_cpf(cpf)?;
        }
        if let Some(ref position) = data.position {
            validate_required_text(position, "position", MAX_SHORT_TEXT_LEN)?;
        }

        let department_id = match data.department_id {
            Patch::Missing => Patch::Missing,
            Patch::Null => Patch::Null,
            Patch::Value(ref raw) => Patch::Value(self.resolve_department(raw).await?),
        };
        let benefits_id = match data.benefits_id {
            Some(ref raws) => Some(self.resolve_benefits(raws).await?),
            None => None,
        };
        let pay_roll_id = data
            .pay_roll_id
            .try_map(|raw| parse_record_id("payroll", &raw))?;

        let new_department = match &department_id {
            Patch::Missing => existing.department_id.clone(),
            Patch::Null => None,
            Patch::Value(d) => Some(d.clone()),
        };

        let updated = self
            .employees
            .update(
                &thing,
                EmployeeChanges {
                    name: data.name,
                    cpf: data.cpf,
                    position: data.position,
                    admission_date: data.admission_date,
                    department_id,
                    pay_roll_id,
                    benefits_id,
                },
            )
            .await?;

        // Roster sync only when the assignment actually changed
        if existing.department_id != new_department {
            if let Some(old) = existing.department_id.as_ref() {
                self.departments.remove_employee(old, &thing).await?;
            }
            if let Some(new) = new_department.as_ref() {
                self.departments.add_employee(new, &thing).await?;
            }
        }

        Ok(updated)
    }

    /// Delete an employee, removing it from its department roster first.
    /// Assignments and payrolls referencing it are left in place.
    pub async fn delete_employee(&self, id: &str) -> AppResult<()> {
        let thing = parse_record_id("employee", id)?;
        let existing = self
            .employees
            .find_by_record(&thing)
            .await?
            .ok_or_else(|| AppError::not_found("Employee"))?;

        if let Some(department) = existing.department_id.as_ref() {
            self.departments.remove_employee(department, &thing).await?;
        }
        self.employees.delete(&thing).await?;
        Ok(())
    }

    // =========================================================================
    // Department
    // =========================================================================

    /// Create a department. Roster and manager ids are parsed but taken as
    /// given; the roster is kept in sync from the employee side.
    pub async fn create_department(&self, data: DepartmentCreate) -> AppResult<Department> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&data.location, "location", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&data.description, "description", MAX_NOTE_LEN)?;
        validate_required_text(&data.extension, "extension", MAX_SHORT_TEXT_LEN)?;

        let employee_ids = data
            .employee_ids
            .iter()
            .map(|raw| parse_record_id("employee", raw))
            .collect::<Result<Vec<_>, _>>()?;
        let manager_id = data
            .manager_id
            .as_deref()
            .map(|raw| parse_record_id("employee", raw))
            .transpose()?;

        let created = self
            .departments
            .create(NewDepartment {
                name: data.name,
                location: data.location,
                description: data.description,
                extension: data.extension,
                employee_ids,
                manager_id,
            })
            .await?;
        Ok(created)
    }

    /// Update a department
    pub async fn update_department(
        &self,
        id: &str,
        data: DepartmentUpdate,
    ) -> AppResult<Department> {
        let thing = parse_record_id("department", id)?;
        if self.departments.find_by_record(&thing).await?.is_none() {
            return Err(AppError::not_found("Department"));
        }

        if let Some(ref name) = data.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        if let Some(ref location) = data.location {
            validate_required_text(location, "location", MAX_SHORT_TEXT_LEN)?;
        }
        if let Some(ref description) = data.description {
            validate_required_text(description, "description", MAX_NOTE_LEN)?;
        }
        if let Some(ref extension) = data.extension {
            validate_required_text(extension, "extension", MAX_SHORT_TEXT_LEN)?;
        }

        let employee_ids = match data.employee_ids {
            Some(ref raws) => Some(
                raws.iter()
                    .map(|raw| parse_record_id("employee", raw))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => None,
        };
        let manager_id = data
            .manager_id
            .try_map(|raw| parse_record_id("employee", &raw))?;

        let updated = self
            .departments
            .update(
                &thing,
                DepartmentChanges {
                    name: data.name,
                    location: data.location,
                    description: data.description,
                    extension: data.extension,
                    employee_ids,
                    manager_id,
                },
            )
            .await?;
        Ok(updated)
    }

    /// Delete a department. Employees keep their `department_id`; the
    /// dangling reference is accepted, not cascaded.
    pub async fn delete_department(&self, id: &str) -> AppResult<()> {
        let thing = parse_record_id("department", id)?;
        self.departments
            .delete(&thing)
            .await?
            .ok_or_else(|| AppError::not_found("Department"))?;
        Ok(())
    }

    // =========================================================================
    // Benefit
    // =========================================================================

    /// Create a benefit
    pub async fn create_benefit(&self, data: BenefitCreate) -> AppResult<Benefit> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&data.description, "description", MAX_NOTE_LEN)?;
        validate_required_text(&data.benefit_type, "type", MAX_SHORT_TEXT_LEN)?;
        validate_money(data.value, "value")?;

        let created = self.benefits.create(data).await?;
        Ok(created)
    }

    /// Update a benefit
    pub async fn update_benefit(&self, id: &str, data: BenefitUpdate) -> AppResult<Benefit> {
        let thing = parse_record_id("benefit", id)?;
        if self.benefits.find_by_record(&thing).await?.is_none() {
            return Err(AppError::not_found("Benefit"));
        }

        if let Some(ref name) = data.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        if let Some(ref description) = data.description {
            validate_required_text(description, "description", MAX_NOTE_LEN)?;
        }
        if let Some(ref benefit_type) = data.benefit_type {
            validate_required_text(benefit_type, "type", MAX_SHORT_TEXT_LEN)?;
        }
        if let Some(value) = data.value {
            validate_money(value, "value")?;
        }

        let updated = self.benefits.update(&thing, data).await?;
        Ok(updated)
    }

    /// Delete a benefit. Employee `benefits_id` lists are not rewritten.
    pub async fn delete_benefit(&self, id: &str) -> AppResult<()> {
        let thing = parse_record_id("benefit", id)?;
        self.benefits
            .delete(&thing)
            .await?
            .ok_or_else(|| AppError::not_found("Benefit"))?;
        Ok(())
    }

    // =========================================================================
    // EmployeeBenefit
    // =========================================================================

    /// Create an assignment. The employee is checked before the benefit, so
    /// a request with both missing reports the employee.
    pub async fn create_assignment(
        &self,
        data: EmployeeBenefitCreate,
    ) -> AppResult<EmployeeBenefit> {
        validate_required_text(&data.start_date, "start_date", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&data.end_date, "end_date", MAX_SHORT_TEXT_LEN)?;
        if let Some(amount) = data.custom_amount {
            validate_money(amount, "custom_amount")?;
        }

        let employee_id = self.resolve_employee(&data.employee_id).await?;
        let benefit_id = self.resolve_benefit(&data.benefit_id).await?;

        let created = self
            .assignments
            .create(NewEmployeeBenefit {
                employee_id,
                benefit_id,
                start_date: data.start_date,
                end_date: data.end_date,
                custom_amount: data.custom_amount,
            })
            .await?;
        Ok(created)
    }

    /// Update an assignment, re-validating any supplied reference
    pub async fn update_assignment(
        &self,
        id: &str,
        data: EmployeeBenefitUpdate,
    ) -> AppResult<EmployeeBenefit> {
        let thing = parse_record_id("employee_benefit", id)?;
        if self.assignments.find_by_record(&thing).await?.is_none() {
            return Err(AppError::not_found("Assignment"));
        }

        if let Some(ref start_date) = data.start_date {
            validate_required_text(start_date, "start_date", MAX_SHORT_TEXT_LEN)?;
        }
        if let Patch::Value(ref end_date) = data.end_date {
            validate_required_text(end_date, "end_date", MAX_SHORT_TEXT_LEN)?;
        }
        if let Patch::Value(amount) = &data.custom_amount {
            validate_money(*amount, "custom_amount")?;
        }

        let employee_id = match data.employee_id {
            Some(ref raw) => Some(self.resolve_employee(raw).await?),
            None => None,
        };
        let benefit_id = match data.benefit_id {
            Some(ref raw) => Some(self.resolve_benefit(raw).await?),
            None => None,
        };

        let updated = self
            .assignments
            .update(
                &thing,
                EmployeeBenefitChanges {
                    employee_id,
                    benefit_id,
                    start_date: data.start_date,
                    end_date: data.end_date,
                    custom_amount: data.custom_amount,
                },
            )
            .await?;
        Ok(updated)
    }

    /// Delete an assignment
    pub async fn delete_assignment(&self, id: &str) -> AppResult<()> {
        let thing = parse_record_id("employee_benefit", id)?;
        self.assignments
            .delete(&thing)
            .await?
            .ok_or_else(|| AppError::not_found("Assignment"))?;
        Ok(())
    }

    // =========================================================================
    // Payroll
    // =========================================================================

    /// Create a payroll for an existing employee
    pub async fn create_payroll(&self, data: PayrollCreate) -> AppResult<Payroll> {
        validate_reference_month(&data.reference_month)?;
        validate_money(data.deductions, "deductions")?;
        validate_money(data.discount, "discount")?;
        validate_money(data.net_salary, "net_salary")?;

        let employee_id = self.resolve_employee(&data.employee_id).await?;

        let created = self
            .payrolls
            .create(NewPayroll {
                employee_id,
                deductions: data.deductions,
                discount: data.discount,
                net_salary: data.net_salary,
                reference_month: data.reference_month,
            })
            .await?;
        Ok(created)
    }

    /// Update a payroll
    pub async fn update_payroll(&self, id: &str, data: PayrollUpdate) -> AppResult<Payroll> {
        let thing = parse_record_id("payroll", id)?;
        if self.payrolls.find_by_record(&thing).await?.is_none() {
            return Err(AppError::not_found("Payroll"));
        }

        if let Some(ref reference_month) = data.reference_month {
            validate_reference_month(reference_month)?;
        }
        if let Some(deductions) = data.deductions {
            validate_money(deductions, "deductions")?;
        }
        if let Some(discount) = data.discount {
            validate_money(discount, "discount")?;
        }
        if let Some(net_salary) = data.net_salary {
            validate_money(net_salary, "net_salary")?;
        }

        let employee_id = match data.employee_id {
            Some(ref raw) => Some(self.resolve_employee(raw).await?),
            None => None,
        };

        let updated = self
            .payrolls
            .update(
                &thing,
                PayrollChanges {
                    employee_id,
                    deductions: data.deductions,
                    discount: data.discount,
                    net_salary: data.net_salary,
                    reference_month: data.reference_month,
                },
            )
            .await?;
        Ok(updated)
    }

    /// Delete a payroll. Every employee pointing at it has `pay_roll_id`
    /// cleared first; the clear is best-effort and never blocks the delete.
    /// Returns how many employees were updated.
    pub async fn delete_payroll(&self, id: &str) -> AppResult<usize> {
        let thing = parse_record_id("payroll", id)?;
        if self.payrolls.find_by_record(&thing).await?.is_none() {
            return Err(AppError::not_found("Payroll"));
        }

        let employees_updated = match self.employees.clear_payroll_refs(&thing).await {
            Ok(count) => count,
            Err(err) => {
                warn!(payroll = %thing, error = %err, "Failed to clear payroll references");
                0
            }
        };

        self.payrolls
            .delete(&thing)
            .await?
            .ok_or_else(|| AppError::not_found("Payroll"))?;

        Ok(employees_updated)
    }
}
