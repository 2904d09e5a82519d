//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::ids::parse_record_id;
use crate::db::models::{
    BenefitId, DepartmentId, Employee, EmployeeChanges, EmployeeId, NewEmployee, PayrollId,
};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Datetime;

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Count all employees
    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM employee GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    /// Find one page of employees
    pub async fn find_page(&self, skip: u32, limit: u32) -> RepoResult<Vec<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee LIMIT $limit START $skip")
            .bind(("limit", limit as i64))
            .bind(("skip", skip as i64))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees)
    }

    /// Find employee by id string
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = parse_record_id("employee", id)?;
        let emp: Option<Employee> = self.base.db().select(thing).await?;
        Ok(emp)
    }

    /// Find employee by record id
    pub async fn find_by_record(&self, id: &EmployeeId) -> RepoResult<Option<Employee>> {
        let emp: Option<Employee> = self.base.db().select(id.clone()).await?;
        Ok(emp)
    }

    /// Find employee by CPF
    pub async fn find_by_cpf(&self, cpf: &str) -> RepoResult<Option<Employee>> {
        let cpf_owned = cpf.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE cpf = $cpf LIMIT 1")
            .bind(("cpf", cpf_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Find employees whose name contains the fragment, case-insensitive
    pub async fn find_by_name_contains(&self, name: &str) -> RepoResult<Vec<Employee>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM employee \
                 WHERE string::contains(string::lowercase(name), string::lowercase($name))",
            )
            .bind(("name", name_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees)
    }

    /// Find employees admitted inside `[start, end)`
    pub async fn find_by_admission_window(
        &self,
        start: Datetime,
        end: Datetime,
    ) -> RepoResult<Vec<Employee>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM employee \
                 WHERE admission_date >= $start AND admission_date < $end",
            )
            .bind(("start", start))
            .bind(("end", end))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees)
    }

    /// Find employees assigned to a department
    pub async fn find_by_department(
        &self,
        department: &DepartmentId,
    ) -> RepoResult<Vec<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE department_id = $department")
            .bind(("department", department.clone()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees)
    }

    /// Find employees enrolled in a benefit
    pub async fn find_by_benefit(&self, benefit: &BenefitId) -> RepoResult<Vec<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE benefits_id CONTAINS $benefit")
            .bind(("benefit", benefit.clone()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees)
    }

    /// Find employees enrolled in a benefit within one department
    pub async fn find_by_benefit_and_department(
        &self,
        benefit: &BenefitId,
        department: &DepartmentId,
    ) -> RepoResult<Vec<Employee>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM employee \
                 WHERE benefits_id CONTAINS $benefit AND department_id = $department",
            )
            .bind(("benefit", benefit.clone()))
            .bind(("department", department.clone()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees)
    }

    /// Find employees enrolled in at least `min` benefits
    pub async fn find_with_min_benefits(&self, min: usize) -> RepoResult<Vec<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE array::len(benefits_id) >= $min")
            .bind(("min", min as i64))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees)
    }

    /// Create a new employee
    pub async fn create(&self, data: NewEmployee) -> RepoResult<Employee> {
        // Check duplicate CPF
        if self.find_by_cpf(&data.cpf).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "CPF '{}' already registered",
                data.cpf
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE employee SET
                    name = $name,
                    cpf = $cpf,
                    position = $position,
                    admission_date = $admission_date,
                    department_id = $department_id,
                    pay_roll_id = $pay_roll_id,
                    benefits_id = $benefits_id
                RETURN AFTER"#,
            )
            .bind(("name", data.name))
            .bind(("cpf", data.cpf))
            .bind(("position", data.position))
            .bind(("admission_date", data.admission_date))
            .bind(("department_id", data.department_id))
            .bind(("pay_roll_id", data.pay_roll_id))
            .bind(("benefits_id", data.benefits_id))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee
    pub async fn update(&self, id: &EmployeeId, data: EmployeeChanges) -> RepoResult<Employee> {
        let existing = self
            .find_by_record(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        // Check duplicate CPF if changing
        if let Some(ref new_cpf) = data.cpf
            && new_cpf != &existing.cpf
            && self.find_by_cpf(new_cpf).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "CPF '{}' already registered",
                new_cpf
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = IF $has_name THEN $name ELSE name END,
                    cpf = IF $has_cpf THEN $cpf ELSE cpf END,
                    position = IF $has_position THEN $position ELSE position END,
                    admission_date = IF $has_admission_date THEN $admission_date ELSE admission_date END,
                    department_id = IF $has_department_id THEN $department_id ELSE department_id END,
                    pay_roll_id = IF $has_pay_roll_id THEN $pay_roll_id ELSE pay_roll_id END,
                    benefits_id = IF $has_benefits_id THEN $benefits_id ELSE benefits_id END
                RETURN AFTER"#,
            )
            .bind(("thing", id.clone()))
            .bind(("has_name", data.name.is_some()))
            .bind(("name", data.name))
            .bind(("has_cpf", data.cpf.is_some()))
            .bind(("cpf", data.cpf))
            .bind(("has_position", data.position.is_some()))
            .bind(("position", data.position))
            .bind(("has_admission_date", data.admission_date.is_some()))
            .bind(("admission_date", data.admission_date))
            .bind(("has_department_id", !data.department_id.is_missing()))
            .bind(("department_id", data.department_id.into_option()))
            .bind(("has_pay_roll_id", !data.pay_roll_id.is_missing()))
            .bind(("pay_roll_id", data.pay_roll_id.into_option()))
            .bind(("has_benefits_id", data.benefits_id.is_some()))
            .bind(("benefits_id", data.benefits_id))
            .await?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Hard delete an employee, returning the removed document
    pub async fn delete(&self, id: &EmployeeId) -> RepoResult<Option<Employee>> {
        let removed: Option<Employee> = self.base.db().delete(id.clone()).await?;
        Ok(removed)
    }

    /// Clear `pay_roll_id` on every employee referencing the payroll.
    /// Returns how many employees were touched.
    pub async fn clear_payroll_refs(&self, payroll: &PayrollId) -> RepoResult<usize> {
        let mut result = self
            .base
            .db()
            .query("UPDATE employee SET pay_roll_id = NONE WHERE pay_roll_id = $payroll")
            .bind(("payroll", payroll.clone()))
            .await?;
        let updated: Vec<Employee> = result.take(0)?;
        Ok(updated.len())
    }
}
