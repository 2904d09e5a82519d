//! Payroll Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::ids::parse_record_id;
use crate::db::models::{EmployeeId, NewPayroll, Payroll, PayrollChanges, PayrollId};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct PayrollRepository {
    base: BaseRepository,
}

impl PayrollRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Count all payrolls
    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM payroll GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    /// Find one page of payrolls
    pub async fn find_page(&self, skip: u32, limit: u32) -> RepoResult<Vec<Payroll>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM payroll LIMIT $limit START $skip")
            .bind(("limit", limit as i64))
            .bind(("skip", skip as i64))
            .await?;
        let payrolls: Vec<Payroll> = result.take(0)?;
        Ok(payrolls)
    }

    /// Find payroll by id string
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Payroll>> {
        let thing = parse_record_id("payroll", id)?;
        let payroll: Option<Payroll> = self.base.db().select(thing).await?;
        Ok(payroll)
    }

    /// Find payroll by record id
    pub async fn find_by_record(&self, id: &PayrollId) -> RepoResult<Option<Payroll>> {
        let payroll: Option<Payroll> = self.base.db().select(id.clone()).await?;
        Ok(payroll)
    }

    /// Find the payroll of one employee
    pub async fn find_by_employee(&self, employee: &EmployeeId) -> RepoResult<Option<Payroll>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM payroll WHERE employee_id = $employee LIMIT 1")
            .bind(("employee", employee.clone()))
            .await?;
        let payrolls: Vec<Payroll> = result.take(0)?;
        Ok(payrolls.into_iter().next())
    }

    /// Create a new payroll
    pub async fn create(&self, data: NewPayroll) -> RepoResult<Payroll> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE payroll SET
                    employee_id = $employee_id,
                    deductions = $deductions,
                    discount = $discount,
                    net_salary = $net_salary,
                    reference_month = $reference_month
                RETURN AFTER"#,
            )
            .bind(("employee_id", data.employee_id))
            .bind(("deductions", data.deductions))
            .bind(("discount", data.discount))
            .bind(("net_salary", data.net_salary))
            .bind(("reference_month", data.reference_month))
            .await?;

        let created: Option<Payroll> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create payroll".to_string()))
    }

    /// Update a payroll
    pub async fn update(&self, id: &PayrollId, data: PayrollChanges) -> RepoResult<Payroll> {
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    employee_id = IF $has_employee_id THEN $employee_id ELSE employee_id END,
                    deductions = IF $has_deductions THEN $deductions ELSE deductions END,
                    discount = IF $has_discount THEN $discount ELSE discount END,
                    net_salary = IF $has_net_salary THEN $net_salary ELSE net_salary END,
                    reference_month = IF $has_reference_month THEN $reference_month ELSE reference_month END
                RETURN AFTER"#,
            )
            .bind(("thing", id.clone()))
            .bind(("has_employee_id", data.employee_id.is_some()))
            .bind(("employee_id", data.employee_id))
            .bind(("has_deductions", data.deductions.is_some()))
            .bind(("deductions", data.deductions))
            .bind(("has_discount", data.discount.is_some()))
            .bind(("discount", data.discount))
            .bind(("has_net_salary", data.net_salary.is_some()))
            .bind(("net_salary", data.net_salary))
            .bind(("has_reference_month", data.reference_month.is_some()))
            .bind(("reference_month", data.reference_month))
            .await?;

        result
            .take::<Option<Payroll>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Payroll {} not found", id)))
    }

    /// Hard delete a payroll, returning the removed document
    pub async fn delete(&self, id: &PayrollId) -> RepoResult<Option<Payroll>> {
        let removed: Option<Payroll> = self.base.db().delete(id.clone()).await?;
        Ok(removed)
    }
}
