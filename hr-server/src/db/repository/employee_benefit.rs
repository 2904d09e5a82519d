//! EmployeeBenefit Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::ids::parse_record_id;
use crate::db::models::{
    EmployeeBenefit, EmployeeBenefitChanges, EmployeeBenefitId, EmployeeId, NewEmployeeBenefit,
};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct EmployeeBenefitRepository {
    base: BaseRepository,
}

impl EmployeeBenefitRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Count all assignments
    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM employee_benefit GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    /// Find one page of assignments
    pub async fn find_page(&self, skip: u32, limit: u32) -> RepoResult<Vec<EmployeeBenefit>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee_benefit LIMIT $limit START $skip")
            .bind(("limit", limit as i64))
            .bind(("skip", skip as i64))
            .await?;
        let assignments: Vec<EmployeeBenefit> = result.take(0)?;
        Ok(assignments)
    }

    /// Find assignment by id string
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<EmployeeBenefit>> {
        let thing = parse_record_id("employee_benefit", id)?;
        let assignment: Option<EmployeeBenefit> = self.base.db().select(thing).await?;
        Ok(assignment)
    }

    /// Find assignment by record id
    pub async fn find_by_record(
        &self,
        id: &EmployeeBenefitId,
    ) -> RepoResult<Option<EmployeeBenefit>> {
        let assignment: Option<EmployeeBenefit> = self.base.db().select(id.clone()).await?;
        Ok(assignment)
    }

    /// Find every assignment held by an employee
    pub async fn find_by_employee(
        &self,
        employee: &EmployeeId,
    ) -> RepoResult<Vec<EmployeeBenefit>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee_benefit WHERE employee_id = $employee")
            .bind(("employee", employee.clone()))
            .await?;
        let assignments: Vec<EmployeeBenefit> = result.take(0)?;
        Ok(assignments)
    }

    /// Create a new assignment
    pub async fn create(&self, data: NewEmployeeBenefit) -> RepoResult<EmployeeBenefit> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE employee_benefit SET
                    employee_id = $employee_id,
                    benefit_id = $benefit_id,
                    start_date = $start_date,
                    end_date = $end_date,
                    custom_amount = $custom_amount
                RETURN AFTER"#,
            )
            .bind(("employee_id", data.employee_id))
            .bind(("benefit_id", data.benefit_id))
            .bind(("start_date", data.start_date))
            .bind(("end_date", data.end_date))
            .bind(("custom_amount", data.custom_amount))
            .await?;

        let created: Option<EmployeeBenefit> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create assignment".to_string()))
    }

    /// Update an assignment
    pub async fn update(
        &self,
        id: &EmployeeBenefitId,
        data: EmployeeBenefitChanges,
    ) -> RepoResult<EmployeeBenefit> {
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    employee_id = IF $has_employee_id THEN $employee_id ELSE employee_id END,
                    benefit_id = IF $has_benefit_id THEN $benefit_id ELSE benefit_id END,
                    start_date = IF $has_start_date THEN $start_date ELSE start_date END,
                    end_date = IF $has_end_date THEN $end_date ELSE end_date END,
                    custom_amount = IF $has_custom_amount THEN $custom_amount ELSE custom_amount END
                RETURN AFTER"#,
            )
            .bind(("thing", id.clone()))
            .bind(("has_employee_id", data.employee_id.is_some()))
            .bind(("employee_id", data.employee_id))
            .bind(("has_benefit_id", data.benefit_id.is_some()))
            .bind(("benefit_id", data.benefit_id))
            .bind(("has_start_date", data.start_date.is_some()))
            .bind(("start_date", data.start_date))
            .bind(("has_end_date", !data.end_date.is_missing()))
            .bind(("end_date", data.end_date.into_option()))
            .bind(("has_custom_amount", !data.custom_amount.is_missing()))
            .bind(("custom_amount", data.custom_amount.into_option()))
            .await?;

        result
            .take::<Option<EmployeeBenefit>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Assignment {} not found", id)))
    }

    /// Hard delete an assignment, returning the removed document
    pub async fn delete(&self, id: &EmployeeBenefitId) -> RepoResult<Option<EmployeeBenefit>> {
        let removed: Option<EmployeeBenefit> = self.base.db().delete(id.clone()).await?;
        Ok(removed)
    }
}
