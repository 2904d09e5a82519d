//! Department Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::ids::parse_record_id;
use crate::db::models::{Department, DepartmentChanges, DepartmentId, EmployeeId, NewDepartment};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct DepartmentRepository {
    base: BaseRepository,
}

impl DepartmentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Count all departments
    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM department GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    /// Find one page of departments
    pub async fn find_page(&self, skip: u32, limit: u32) -> RepoResult<Vec<Department>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM department LIMIT $limit START $skip")
            .bind(("limit", limit as i64))
            .bind(("skip", skip as i64))
            .await?;
        let departments: Vec<Department> = result.take(0)?;
        Ok(departments)
    }

    /// Find department by id string
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Department>> {
        let thing = parse_record_id("department", id)?;
        let dept: Option<Department> = self.base.db().select(thing).await?;
        Ok(dept)
    }

    /// Find department by record id
    pub async fn find_by_record(&self, id: &DepartmentId) -> RepoResult<Option<Department>> {
        let dept: Option<Department> = self.base.db().select(id.clone()).await?;
        Ok(dept)
    }

    /// Count departments whose name contains the fragment, case-insensitive
    pub async fn count_by_name_contains(&self, name: &str) -> RepoResult<i64> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT count() FROM department \
                 WHERE string::contains(string::lowercase(name), string::lowercase($name)) \
                 GROUP ALL",
            )
            .bind(("name", name_owned))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    /// Find one page of departments whose name contains the fragment
    pub async fn find_by_name_contains(
        &self,
        name: &str,
        skip: u32,
        limit: u32,
    ) -> RepoResult<Vec<Department>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM department \
                 WHERE string::contains(string::lowercase(name), string::lowercase($name)) \
                 LIMIT $limit START $skip",
            )
            .bind(("name", name_owned))
            .bind(("limit", limit as i64))
            .bind(("skip", skip as i64))
            .await?;
        let departments: Vec<Department> = result.take(0)?;
        Ok(departments)
    }

    /// Find departments whose roster contains the employee
    pub async fn find_by_employee(&self, employee: &EmployeeId) -> RepoResult<Vec<Department>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM department WHERE employee_ids CONTAINS $employee")
            .bind(("employee", employee.clone()))
            .await?;
        let departments: Vec<Department> = result.take(0)?;
        Ok(departments)
    }

    /// Create a new department
    pub async fn create(&self, data: NewDepartment) -> RepoResult<Department> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE department SET
                    name = $name,
                    location = $location,
                    description = $description,
                    extension = $extension,
                    employee_ids = $employee_ids,
                    manager_id = $manager_id
                RETURN AFTER"#,
            )
            .bind(("name", data.name))
            .bind(("location", data.location))
            .bind(("description", data.description))
            .bind(("extension", data.extension))
            .bind(("employee_ids", data.employee_ids))
            .bind(("manager_id", data.manager_id))
            .await?;

        let created: Option<Department> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create department".to_string()))
    }

    /// Update a department
    pub async fn update(
        &self,
        id: &DepartmentId,
        data: DepartmentChanges,
    ) -> RepoResult<Department> {
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = IF $has_name THEN $name ELSE name END,
                    location = IF $has_location THEN $location ELSE location END,
                    description = IF $has_description THEN $description ELSE description END,
                    extension = IF $has_extension THEN $extension ELSE extension END,
                    employee_ids = IF $has_employee_ids THEN $employee_ids ELSE employee_ids END,
                    manager_id = IF $has_manager_id THEN $manager_id ELSE manager_id END
                RETURN AFTER"#,
            )
            .bind(("thing", id.clone()))
            .bind(("has_name", data.name.is_some()))
            .bind(("name", data.name))
            .bind(("has_location", data.location.is_some()))
            .bind(("location", data.location))
            .bind(("has_description", data.description.is_some()))
            .bind(("description", data.description))
            .bind(("has_extension", data.extension.is_some()))
            .bind(("extension", data.extension))
            .bind(("has_employee_ids", data.employee_ids.is_some()))
            .bind(("employee_ids", data.employee_ids))
            .bind(("has_manager_id", !data.manager_id.is_missing()))
            .bind(("manager_id", data.manager_id.into_option()))
            .await?;

        result
            .take::<Option<Department>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Department {} not found", id)))
    }

    /// Hard delete a department, returning the removed document
    pub async fn delete(&self, id: &DepartmentId) -> RepoResult<Option<Department>> {
        let removed: Option<Department> = self.base.db().delete(id.clone()).await?;
        Ok(removed)
    }

    /// Add an employee to the roster. `array::add` keeps the list a set, so
    /// re-adding an existing member is a no-op.
    pub async fn add_employee(
        &self,
        id: &DepartmentId,
        employee: &EmployeeId,
    ) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET employee_ids = array::add(employee_ids, $employee)")
            .bind(("thing", id.clone()))
            .bind(("employee", employee.clone()))
            .await?;
        Ok(())
    }

    /// Remove an employee from the roster
    pub async fn remove_employee(
        &self,
        id: &DepartmentId,
        employee: &EmployeeId,
    ) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET employee_ids -= $employee")
            .bind(("thing", id.clone()))
            .bind(("employee", employee.clone()))
            .await?;
        Ok(())
    }
}
