//! Benefit Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::ids::parse_record_id;
use crate::db::models::{Benefit, BenefitCreate, BenefitId, BenefitUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct BenefitRepository {
    base: BaseRepository,
}

impl BenefitRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Count all benefits
    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM benefit GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    /// Find one page of benefits
    pub async fn find_page(&self, skip: u32, limit: u32) -> RepoResult<Vec<Benefit>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM benefit LIMIT $limit START $skip")
            .bind(("limit", limit as i64))
            .bind(("skip", skip as i64))
            .await?;
        let benefits: Vec<Benefit> = result.take(0)?;
        Ok(benefits)
    }

    /// Find benefit by id string
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Benefit>> {
        let thing = parse_record_id("benefit", id)?;
        let benefit: Option<Benefit> = self.base.db().select(thing).await?;
        Ok(benefit)
    }

    /// Find benefit by record id
    pub async fn find_by_record(&self, id: &BenefitId) -> RepoResult<Option<Benefit>> {
        let benefit: Option<Benefit> = self.base.db().select(id.clone()).await?;
        Ok(benefit)
    }

    /// Find an active benefit by record id
    pub async fn find_active_by_record(&self, id: &BenefitId) -> RepoResult<Option<Benefit>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM benefit WHERE id = $id AND active = true LIMIT 1")
            .bind(("id", id.clone()))
            .await?;
        let benefits: Vec<Benefit> = result.take(0)?;
        Ok(benefits.into_iter().next())
    }

    /// Find benefits whose name contains the fragment, case-insensitive
    pub async fn find_by_name_contains(&self, name: &str) -> RepoResult<Vec<Benefit>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM benefit \
                 WHERE string::contains(string::lowercase(name), string::lowercase($name))",
            )
            .bind(("name", name_owned))
            .await?;
        let benefits: Vec<Benefit> = result.take(0)?;
        Ok(benefits)
    }

    /// Find benefits of one type
    pub async fn find_by_type(&self, benefit_type: &str) -> RepoResult<Vec<Benefit>> {
        let type_owned = benefit_type.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM benefit WHERE `type` = $benefit_type")
            .bind(("benefit_type", type_owned))
            .await?;
        let benefits: Vec<Benefit> = result.take(0)?;
        Ok(benefits)
    }

    /// Find all benefits ordered by value
    pub async fn find_sorted_by_value(&self, descending: bool) -> RepoResult<Vec<Benefit>> {
        // ORDER BY direction cannot be a bind parameter
        let dir = if descending { "DESC" } else { "ASC" };
        let mut result = self
            .base
            .db()
            .query(format!("SELECT * FROM benefit ORDER BY value {dir}"))
            .await?;
        let benefits: Vec<Benefit> = result.take(0)?;
        Ok(benefits)
    }

    /// Find benefits whose value lies in `[min, max]`
    pub async fn find_by_value_range(&self, min: f64, max: f64) -> RepoResult<Vec<Benefit>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM benefit WHERE value >= $min AND value <= $max")
            .bind(("min", min))
            .bind(("max", max))
            .await?;
        let benefits: Vec<Benefit> = result.take(0)?;
        Ok(benefits)
    }

    /// Find the benefits named by a list of ids
    pub async fn find_by_ids(&self, ids: &[BenefitId]) -> RepoResult<Vec<Benefit>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM benefit WHERE id IN $ids")
            .bind(("ids", ids.to_vec()))
            .await?;
        let benefits: Vec<Benefit> = result.take(0)?;
        Ok(benefits)
    }

    /// Create a new benefit
    pub async fn create(&self, data: BenefitCreate) -> RepoResult<Benefit> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE benefit SET
                    name = $name,
                    description = $description,
                    value = $value,
                    `type` = $benefit_type,
                    active = $active
                RETURN AFTER"#,
            )
            .bind(("name", data.name))
            .bind(("description", data.description))
            .bind(("value", data.value))
            .bind(("benefit_type", data.benefit_type))
            .bind(("active", data.active))
            .await?;

        let created: Option<Benefit> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create benefit".to_string()))
    }

    /// Update a benefit
    pub async fn update(&self, id: &BenefitId, data: BenefitUpdate) -> RepoResult<Benefit> {
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = IF $has_name THEN $name ELSE name END,
                    description = IF $has_description THEN $description ELSE description END,
                    value = IF $has_value THEN $value ELSE value END,
                    `type` = IF $has_benefit_type THEN $benefit_type ELSE `type` END,
                    active = IF $has_active THEN $active ELSE active END
                RETURN AFTER"#,
            )
            .bind(("thing", id.clone()))
            .bind(("has_name", data.name.is_some()))
            .bind(("name", data.name))
            .bind(("has_description", data.description.is_some()))
            .bind(("description", data.description))
            .bind(("has_value", data.value.is_some()))
            .bind(("value", data.value))
            .bind(("has_benefit_type", data.benefit_type.is_some()))
            .bind(("benefit_type", data.benefit_type))
            .bind(("has_active", data.active.is_some()))
            .bind(("active", data.active))
            .await?;

        result
            .take::<Option<Benefit>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Benefit {} not found", id)))
    }

    /// Hard delete a benefit, returning the removed document
    pub async fn delete(&self, id: &BenefitId) -> RepoResult<Option<Benefit>> {
        let removed: Option<Benefit> = self.base.db().delete(id.clone()).await?;
        Ok(removed)
    }
}
