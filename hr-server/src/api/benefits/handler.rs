//! Benefit API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::api::{CountResponse, DeleteResponse};
use crate::core::ServerState;
use crate::db::models::{Benefit, BenefitCreate, BenefitUpdate, Employee};
use crate::db::repository::BenefitRepository;
use crate::services::{IntegrityService, RelationService};
use crate::utils::{AppError, AppResult, Page, Pagination};

/// Create a benefit
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BenefitCreate>,
) -> AppResult<(StatusCode, Json<Benefit>)> {
    let service = IntegrityService::new(state.db.clone());
    let benefit = service.create_benefit(payload).await?;
    Ok((StatusCode::CREATED, Json(benefit)))
}

/// List one page of benefits
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<Page<Benefit>>> {
    page.validate()?;
    let repo = BenefitRepository::new(state.db.clone());
    let total = repo.count().await?;
    let data = repo.find_page(page.skip, page.limit).await?;
    Ok(Json(Page::new(total, page, data)))
}

/// Count benefits
pub async fn count(State(state): State<ServerState>) -> AppResult<Json<CountResponse>> {
    let repo = BenefitRepository::new(state.db.clone());
    let count = repo.count().await?;
    Ok(Json(CountResponse { count }))
}

#[derive(Deserialize)]
pub struct NameQuery {
    pub name: String,
}

/// Benefits whose name contains the fragment (case-insensitive)
pub async fn get_by_name(
    State(state): State<ServerState>,
    Query(query): Query<NameQuery>,
) -> AppResult<Json<Vec<Benefit>>> {
    let repo = BenefitRepository::new(state.db.clone());
    let benefits = repo.find_by_name_contains(&query.name).await?;
    Ok(Json(benefits))
}

#[derive(Deserialize)]
pub struct TypeQuery {
    #[serde(rename = "type")]
    pub benefit_type: String,
}

/// Benefits of an exact type
pub async fn get_by_type(
    State(state): State<ServerState>,
    Query(query): Query<TypeQuery>,
) -> AppResult<Json<Vec<Benefit>>> {
    let repo = BenefitRepository::new(state.db.clone());
    let benefits = repo.find_by_type(&query.benefit_type).await?;
    Ok(Json(benefits))
}

#[derive(Deserialize)]
pub struct SortQuery {
    #[serde(default = "default_order")]
    pub order: String,
}

fn default_order() -> String {
    "asc".to_string()
}

/// All benefits sorted by value
pub async fn sort_by_value(
    State(state): State<ServerState>,
    Query(query): Query<SortQuery>,
) -> AppResult<Json<Vec<Benefit>>> {
    let descending = match query.order.as_str() {
        "asc" => false,
        "desc" => true,
        _ => return Err(AppError::validation("order must be 'asc' or 'desc'")),
    };

    let repo = BenefitRepository::new(state.db.clone());
    let benefits = repo.find_sorted_by_value(descending).await?;
    Ok(Json(benefits))
}

#[derive(Deserialize)]
pub struct ValueRangeQuery {
    pub min_value: f64,
    pub max_value: f64,
}

/// Benefits whose value lies inside an inclusive range
pub async fn value_range(
    State(state): State<ServerState>,
    Query(query): Query<ValueRangeQuery>,
) -> AppResult<Json<Vec<Benefit>>> {
    let repo = BenefitRepository::new(state.db.clone());
    let benefits = repo
        .find_by_value_range(query.min_value, query.max_value)
        .await?;
    Ok(Json(benefits))
}

/// All benefits an employee is enrolled in
pub async fn get_by_employee(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Vec<Benefit>>> {
    let service = RelationService::new(state.db.clone());
    let benefits = service.benefits_of_employee(&employee_id).await?;
    Ok(Json(benefits))
}

/// Deduplicated benefits held by a department's employees
pub async fn get_by_department(
    State(state): State<ServerState>,
    Path(department_id): Path<String>,
) -> AppResult<Json<Vec<Benefit>>> {
    let service = RelationService::new(state.db.clone());
    let benefits = service.benefits_of_department(&department_id).await?;
    Ok(Json(benefits))
}

/// Employees enrolled in at least `min_benefits` benefits
pub async fn employees_with_min_benefits(
    State(state): State<ServerState>,
    Path(min_benefits): Path<usize>,
) -> AppResult<Json<Vec<Employee>>> {
    let service = RelationService::new(state.db.clone());
    let employees = service.employees_with_min_benefits(min_benefits).await?;
    Ok(Json(employees))
}

/// Get a benefit by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Benefit>> {
    let repo = BenefitRepository::new(state.db.clone());
    let benefit = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Benefit"))?;
    Ok(Json(benefit))
}

/// Update a benefit
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BenefitUpdate>,
) -> AppResult<Json<Benefit>> {
    let service = IntegrityService::new(state.db.clone());
    let benefit = service.update_benefit(&id, payload).await?;
    Ok(Json(benefit))
}

/// Delete a benefit
///
/// Enrollments are not cascaded; employees keep the id in `benefits_id`.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let service = IntegrityService::new(state.db.clone());
    service.delete_benefit(&id).await?;
    Ok(Json(DeleteResponse {
        detail: "Benefit deleted".to_string(),
    }))
}
