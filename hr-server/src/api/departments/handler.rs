//! Department API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::api::{CountResponse, DeleteResponse};
use crate::core::ServerState;
use crate::db::ids::parse_record_id;
use crate::db::models::{Department, DepartmentCreate, DepartmentUpdate};
use crate::db::repository::DepartmentRepository;
use crate::services::IntegrityService;
use crate::utils::{AppError, AppResult, Page, Pagination};

/// Create a department, validating its references first
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<(StatusCode, Json<Department>)> {
    let service = IntegrityService::new(state.db.clone());
    let department = service.create_department(payload).await?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// List one page of departments
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<Page<Department>>> {
    page.validate()?;
    let repo = DepartmentRepository::new(state.db.clone());
    let total = repo.count().await?;
    let data = repo.find_page(page.skip, page.limit).await?;
    Ok(Json(Page::new(total, page, data)))
}

/// Count departments
pub async fn count(State(state): State<ServerState>) -> AppResult<Json<CountResponse>> {
    let repo = DepartmentRepository::new(state.db.clone());
    let count = repo.count().await?;
    Ok(Json(CountResponse { count }))
}

#[derive(Deserialize)]
pub struct NameQuery {
    pub name: String,
}

/// Paginated name substring search (case-insensitive)
pub async fn get_by_name(
    State(state): State<ServerState>,
    Query(query): Query<NameQuery>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<Page<Department>>> {
    page.validate()?;
    let repo = DepartmentRepository::new(state.db.clone());
    let total = repo.count_by_name_contains(&query.name).await?;
    let data = repo
        .find_by_name_contains(&query.name, page.skip, page.limit)
        .await?;
    Ok(Json(Page::new(total, page, data)))
}

/// Departments whose roster contains an employee
pub async fn get_by_employee(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Vec<Department>>> {
    let employee = parse_record_id("employee", &employee_id)?;
    let repo = DepartmentRepository::new(state.db.clone());
    let departments = repo.find_by_employee(&employee).await?;
    Ok(Json(departments))
}

/// Get a department by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Department>> {
    let repo = DepartmentRepository::new(state.db.clone());
    let department = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Department"))?;
    Ok(Json(department))
}

/// Update a department
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DepartmentUpdate>,
) -> AppResult<Json<Department>> {
    let service = IntegrityService::new(state.db.clone());
    let department = service.update_department(&id, payload).await?;
    Ok(Json(department))
}

/// Delete a department
///
/// Member employees keep their `department_id`; the dangling reference is
/// accepted rather than cascaded.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let service = IntegrityService::new(state.db.clone());
    service.delete_department(&id).await?;
    Ok(Json(DeleteResponse {
        detail: "Department deleted".to_string(),
    }))
}
