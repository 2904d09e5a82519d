//! Employee Benefit Assignment API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::api::{CountResponse, DeleteResponse};
use crate::core::ServerState;
use crate::db::models::{Benefit, EmployeeBenefit, EmployeeBenefitCreate, EmployeeBenefitUpdate};
use crate::db::repository::EmployeeBenefitRepository;
use crate::services::{IntegrityService, RelationService};
use crate::utils::{AppError, AppResult, Page, Pagination};

/// Create an assignment, validating both referenced records first
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeBenefitCreate>,
) -> AppResult<(StatusCode, Json<EmployeeBenefit>)> {
    let service = IntegrityService::new(state.db.clone());
    let assignment = service.create_assignment(payload).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// List one page of assignments
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<Page<EmployeeBenefit>>> {
    page.validate()?;
    let repo = EmployeeBenefitRepository::new(state.db.clone());
    let total = repo.count().await?;
    let data = repo.find_page(page.skip, page.limit).await?;
    Ok(Json(Page::new(total, page, data)))
}

/// Count assignments
pub async fn count(State(state): State<ServerState>) -> AppResult<Json<CountResponse>> {
    let repo = EmployeeBenefitRepository::new(state.db.clone());
    let count = repo.count().await?;
    Ok(Json(CountResponse { count }))
}

#[derive(Deserialize)]
pub struct EmployeeIdQuery {
    pub employee_id: String,
}

/// Active benefits behind an employee's assignments
pub async fn active_benefits_by_employee_id(
    State(state): State<ServerState>,
    Query(query): Query<EmployeeIdQuery>,
) -> AppResult<Json<Vec<Benefit>>> {
    let service = RelationService::new(state.db.clone());
    let benefits = service
        .active_benefits_of_employee(&query.employee_id)
        .await?;
    Ok(Json(benefits))
}

/// Get an assignment by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeBenefit>> {
    let repo = EmployeeBenefitRepository::new(state.db.clone());
    let assignment = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Assignment"))?;
    Ok(Json(assignment))
}

/// Update an assignment, re-validating any supplied reference
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeBenefitUpdate>,
) -> AppResult<Json<EmployeeBenefit>> {
    let service = IntegrityService::new(state.db.clone());
    let assignment = service.update_assignment(&id, payload).await?;
    Ok(Json(assignment))
}

/// Delete an assignment
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let service = IntegrityService::new(state.db.clone());
    service.delete_assignment(&id).await?;
    Ok(Json(DeleteResponse {
        detail: "Assignment deleted".to_string(),
    }))
}
