//! Payroll API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::api::CountResponse;
use crate::core::ServerState;
use crate::db::models::{Payroll, PayrollCreate, PayrollUpdate};
use crate::db::repository::PayrollRepository;
use crate::services::{IntegrityService, RelationService};
use crate::utils::{AppError, AppResult, Page, Pagination};

/// Delete response carrying the cascade-clear count
#[derive(Debug, Serialize, Deserialize)]
pub struct PayrollDeleteResponse {
    pub detail: String,
    pub employees_updated: usize,
}

/// Create a payroll, validating the referenced employee first
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PayrollCreate>,
) -> AppResult<(StatusCode, Json<Payroll>)> {
    let service = IntegrityService::new(state.db.clone());
    let payroll = service.create_payroll(payload).await?;
    Ok((StatusCode::CREATED, Json(payroll)))
}

/// List one page of payrolls
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<Page<Payroll>>> {
    page.validate()?;
    let repo = PayrollRepository::new(state.db.clone());
    let total = repo.count().await?;
    let data = repo.find_page(page.skip, page.limit).await?;
    Ok(Json(Page::new(total, page, data)))
}

/// Count payrolls
pub async fn count(State(state): State<ServerState>) -> AppResult<Json<CountResponse>> {
    let repo = PayrollRepository::new(state.db.clone());
    let count = repo.count().await?;
    Ok(Json(CountResponse { count }))
}

#[derive(Deserialize)]
pub struct DepartmentIdQuery {
    pub department_id: String,
}

/// Payrolls of a department's roster, in roster order
pub async fn get_by_department(
    State(state): State<ServerState>,
    Query(query): Query<DepartmentIdQuery>,
) -> AppResult<Json<Vec<Payroll>>> {
    let service = RelationService::new(state.db.clone());
    let payrolls = service.payrolls_of_department(&query.department_id).await?;
    Ok(Json(payrolls))
}

/// Get a payroll by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Payroll>> {
    let repo = PayrollRepository::new(state.db.clone());
    let payroll = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Payroll"))?;
    Ok(Json(payroll))
}

/// Update a payroll
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PayrollUpdate>,
) -> AppResult<Json<Payroll>> {
    let service = IntegrityService::new(state.db.clone());
    let payroll = service.update_payroll(&id, payload).await?;
    Ok(Json(payroll))
}

/// Delete a payroll, clearing `pay_roll_id` on every employee that held it
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<PayrollDeleteResponse>> {
    let service = IntegrityService::new(state.db.clone());
    let employees_updated = service.delete_payroll(&id).await?;
    Ok(Json(PayrollDeleteResponse {
        detail: "Payroll deleted".to_string(),
        employees_updated,
    }))
}
