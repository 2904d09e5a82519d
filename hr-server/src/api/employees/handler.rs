//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::api::{CountResponse, DeleteResponse};
use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::services::{BenefitDepartmentEmployee, IntegrityService, RelationService};
use crate::utils::{AppError, AppResult, Page, Pagination};

/// Create an employee, validating its references first
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let service = IntegrityService::new(state.db.clone());
    let employee = service.create_employee(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// List one page of employees
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<Page<Employee>>> {
    page.validate()?;
    let repo = EmployeeRepository::new(state.db.clone());
    let total = repo.count().await?;
    let data = repo.find_page(page.skip, page.limit).await?;
    Ok(Json(Page::new(total, page, data)))
}

/// Count employees
pub async fn count(State(state): State<ServerState>) -> AppResult<Json<CountResponse>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let count = repo.count().await?;
    Ok(Json(CountResponse { count }))
}

#[derive(Deserialize)]
pub struct AdmissionDateQuery {
    pub admission_date: String,
}

/// Employees admitted on one calendar day (UTC)
pub async fn get_by_admission_date(
    State(state): State<ServerState>,
    Query(query): Query<AdmissionDateQuery>,
) -> AppResult<Json<Vec<Employee>>> {
    let day = NaiveDate::parse_from_str(&query.admission_date, "%Y-%m-%d")
        .map_err(|_| AppError::validation("admission_date must be formatted as YYYY-MM-DD"))?;

    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = start + chrono::Duration::days(1);

    let repo = EmployeeRepository::new(state.db.clone());
    let employees = repo
        .find_by_admission_window(start.into(), end.into())
        .await?;
    Ok(Json(employees))
}

/// Look up the employee holding a CPF
pub async fn get_by_cpf(
    State(state): State<ServerState>,
    Path(cpf): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo
        .find_by_cpf(&cpf)
        .await?
        .ok_or_else(|| AppError::not_found("Employee"))?;
    Ok(Json(employee))
}

/// Employees whose name contains the fragment (case-insensitive)
pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employees = repo.find_by_name_contains(&name).await?;
    Ok(Json(employees))
}

/// Employees assigned to a department
pub async fn get_by_department(
    State(state): State<ServerState>,
    Path(department_id): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    let service = RelationService::new(state.db.clone());
    let employees = service.employees_of_department(&department_id).await?;
    Ok(Json(employees))
}

/// Employees enrolled in a benefit
pub async fn get_by_benefit(
    State(state): State<ServerState>,
    Path(benefit_id): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    let service = RelationService::new(state.db.clone());
    let employees = service.employees_of_benefit(&benefit_id).await?;
    Ok(Json(employees))
}

/// Employees enrolled in a benefit within one department, joined with the
/// benefit and department documents
pub async fn get_by_benefit_and_department(
    State(state): State<ServerState>,
    Path((benefit_id, department_id)): Path<(String, String)>,
) -> AppResult<Json<Vec<BenefitDepartmentEmployee>>> {
    let service = RelationService::new(state.db.clone());
    let rows = service
        .employees_of_benefit_and_department(&benefit_id, &department_id)
        .await?;
    Ok(Json(rows))
}

/// Get an employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee"))?;
    Ok(Json(employee))
}

/// Update an employee, keeping department rosters in sync
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let service = IntegrityService::new(state.db.clone());
    let employee = service.update_employee(&id, payload).await?;
    Ok(Json(employee))
}

/// Delete an employee and remove it from its department roster
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let service = IntegrityService::new(state.db.clone());
    service.delete_employee(&id).await?;
    Ok(Json(DeleteResponse {
        detail: "Employee deleted".to_string(),
    }))
}
