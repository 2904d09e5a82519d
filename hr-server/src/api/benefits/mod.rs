//! Benefit API Module
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /benefits | POST | Create benefit |
//! | /benefits | GET | Paginated list |
//! | /benefits/count | GET | Total count |
//! | /benefits/get_by_name | GET | Name substring search (`?name=`) |
//! | /benefits/get_by_type | GET | Exact type match (`?type=`) |
//! | /benefits/sort_by_value | GET | Sorted by value (`?order=asc|desc`) |
//! | /benefits/value_range | GET | Value range (`?min_value=&max_value=`) |
//! | /benefits/get/benefit_by_employee/{employee_id} | GET | Benefits of an employee |
//! | /benefits/departments/{department_id}/benefits | GET | Benefits across a department |
//! | /benefits/employees/many_benefits/{min_benefits} | GET | Employees with many benefits |
//! | /benefits/{id} | GET/PUT/DELETE | Single record |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Benefit router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/benefits", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create).get(handler::list))
        .route("/count", get(handler::count))
        .route("/get_by_name", get(handler::get_by_name))
        .route("/get_by_type", get(handler::get_by_type))
        .route("/sort_by_value", get(handler::sort_by_value))
        .route("/value_range", get(handler::value_range))
        .route(
            "/get/benefit_by_employee/{employee_id}",
            get(handler::get_by_employee),
        )
        .route(
            "/departments/{department_id}/benefits",
            get(handler::get_by_department),
        )
        .route(
            "/employees/many_benefits/{min_benefits}",
            get(handler::employees_with_min_benefits),
        )
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
