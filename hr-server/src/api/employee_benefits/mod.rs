//! Employee Benefit Assignment API Module
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /employee_benefit | POST | Create assignment |
//! | /employee_benefit/get_all | GET | Paginated list |
//! | /employee_benefit/count | GET | Total count |
//! | /employee_benefit/active_benefits_by_employee_id | GET | Active benefits (`?employee_id=`) |
//! | /employee_benefit/{id} | GET/PUT/DELETE | Single record |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Assignment router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/employee_benefit", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/get_all", get(handler::list))
        .route("/count", get(handler::count))
        .route(
            "/active_benefits_by_employee_id",
            get(handler::active_benefits_by_employee_id),
        )
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
