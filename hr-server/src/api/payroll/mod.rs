//! Payroll API Module
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /payroll | POST | Create payroll |
//! | /payroll/get_all | GET | Paginated list |
//! | /payroll/count | GET | Total count |
//! | /payroll/get_by_department | GET | Roster payrolls (`?department_id=`) |
//! | /payroll/{id} | GET/PUT/DELETE | Single record |

mod handler;

pub use handler::PayrollDeleteResponse;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Payroll router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/payroll", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/get_all", get(handler::list))
        .route("/count", get(handler::count))
        .route("/get_by_department", get(handler::get_by_department))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
