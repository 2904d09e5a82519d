//! Department API Module
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /departments | POST | Create department |
//! | /departments | GET | Paginated list |
//! | /departments/count | GET | Total count |
//! | /departments/get_by_name | GET | Paginated name search (`?name=&skip=&limit=`) |
//! | /departments/get_by_employee/{employee_id} | GET | Departments listing an employee |
//! | /departments/{id} | GET/PUT/DELETE | Single record |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Department router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/departments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create).get(handler::list))
        .route("/count", get(handler::count))
        .route("/get_by_name", get(handler::get_by_name))
        .route(
            "/get_by_employee/{employee_id}",
            get(handler::get_by_employee),
        )
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
