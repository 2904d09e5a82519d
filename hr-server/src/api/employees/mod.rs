//! Employee API Module
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /employees | POST | Create employee |
//! | /employees | GET | Paginated list |
//! | /employees/count | GET | Total count |
//! | /employees/get_by_admission_date | GET | Admitted on a day (`?admission_date=`) |
//! | /employees/get_by_cpf/{cpf} | GET | Look up by CPF |
//! | /employees/get_by_name/{name} | GET | Name substring search |
//! | /employees/get_by_department/{department_id} | GET | Members of a department |
//! | /employees/get_by_benefit/{benefit_id} | GET | Enrolled in a benefit |
//! | /employees/benefits/{benefit_id}/departments/{department_id}/employees | GET | Benefit within department |
//! | /employees/{id} | GET/PUT/DELETE | Single record |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create).get(handler::list))
        .route("/count", get(handler::count))
        .route("/get_by_admission_date", get(handler::get_by_admission_date))
        .route("/get_by_cpf/{cpf}", get(handler::get_by_cpf))
        .route("/get_by_name/{name}", get(handler::get_by_name))
        .route(
            "/get_by_department/{department_id}",
            get(handler::get_by_department),
        )
        .route("/get_by_benefit/{benefit_id}", get(handler::get_by_benefit))
        .route(
            "/benefits/{benefit_id}/departments/{department_id}/employees",
            get(handler::get_by_benefit_and_department),
        )
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
