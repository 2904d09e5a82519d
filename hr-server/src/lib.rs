//! HR Server - employee record-keeping service
//!
//! # Architecture overview
//!
//! The server fronts an embedded document store with no cross-table
//! constraints, so reference validation and inverse-list maintenance are
//! done in the service layer:
//!
//! - **Database** (`db`): embedded SurrealDB storage, models and repositories
//! - **Services** (`services`): referential integrity and cross-table queries
//! - **HTTP API** (`api`): RESTful routes and handlers
//!
//! # Module structure
//!
//! ```text
//! hr-server/src/
//! ├── core/          # Configuration, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # Integrity checks, composite queries
//! ├── db/            # Models, repositories, embedded database
//! └── utils/         # Errors, pagination, validation, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use services::{IntegrityService, RelationService};
pub use utils::{AppError, AppResult, Page, Pagination};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
