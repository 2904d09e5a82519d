//! Repository Module
//!
//! CRUD and lookup operations over the SurrealDB tables. Write queries bind
//! every field individually so record links are stored as native links, not
//! strings.

pub mod benefit;
pub mod department;
pub mod employee;
pub mod employee_benefit;
pub mod payroll;

pub use benefit::BenefitRepository;
pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
pub use employee_benefit::EmployeeBenefitRepository;
pub use payroll::PayrollRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    InvalidId(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:key" strings at the API boundary
// =============================================================================
//
// surrealdb::RecordId everywhere inside the process:
//   - parse: crate::db::ids::parse_record_id(TABLE, raw), table-scoped
//   - render: id.to_string() gives "table:key"
//   - CRUD: db.select(id) / db.delete(id) take RecordId directly

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
