//! Service layer
//!
//! - [`IntegrityService`] - reference checks and inverse-list maintenance on writes
//! - [`RelationService`] - cross-table read queries

pub mod integrity;
pub mod relations;

pub use integrity::IntegrityService;
pub use relations::{BenefitDepartmentEmployee, RelationService};
