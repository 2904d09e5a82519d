//! Utility module - shared helpers and types
//!
//! - [`AppError`] / [`AppResult`] - application error type and result alias
//! - [`pagination`] - list envelope and query parameters
//! - [`validation`] - input validation helpers
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;
pub mod pagination;
pub mod result;
pub mod validation;

pub use error::AppError;
pub use pagination::{Page, Pagination};
pub use result::AppResult;
