//! Pagination types
//!
//! Query-string parameters and the response envelope shared by every
//! paginated list endpoint.

use serde::{Deserialize, Serialize};

use crate::utils::AppError;

/// Default page size when `limit` is not supplied
pub const DEFAULT_LIMIT: u32 = 10;

/// `?skip=&limit=` query parameters
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Reject a page request with a zero limit. `skip` is unsigned, so
    /// negative values never reach this point.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.limit < 1 {
            return Err(AppError::validation("limit must be at least 1"));
        }
        Ok(())
    }
}

/// Paginated response envelope: the full match count plus one page of results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub total: i64,
    pub skip: u32,
    pub limit: u32,
    pub data: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(total: i64, page: Pagination, data: Vec<T>) -> Self {
        Self {
            total,
            skip: page.skip,
            limit: page.limit,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_params_missing() {
        let page: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let page: Pagination = serde_json::from_str(r#"{"skip":0,"limit":0}"#).unwrap();
        assert!(page.validate().is_err());
        let page: Pagination = serde_json::from_str(r#"{"skip":5,"limit":1}"#).unwrap();
        assert!(page.validate().is_ok());
    }
}
