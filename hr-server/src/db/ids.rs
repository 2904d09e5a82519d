//! Record id parsing for API-facing identifiers
//!
//! Identifiers cross the HTTP boundary as strings in either bare-key form
//! (`h7k2m9`) or the canonical `table:key` form. Parsing is table-scoped:
//! an id naming a different table is rejected, so a benefit id can never be
//! used where an employee id is expected.

use surrealdb::RecordId;

use super::repository::{RepoError, RepoResult};

/// Parse an API-facing id string into a [`RecordId`] for the given table.
pub fn parse_record_id(table: &str, raw: &str) -> RepoResult<RecordId> {
    let id = if raw.contains(':') {
        let parsed: RecordId = raw
            .parse()
            .map_err(|_| RepoError::InvalidId(format!("Invalid id: {raw}")))?;
        if parsed.table() != table {
            return Err(RepoError::InvalidId(format!(
                "Invalid id: {raw} (expected table '{table}')"
            )));
        }
        parsed
    } else {
        if raw.is_empty() {
            return Err(RepoError::InvalidId("Invalid id: empty".to_string()));
        }
        RecordId::from_table_key(table, raw)
    };
    Ok(id)
}
