//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Checks run at service entry, before any store write.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: employee, department, benefit
pub const MAX_NAME_LEN: usize = 200;

/// Notes and descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: position, location, extension, benefit type, dates kept as text
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Brazilian CPF: exactly 11 digits, no punctuation
pub const CPF_LEN: usize = 11;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a CPF: exactly [`CPF_LEN`] ASCII digits.
pub fn validate_cpf(value: &str) -> Result<(), AppError> {
    if value.len() != CPF_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::validation(format!(
            "cpf must be exactly {CPF_LEN} digits"
        )));
    }
    Ok(())
}

/// Validate a payroll reference month in `YYYY-MM` form with a real month number.
pub fn validate_reference_month(value: &str) -> Result<(), AppError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 7
        && bytes[..4].iter().all(|b| b.is_ascii_digit())
        && bytes[4] == b'-'
        && bytes[5..].iter().all(|b| b.is_ascii_digit());
    let month_ok = well_formed
        && matches!(value[5..].parse::<u8>(), Ok(m) if (1..=12).contains(&m));
    if !month_ok {
        return Err(AppError::validation(
            "reference_month must be in YYYY-MM format",
        ));
    }
    Ok(())
}

/// Validate a monetary amount: finite and non-negative.
pub fn validate_money(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be a non-negative amount"
        )));
    }
    Ok(())
}
