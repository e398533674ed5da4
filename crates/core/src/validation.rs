//! Write-path validation helpers.
//!
//! Validation runs before any store mutation: a failed check aborts the
//! save with zero rows written. Used by both the DB and API layers.

use crate::lead::LeadStage;

/// Task status strings as stored in `tasks.status`.
pub const TASK_STATUS_OPEN: &str = "open";
pub const TASK_STATUS_COMPLETED: &str = "completed";

/// All valid task status strings.
pub const VALID_TASK_STATUSES: &[&str] = &[TASK_STATUS_OPEN, TASK_STATUS_COMPLETED];

/// Priority strings shared by leads and tasks.
pub const PRIORITY_LOW: &str = "Low";
pub const PRIORITY_MEDIUM: &str = "Medium";
pub const PRIORITY_HIGH: &str = "High";

/// All valid priority strings.
pub const VALID_PRIORITIES: &[&str] = &[PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_HIGH];

/// Validate that a priority string is one of the accepted values.
pub fn validate_priority(priority: &str) -> Result<(), String> {
    if VALID_PRIORITIES.contains(&priority) {
        Ok(())
    } else {
        Err(format!(
            "Invalid priority '{priority}'. Must be one of: {}",
            VALID_PRIORITIES.join(", ")
        ))
    }
}

/// Require that a field is non-empty after trimming.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(())
    }
}

/// Trim an optional free-text field, collapsing blank values to `None`.
///
/// Form submissions send absent fields and cleared fields interchangeably
/// as missing or empty strings; both persist as NULL.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    let trimmed = value.as_deref().map(str::trim)?;
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validate the required fields of a contact payload.
pub fn validate_contact(first_name: &str, last_name: &str) -> Result<(), String> {
    require_non_empty("first_name", first_name)?;
    require_non_empty("last_name", last_name)?;
    Ok(())
}

/// Validate the required fields of a lead payload, returning the parsed
/// stage on success.
pub fn validate_lead(assignment_name: &str, stage: &str) -> Result<LeadStage, String> {
    require_non_empty("assignment_name", assignment_name)?;
    LeadStage::from_str_value(stage)
}

/// Validate the required fields of a task payload.
pub fn validate_task(subject: &str, status: &str) -> Result<(), String> {
    require_non_empty("subject", subject)?;
    if !VALID_TASK_STATUSES.contains(&status) {
        return Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_TASK_STATUSES.join(", ")
        ));
    }
    Ok(())
}
