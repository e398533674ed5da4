//! Task entity model and DTOs.
//!
//! Critical flag and amount are first-class typed columns, not markers
//! embedded in the description text.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vantage_core::types::{DbId, Timestamp};

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub subject: String,
    pub due_date: Option<Timestamp>,
    pub status: String,
    pub priority: String,
    pub is_critical: bool,
    pub amount: Option<f64>,
    pub contact_id: Option<DbId>,
    pub lead_id: Option<DbId>,
    pub assigned_to: Option<DbId>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a task. `status` defaults to `"open"`, `priority`
/// to `"Medium"`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub subject: String,
    pub due_date: Option<Timestamp>,
    pub status: Option<String>,
    pub priority: Option<String>,
    #[serde(default)]
    pub is_critical: bool,
    pub amount: Option<f64>,
    pub contact_id: Option<DbId>,
    pub lead_id: Option<DbId>,
    pub assigned_to: Option<DbId>,
    pub description: Option<String>,
}

/// DTO for updating a task. Full-record replacement, same shape as
/// [`CreateTask`].
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub subject: String,
    pub due_date: Option<Timestamp>,
    pub status: Option<String>,
    pub priority: Option<String>,
    #[serde(default)]
    pub is_critical: bool,
    pub amount: Option<f64>,
    pub contact_id: Option<DbId>,
    pub lead_id: Option<DbId>,
    pub assigned_to: Option<DbId>,
    pub description: Option<String>,
}
