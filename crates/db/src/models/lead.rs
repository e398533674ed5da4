//! Lead entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vantage_core::types::{DbId, Timestamp};

/// A row from the `leads` table.
///
/// `stage` holds one of the canonical stage strings (see
/// `vantage_core::lead`). The follow-up status shown on listings is
/// derived from `stage` and `closing_date` at read time and never stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lead {
    pub id: DbId,
    pub assignment_name: String,
    pub contact_id: Option<DbId>,
    pub company_id: Option<DbId>,
    pub stage: String,
    pub amount: Option<f64>,
    /// Follow-up timestamp driving the TAT window.
    pub closing_date: Option<Timestamp>,
    pub source: Option<String>,
    pub priority: String,
    pub assigned_to: Option<DbId>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a lead. `company_id`/`company_name` are resolver
/// inputs (see `CreateContact`); `priority` defaults to `"Medium"`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLead {
    pub assignment_name: String,
    pub contact_id: Option<DbId>,
    pub company_id: Option<DbId>,
    pub company_name: Option<String>,
    pub stage: String,
    pub amount: Option<f64>,
    pub closing_date: Option<Timestamp>,
    pub source: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<DbId>,
    pub description: Option<String>,
}

/// DTO for updating a lead. Full-record replacement, same shape as
/// [`CreateLead`].
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLead {
    pub assignment_name: String,
    pub contact_id: Option<DbId>,
    pub company_id: Option<DbId>,
    pub company_name: Option<String>,
    pub stage: String,
    pub amount: Option<f64>,
    pub closing_date: Option<Timestamp>,
    pub source: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<DbId>,
    pub description: Option<String>,
}
