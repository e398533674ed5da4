//! Lead source configuration model and DTOs.
//!
//! Lead sources are the vocabulary offered when a lead's `source` field
//! is filled in. They live in a configuration table owned by the record
//! store, managed through admin CRUD.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vantage_core::types::{DbId, Timestamp};

/// A row from the `lead_sources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeadSource {
    pub id: DbId,
    pub name: String,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a lead source.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLeadSource {
    pub name: String,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

/// DTO for updating a lead source. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLeadSource {
    pub name: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}
