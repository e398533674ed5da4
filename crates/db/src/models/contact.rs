//! Contact entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vantage_core::types::{DbId, Timestamp};

/// A row from the `contacts` table.
///
/// Invariant: `first_name` and `last_name` are non-empty for every
/// persisted row; `company_id` is null or references an existing company.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub company_id: Option<DbId>,
    pub description: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_anniversary: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a contact.
///
/// `company_name` and `company_id` are resolver inputs, not columns: a
/// non-empty name resolves (or creates) a company before the insert, an
/// id must reference an existing company, and neither leaves the contact
/// unlinked.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub company_id: Option<DbId>,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_anniversary: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for updating a contact. Same shape as [`CreateContact`]: the edit
/// form submits the whole record and every nullable column is replaced.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContact {
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub company_id: Option<DbId>,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_anniversary: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
}
