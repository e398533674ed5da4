//! Role entity model.

use serde::Serialize;
use sqlx::FromRow;
use vantage_core::types::{DbId, Timestamp};

/// A row from the `roles` table.
///
/// `permissions` holds `"module:action"` capability entries parsed into a
/// `vantage_core::permissions::PermissionSet` once per request.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub name: String,
    pub permissions: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
