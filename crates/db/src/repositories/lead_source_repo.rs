//! Repository for the `lead_sources` configuration table.

use sqlx::PgPool;
use vantage_core::types::DbId;

use crate::models::lead_source::{CreateLeadSource, LeadSource, UpdateLeadSource};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, is_active, sort_order, created_at, updated_at";

/// Provides CRUD operations for lead sources.
pub struct LeadSourceRepo;

impl LeadSourceRepo {
    /// Insert a new lead source, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLeadSource,
    ) -> Result<LeadSource, sqlx::Error> {
        let query = format!(
            "INSERT INTO lead_sources (name, is_active, sort_order)
             VALUES ($1, COALESCE($2, true), COALESCE($3, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LeadSource>(&query)
            .bind(&input.name)
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a lead source by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LeadSource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lead_sources WHERE id = $1");
        sqlx::query_as::<_, LeadSource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all lead sources in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<LeadSource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lead_sources ORDER BY sort_order, name");
        sqlx::query_as::<_, LeadSource>(&query).fetch_all(pool).await
    }

    /// Update a lead source. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLeadSource,
    ) -> Result<Option<LeadSource>, sqlx::Error> {
        let query = format!(
            "UPDATE lead_sources SET
                name = COALESCE($2, name),
                is_active = COALESCE($3, is_active),
                sort_order = COALESCE($4, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LeadSource>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a lead source by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lead_sources WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
