//! Repository for the `leads` table.

use sqlx::PgPool;
use vantage_core::types::DbId;

use crate::models::lead::{CreateLead, Lead, UpdateLead};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, assignment_name, contact_id, company_id, stage, amount, closing_date, \
    source, priority, assigned_to, description, created_at, updated_at";

/// Provides CRUD operations for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead, returning the created row.
    ///
    /// `stage` and `priority` are passed separately because the handler
    /// has already validated and canonicalized them.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLead,
        company_id: Option<DbId>,
        stage: &str,
        priority: &str,
    ) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (assignment_name, contact_id, company_id, stage, amount, \
                                closing_date, source, priority, assigned_to, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&input.assignment_name)
            .bind(input.contact_id)
            .bind(company_id)
            .bind(stage)
            .bind(input.amount)
            .bind(input.closing_date)
            .bind(&input.source)
            .bind(priority)
            .bind(input.assigned_to)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a lead by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all leads ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads ORDER BY created_at DESC");
        sqlx::query_as::<_, Lead>(&query).fetch_all(pool).await
    }

    /// Count all leads. Used by tests asserting zero-write aborts.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM leads")
            .fetch_one(pool)
            .await
    }

    /// Update a lead, replacing every writer-managed column with the
    /// submitted value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLead,
        company_id: Option<DbId>,
        stage: &str,
        priority: &str,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET
                assignment_name = $2,
                contact_id = $3,
                company_id = $4,
                stage = $5,
                amount = $6,
                closing_date = $7,
                source = $8,
                priority = $9,
                assigned_to = $10,
                description = $11,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(&input.assignment_name)
            .bind(input.contact_id)
            .bind(company_id)
            .bind(stage)
            .bind(input.amount)
            .bind(input.closing_date)
            .bind(&input.source)
            .bind(priority)
            .bind(input.assigned_to)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a lead by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
