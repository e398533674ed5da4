//! Repository for the `tasks` table.

use sqlx::PgPool;
use vantage_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, subject, due_date, status, priority, is_critical, amount, contact_id, \
    lead_id, assigned_to, description, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTask,
        status: &str,
        priority: &str,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (subject, due_date, status, priority, is_critical, amount, \
                                contact_id, lead_id, assigned_to, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.subject)
            .bind(input.due_date)
            .bind(status)
            .bind(priority)
            .bind(input.is_critical)
            .bind(input.amount)
            .bind(input.contact_id)
            .bind(input.lead_id)
            .bind(input.assigned_to)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks, critical first, then by due date (soonest first,
    /// undated last).
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks \
             ORDER BY is_critical DESC, due_date ASC NULLS LAST, created_at DESC"
        );
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Update a task, replacing every writer-managed column with the
    /// submitted value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
        status: &str,
        priority: &str,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                subject = $2,
                due_date = $3,
                status = $4,
                priority = $5,
                is_critical = $6,
                amount = $7,
                contact_id = $8,
                lead_id = $9,
                assigned_to = $10,
                description = $11,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.subject)
            .bind(input.due_date)
            .bind(status)
            .bind(priority)
            .bind(input.is_critical)
            .bind(input.amount)
            .bind(input.contact_id)
            .bind(input.lead_id)
            .bind(input.assigned_to)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
