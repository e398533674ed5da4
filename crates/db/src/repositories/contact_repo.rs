//! Repository for the `contacts` table.
//!
//! The company reference in the DTO is resolved by the caller before the
//! write; repositories receive the already-resolved `company_id` and never
//! consult the `company_name` field.

use sqlx::PgPool;
use vantage_core::types::DbId;

use crate::models::contact::{Contact, CreateContact, UpdateContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, title, first_name, last_name, email, phone, mobile, company_id, \
    description, date_of_birth, date_of_anniversary, tags, created_at, updated_at";

/// Provides CRUD operations for contacts.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContact,
        company_id: Option<DbId>,
    ) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (title, first_name, last_name, email, phone, mobile, \
                                   company_id, description, date_of_birth, \
                                   date_of_anniversary, tags)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.title)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.mobile)
            .bind(company_id)
            .bind(&input.description)
            .bind(input.date_of_birth)
            .bind(input.date_of_anniversary)
            .bind(&input.tags)
            .fetch_one(pool)
            .await
    }

    /// Find a contact by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all contacts ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at DESC");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    /// Count all contacts. Used by tests asserting zero-write aborts.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(pool)
            .await
    }

    /// Update a contact, replacing every writer-managed column with the
    /// submitted value. Absent optionals become NULL rather than keeping
    /// the previous value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContact,
        company_id: Option<DbId>,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET
                title = $2,
                first_name = $3,
                last_name = $4,
                email = $5,
                phone = $6,
                mobile = $7,
                company_id = $8,
                description = $9,
                date_of_birth = $10,
                date_of_anniversary = $11,
                tags = $12,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.mobile)
            .bind(company_id)
            .bind(&input.description)
            .bind(input.date_of_birth)
            .bind(input.date_of_anniversary)
            .bind(&input.tags)
            .fetch_optional(pool)
            .await
    }

    /// Delete a contact by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
