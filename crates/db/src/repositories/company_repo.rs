//! Repository for the `companies` table.
//!
//! `find_by_name` is the resolution lookup: exact, case-sensitive match
//! on the unique `name` column. `create_by_name` is the implicit-creation
//! path used when a contact or lead references a company that does not
//! exist yet.

use sqlx::PgPool;
use vantage_core::types::DbId;

use crate::models::company::{Company, CreateCompany, UpdateCompany};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, company_type, registration_number, phone, email, website, \
    address_line1, address_line2, city, state, country, postal_code, \
    description, created_at, updated_at";

/// Provides CRUD operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Insert a fully specified company, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCompany) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (name, company_type, registration_number, phone, email, \
                                    website, address_line1, address_line2, city, state, \
                                    country, postal_code, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(&input.name)
            .bind(&input.company_type)
            .bind(&input.registration_number)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.website)
            .bind(&input.address_line1)
            .bind(&input.address_line2)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.country)
            .bind(&input.postal_code)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Insert a company row carrying only a name.
    ///
    /// Used by the resolver when a write references a company name with no
    /// matching row. A concurrent identical insert loses on
    /// `uq_companies_name`; the caller handles that conflict.
    pub async fn create_by_name(pool: &PgPool, name: &str) -> Result<Company, sqlx::Error> {
        let query = format!("INSERT INTO companies (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Company>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a company by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a company by exact, case-sensitive name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE name = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all companies ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies ORDER BY name");
        sqlx::query_as::<_, Company>(&query).fetch_all(pool).await
    }

    /// Update a company. The edit form submits the full record, so every
    /// nullable column is replaced rather than patched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET
                name = $2,
                company_type = $3,
                registration_number = $4,
                phone = $5,
                email = $6,
                website = $7,
                address_line1 = $8,
                address_line2 = $9,
                city = $10,
                state = $11,
                country = $12,
                postal_code = $13,
                description = $14,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.company_type)
            .bind(&input.registration_number)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.website)
            .bind(&input.address_line1)
            .bind(&input.address_line2)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.country)
            .bind(&input.postal_code)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a company by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while contacts or leads still
    /// reference the row (`ON DELETE RESTRICT`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
