//! Company reference resolution for contact and lead writes.
//!
//! A write payload may reference a company by free-text name or explicit
//! id. Resolution runs exactly once per write, before the dependent entity
//! is persisted, so a stored contact or lead never points at a company
//! that does not exist.

use sqlx::PgPool;
use vantage_core::company::CompanyRef;
use vantage_core::error::CoreError;
use vantage_core::types::DbId;
use vantage_db::repositories::CompanyRepo;

use crate::error::AppError;

/// Resolve a payload's company reference to a canonical company id.
///
/// - Non-empty trimmed name: exact, case-sensitive lookup on
///   `companies.name`; a miss creates the company and returns the new id.
/// - Explicit id (no name): the row must exist; a dangling id is a
///   400-class validation failure and the enclosing write aborts.
/// - Neither: `Ok(None)` -- the entity is stored unlinked.
///
/// Two concurrent writes carrying the same new name can both miss the
/// lookup; the insert that loses on `uq_companies_name` re-reads and
/// returns the winner's id, so both writes land on a single company row.
pub async fn resolve_company(
    pool: &PgPool,
    company_id: Option<DbId>,
    company_name: Option<&str>,
) -> Result<Option<DbId>, AppError> {
    match CompanyRef::from_payload(company_id, company_name) {
        CompanyRef::None => Ok(None),
        CompanyRef::Id(id) => match CompanyRepo::find_by_id(pool, id).await? {
            Some(company) => Ok(Some(company.id)),
            None => Err(AppError::Core(CoreError::Validation(format!(
                "Invalid company_id: no company with id {id}"
            )))),
        },
        CompanyRef::Name(name) => {
            if let Some(existing) = CompanyRepo::find_by_name(pool, &name).await? {
                return Ok(Some(existing.id));
            }
            match CompanyRepo::create_by_name(pool, &name).await {
                Ok(company) => {
                    tracing::info!(company_id = company.id, name = %name, "Company auto-created during save");
                    Ok(Some(company.id))
                }
                Err(err) if is_unique_violation(&err, "uq_companies_name") => {
                    let existing = CompanyRepo::find_by_name(pool, &name).await?.ok_or_else(|| {
                        AppError::InternalError(format!(
                            "Company '{name}' missing after unique-constraint conflict"
                        ))
                    })?;
                    Ok(Some(existing.id))
                }
                Err(err) => Err(err.into()),
            }
        }
    }
}

/// Whether a sqlx error is a Postgres unique violation on the named constraint.
fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some(constraint)
    )
}
