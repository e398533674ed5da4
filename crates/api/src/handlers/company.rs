//! Handlers for the `/companies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vantage_core::error::CoreError;
use vantage_core::permissions::{Action, Module};
use vantage_core::types::DbId;
use vantage_core::validation::{normalize_optional, require_non_empty};
use vantage_db::models::company::{Company, CreateCompany, UpdateCompany};
use vantage_db::repositories::CompanyRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/companies
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateCompany>,
) -> AppResult<(StatusCode, Json<Company>)> {
    auth.require(Module::Companies, Action::Create)?;

    let input = normalize_create(input);
    require_non_empty("name", &input.name).map_err(CoreError::Validation)?;

    let company = CompanyRepo::create(&state.pool, &input).await?;

    tracing::info!(company_id = company.id, user_id = auth.user_id, "Company created");

    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /api/v1/companies
pub async fn list(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Company>>> {
    auth.require(Module::Companies, Action::View)?;

    let companies = CompanyRepo::list(&state.pool).await?;
    Ok(Json(companies))
}

/// GET /api/v1/companies/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Company>> {
    auth.require(Module::Companies, Action::View)?;

    let company = CompanyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id,
        }))?;
    Ok(Json(company))
}

/// PUT /api/v1/companies/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCompany>,
) -> AppResult<Json<Company>> {
    auth.require(Module::Companies, Action::Edit)?;

    let input = normalize_update(input);
    require_non_empty("name", &input.name).map_err(CoreError::Validation)?;

    let company = CompanyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id,
        }))?;
    Ok(Json(company))
}

/// DELETE /api/v1/companies/{id}
///
/// Blocked with 409 while contacts or leads still reference the company.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    auth.require(Module::Companies, Action::Delete)?;

    let deleted = CompanyRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id,
        }));
    }

    tracing::info!(company_id = id, user_id = auth.user_id, "Company deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Trim the name and collapse blank optionals to NULL before the insert.
fn normalize_create(input: CreateCompany) -> CreateCompany {
    CreateCompany {
        name: input.name.trim().to_string(),
        company_type: normalize_optional(input.company_type),
        registration_number: normalize_optional(input.registration_number),
        phone: normalize_optional(input.phone),
        email: normalize_optional(input.email),
        website: normalize_optional(input.website),
        address_line1: normalize_optional(input.address_line1),
        address_line2: normalize_optional(input.address_line2),
        city: normalize_optional(input.city),
        state: normalize_optional(input.state),
        country: normalize_optional(input.country),
        postal_code: normalize_optional(input.postal_code),
        description: normalize_optional(input.description),
    }
}

fn normalize_update(input: UpdateCompany) -> UpdateCompany {
    UpdateCompany {
        name: input.name.trim().to_string(),
        company_type: normalize_optional(input.company_type),
        registration_number: normalize_optional(input.registration_number),
        phone: normalize_optional(input.phone),
        email: normalize_optional(input.email),
        website: normalize_optional(input.website),
        address_line1: normalize_optional(input.address_line1),
        address_line2: normalize_optional(input.address_line2),
        city: normalize_optional(input.city),
        state: normalize_optional(input.state),
        country: normalize_optional(input.country),
        postal_code: normalize_optional(input.postal_code),
        description: normalize_optional(input.description),
    }
}
