//! Handlers for the `/lead-sources` configuration resource.
//!
//! Lead sources are the vocabulary behind the lead `source` field. Any
//! authenticated caller with `lead_sources:view` can list them; mutations
//! are admin-only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vantage_core::error::CoreError;
use vantage_core::permissions::{Action, Module};
use vantage_core::types::DbId;
use vantage_core::validation::require_non_empty;
use vantage_db::models::lead_source::{CreateLeadSource, LeadSource, UpdateLeadSource};
use vantage_db::repositories::LeadSourceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/lead-sources
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<LeadSource>>>> {
    auth.require(Module::LeadSources, Action::View)?;

    let sources = LeadSourceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: sources }))
}

/// POST /api/v1/lead-sources
///
/// Admin only.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateLeadSource>,
) -> AppResult<(StatusCode, Json<LeadSource>)> {
    let input = CreateLeadSource {
        name: input.name.trim().to_string(),
        ..input
    };
    require_non_empty("name", &input.name).map_err(CoreError::Validation)?;

    let source = LeadSourceRepo::create(&state.pool, &input).await?;

    tracing::info!(source_id = source.id, user_id = admin.user_id, "Lead source created");

    Ok((StatusCode::CREATED, Json(source)))
}

/// PUT /api/v1/lead-sources/{id}
///
/// Admin only. Only the provided fields are changed.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLeadSource>,
) -> AppResult<Json<LeadSource>> {
    if let Some(name) = &input.name {
        require_non_empty("name", name).map_err(CoreError::Validation)?;
    }

    let source = LeadSourceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LeadSource",
            id,
        }))?;
    Ok(Json(source))
}

/// DELETE /api/v1/lead-sources/{id}
///
/// Admin only.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = LeadSourceRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "LeadSource",
            id,
        }));
    }

    tracing::info!(source_id = id, user_id = admin.user_id, "Lead source deleted");

    Ok(StatusCode::NO_CONTENT)
}
