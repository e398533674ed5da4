//! Handlers for the `/leads` resource.
//!
//! Lead responses carry a derived `follow_up_status` label computed per
//! row against the current time. The label is display state, not stored
//! state.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use vantage_core::error::CoreError;
use vantage_core::lead::{classify_follow_up, FollowUpStatus, LeadStage};
use vantage_core::permissions::{Action, Module};
use vantage_core::types::{DbId, Timestamp};
use vantage_core::validation::{
    normalize_optional, validate_lead, validate_priority, PRIORITY_MEDIUM,
};
use vantage_db::models::lead::{CreateLead, Lead, UpdateLead};
use vantage_db::repositories::LeadRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::resolve::resolve_company;
use crate::state::AppState;

/// A lead plus its derived follow-up status.
#[derive(Debug, Serialize)]
pub struct LeadResponse {
    #[serde(flatten)]
    pub lead: Lead,
    /// `"In TAT"`, `"Lost"`, `"No Date"`, or `""` for closed leads.
    pub follow_up_status: &'static str,
}

impl LeadResponse {
    fn new(lead: Lead, now: Timestamp) -> Self {
        // Stored stages are canonical; anything else (hand-edited data)
        // falls back to no status rather than failing the read.
        let status = match LeadStage::from_str_value(&lead.stage) {
            Ok(stage) => classify_follow_up(stage, lead.closing_date, now),
            Err(_) => FollowUpStatus::None,
        };
        Self {
            lead,
            follow_up_status: status.label(),
        }
    }
}

/// POST /api/v1/leads
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateLead>,
) -> AppResult<(StatusCode, Json<LeadResponse>)> {
    auth.require(Module::Leads, Action::Create)?;

    let input = normalize_create(input);
    let stage =
        validate_lead(&input.assignment_name, &input.stage).map_err(CoreError::Validation)?;
    let priority = validated_priority(input.priority.as_deref())?;

    let company_id =
        resolve_company(&state.pool, input.company_id, input.company_name.as_deref()).await?;

    let lead =
        LeadRepo::create(&state.pool, &input, company_id, stage.as_str(), priority).await?;

    tracing::info!(lead_id = lead.id, user_id = auth.user_id, "Lead created");

    Ok((StatusCode::CREATED, Json(LeadResponse::new(lead, Utc::now()))))
}

/// GET /api/v1/leads
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<LeadResponse>>> {
    auth.require(Module::Leads, Action::View)?;

    let now = Utc::now();
    let leads = LeadRepo::list(&state.pool).await?;
    let leads = leads
        .into_iter()
        .map(|lead| LeadResponse::new(lead, now))
        .collect();
    Ok(Json(leads))
}

/// GET /api/v1/leads/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<LeadResponse>> {
    auth.require(Module::Leads, Action::View)?;

    let lead = LeadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;
    Ok(Json(LeadResponse::new(lead, Utc::now())))
}

/// PUT /api/v1/leads/{id}
///
/// Full-record replacement of the writer-managed columns.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLead>,
) -> AppResult<Json<LeadResponse>> {
    auth.require(Module::Leads, Action::Edit)?;

    let input = normalize_update(input);
    let stage =
        validate_lead(&input.assignment_name, &input.stage).map_err(CoreError::Validation)?;
    let priority = validated_priority(input.priority.as_deref())?;

    let company_id =
        resolve_company(&state.pool, input.company_id, input.company_name.as_deref()).await?;

    let lead = LeadRepo::update(&state.pool, id, &input, company_id, stage.as_str(), priority)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;
    Ok(Json(LeadResponse::new(lead, Utc::now())))
}

/// DELETE /api/v1/leads/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    auth.require(Module::Leads, Action::Delete)?;

    let deleted = LeadRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Lead", id }));
    }

    tracing::info!(lead_id = id, user_id = auth.user_id, "Lead deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Default a missing priority to Medium, otherwise validate it.
fn validated_priority(priority: Option<&str>) -> Result<&str, AppError> {
    match priority {
        None => Ok(PRIORITY_MEDIUM),
        Some(p) => {
            validate_priority(p).map_err(CoreError::Validation)?;
            Ok(p)
        }
    }
}

fn normalize_create(input: CreateLead) -> CreateLead {
    CreateLead {
        assignment_name: input.assignment_name.trim().to_string(),
        contact_id: input.contact_id,
        company_id: input.company_id,
        company_name: normalize_optional(input.company_name),
        stage: input.stage.trim().to_string(),
        amount: input.amount,
        closing_date: input.closing_date,
        source: normalize_optional(input.source),
        priority: normalize_optional(input.priority),
        assigned_to: input.assigned_to,
        description: normalize_optional(input.description),
    }
}

fn normalize_update(input: UpdateLead) -> UpdateLead {
    UpdateLead {
        assignment_name: input.assignment_name.trim().to_string(),
        contact_id: input.contact_id,
        company_id: input.company_id,
        company_name: normalize_optional(input.company_name),
        stage: input.stage.trim().to_string(),
        amount: input.amount,
        closing_date: input.closing_date,
        source: normalize_optional(input.source),
        priority: normalize_optional(input.priority),
        assigned_to: input.assigned_to,
        description: normalize_optional(input.description),
    }
}
