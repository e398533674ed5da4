//! Handlers for the `/contacts` resource.
//!
//! The write path is: validate required fields, resolve the company
//! reference, persist, return the stored row. Validation failures abort
//! before any store mutation. Responses mask PII fields for callers
//! without the `contacts:view_pii` grant.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vantage_core::error::CoreError;
use vantage_core::masking::{mask_email, mask_phone};
use vantage_core::permissions::{Action, Module};
use vantage_core::types::DbId;
use vantage_core::validation::{normalize_optional, validate_contact};
use vantage_db::models::contact::{Contact, CreateContact, UpdateContact};
use vantage_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::resolve::resolve_company;
use crate::state::AppState;

/// POST /api/v1/contacts
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateContact>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    auth.require(Module::Contacts, Action::Create)?;

    let input = normalize_create(input);
    validate_contact(&input.first_name, &input.last_name).map_err(CoreError::Validation)?;

    let company_id =
        resolve_company(&state.pool, input.company_id, input.company_name.as_deref()).await?;

    let contact = ContactRepo::create(&state.pool, &input, company_id).await?;

    tracing::info!(contact_id = contact.id, user_id = auth.user_id, "Contact created");

    Ok((StatusCode::CREATED, Json(masked(contact, &auth))))
}

/// GET /api/v1/contacts
pub async fn list(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Contact>>> {
    auth.require(Module::Contacts, Action::View)?;

    let contacts = ContactRepo::list(&state.pool).await?;
    let contacts = contacts.into_iter().map(|c| masked(c, &auth)).collect();
    Ok(Json(contacts))
}

/// GET /api/v1/contacts/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Contact>> {
    auth.require(Module::Contacts, Action::View)?;

    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    Ok(Json(masked(contact, &auth)))
}

/// PUT /api/v1/contacts/{id}
///
/// Full-record replacement: the edit form submits the whole contact, and
/// every nullable column takes the submitted value (absent fields become
/// NULL). Only this contact row is touched; leads referencing a previous
/// company linkage are left as they are.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContact>,
) -> AppResult<Json<Contact>> {
    auth.require(Module::Contacts, Action::Edit)?;

    let input = normalize_update(input);
    validate_contact(&input.first_name, &input.last_name).map_err(CoreError::Validation)?;

    let company_id =
        resolve_company(&state.pool, input.company_id, input.company_name.as_deref()).await?;

    let contact = ContactRepo::update(&state.pool, id, &input, company_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    Ok(Json(masked(contact, &auth)))
}

/// DELETE /api/v1/contacts/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    auth.require(Module::Contacts, Action::Delete)?;

    let deleted = ContactRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }));
    }

    tracing::info!(contact_id = id, user_id = auth.user_id, "Contact deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Mask email and phone fields unless the caller may view PII.
fn masked(mut contact: Contact, auth: &AuthUser) -> Contact {
    if !auth.can_view_pii() {
        contact.email = contact.email.as_deref().map(mask_email);
        contact.phone = contact.phone.as_deref().map(mask_phone);
        contact.mobile = contact.mobile.as_deref().map(mask_phone);
    }
    contact
}

/// Trim required names and collapse blank optionals to NULL.
fn normalize_create(input: CreateContact) -> CreateContact {
    CreateContact {
        title: normalize_optional(input.title),
        first_name: input.first_name.trim().to_string(),
        last_name: input.last_name.trim().to_string(),
        email: normalize_optional(input.email),
        phone: normalize_optional(input.phone),
        mobile: normalize_optional(input.mobile),
        company_id: input.company_id,
        company_name: normalize_optional(input.company_name),
        description: normalize_optional(input.description),
        date_of_birth: input.date_of_birth,
        date_of_anniversary: input.date_of_anniversary,
        tags: normalize_tags(input.tags),
    }
}

fn normalize_update(input: UpdateContact) -> UpdateContact {
    UpdateContact {
        title: normalize_optional(input.title),
        first_name: input.first_name.trim().to_string(),
        last_name: input.last_name.trim().to_string(),
        email: normalize_optional(input.email),
        phone: normalize_optional(input.phone),
        mobile: normalize_optional(input.mobile),
        company_id: input.company_id,
        company_name: normalize_optional(input.company_name),
        description: normalize_optional(input.description),
        date_of_birth: input.date_of_birth,
        date_of_anniversary: input.date_of_anniversary,
        tags: normalize_tags(input.tags),
    }
}

/// Trim tags and drop blanks; order is preserved.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
