//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vantage_core::error::CoreError;
use vantage_core::permissions::{Action, Module};
use vantage_core::types::DbId;
use vantage_core::validation::{
    normalize_optional, validate_priority, validate_task, PRIORITY_MEDIUM, TASK_STATUS_OPEN,
};
use vantage_db::models::task::{CreateTask, Task, UpdateTask};
use vantage_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/tasks
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    auth.require(Module::Tasks, Action::Create)?;

    let input = normalize_create(input);
    let status = input.status.as_deref().unwrap_or(TASK_STATUS_OPEN);
    validate_task(&input.subject, status).map_err(CoreError::Validation)?;
    let priority = validated_priority(input.priority.as_deref())?;

    let task = TaskRepo::create(&state.pool, &input, status, priority).await?;

    tracing::info!(task_id = task.id, user_id = auth.user_id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/tasks
pub async fn list(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    auth.require(Module::Tasks, Action::View)?;

    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    auth.require(Module::Tasks, Action::View)?;

    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// PUT /api/v1/tasks/{id}
///
/// Full-record replacement of the writer-managed columns.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    auth.require(Module::Tasks, Action::Edit)?;

    let input = normalize_update(input);
    let status = input.status.as_deref().unwrap_or(TASK_STATUS_OPEN);
    validate_task(&input.subject, status).map_err(CoreError::Validation)?;
    let priority = validated_priority(input.priority.as_deref())?;

    let task = TaskRepo::update(&state.pool, id, &input, status, priority)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    auth.require(Module::Tasks, Action::Delete)?;

    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Task", id }));
    }

    tracing::info!(task_id = id, user_id = auth.user_id, "Task deleted");

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

fn normalize_create(input: CreateTask) -> CreateTask {
    CreateTask {
        subject: input.subject.trim().to_string(),
        due_date: input.due_date,
        status: normalize_optional(input.status),
        priority: normalize_optional(input.priority),
        is_critical: input.is_critical,
        amount: input.amount,
        contact_id: input.contact_id,
        lead_id: input.lead_id,
        assigned_to: input.assigned_to,
        description: normalize_optional(input.description),
    }
}

fn normalize_update(input: UpdateTask) -> UpdateTask {
    UpdateTask {
        subject: input.subject.trim().to_string(),
        due_date: input.due_date,
        status: normalize_optional(input.status),
        priority: normalize_optional(input.priority),
        is_critical: input.is_critical,
        amount: input.amount,
        contact_id: input.contact_id,
        lead_id: input.lead_id,
        assigned_to: input.assigned_to,
        description: normalize_optional(input.description),
    }
}
