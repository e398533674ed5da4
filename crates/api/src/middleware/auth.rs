//! JWT-based authentication extractor for Axum handlers.
//!
//! The extractor resolves the caller's role into a [`PermissionSet`]
//! exactly once per request; handlers check access through
//! [`AuthUser::require`] instead of re-deriving role rules per call site.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vantage_core::error::CoreError;
use vantage_core::permissions::{Action, Module, PermissionSet};
use vantage_core::types::DbId;
use vantage_db::repositories::RoleRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     auth.require(Module::Contacts, Action::View)?;
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's role name (e.g. `"admin"`, `"manager"`, `"agent"`).
    pub role: String,
    /// The role's capability set, resolved once at extraction time.
    pub permissions: PermissionSet,
}

impl AuthUser {
    /// Reject with 403 Forbidden unless the caller holds the grant.
    pub fn require(&self, module: Module, action: Action) -> Result<(), AppError> {
        if self.permissions.allows(module, action) {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::Forbidden(format!(
                "Missing permission {}:{}",
                module.as_str(),
                action.as_str()
            ))))
        }
    }

    /// Whether the caller may see unmasked contact PII fields.
    pub fn can_view_pii(&self) -> bool {
        self.permissions.allows(Module::Contacts, Action::ViewPii)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let role = RoleRepo::find_by_name(&state.pool, &claims.role)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(format!(
                    "Unknown role '{}'",
                    claims.role
                )))
            })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: role.name,
            permissions: PermissionSet::from_entries(&role.permissions),
        })
    }
}
