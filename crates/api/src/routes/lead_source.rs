//! Route definitions for the `/lead-sources` configuration resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::lead_source;
use crate::state::AppState;

/// Lead source routes mounted at `/lead-sources`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create (admin only)
/// PUT    /{id}    -> update (admin only)
/// DELETE /{id}    -> delete (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lead_source::list).post(lead_source::create))
        .route(
            "/{id}",
            put(lead_source::update).delete(lead_source::delete),
        )
}
