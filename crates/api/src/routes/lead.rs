//! Route definitions for the `/leads` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::lead;
use crate::state::AppState;

/// Lead routes mounted at `/leads`.
///
/// ```text
/// GET    /        -> list (responses carry follow_up_status)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update (full-record replacement)
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lead::list).post(lead::create))
        .route(
            "/{id}",
            get(lead::get_by_id).put(lead::update).delete(lead::delete),
        )
}
