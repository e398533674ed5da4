pub mod auth;
pub mod company;
pub mod contact;
pub mod health;
pub mod lead;
pub mod lead_source;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                     login (public)
/// /auth/me                        current user (requires auth)
///
/// /companies                      list, create
/// /companies/{id}                 get, update, delete
///
/// /contacts                       list, create
/// /contacts/{id}                  get, update, delete
///
/// /leads                          list, create (responses carry follow_up_status)
/// /leads/{id}                     get, update, delete
///
/// /tasks                          list, create
/// /tasks/{id}                     get, update, delete
///
/// /lead-sources                   list, create (admin only)
/// /lead-sources/{id}              update, delete (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/companies", company::router())
        .nest("/contacts", contact::router())
        .nest("/leads", lead::router())
        .nest("/tasks", task::router())
        .nest("/lead-sources", lead_source::router())
}
