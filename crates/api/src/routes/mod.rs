pub mod admin;
pub mod auth;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects, /team, /categories, /features, /settings   public reads
/// /contact                                              contact form
/// /gate                                                 admin gate code
/// /auth/login, /auth/logout, /auth/session              session cookie auth
/// /admin/...                                            admin writes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/gate", auth::gate_router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}
