//! Admin routes. Every handler here takes [`RequireAdmin`] as its first
//! extractor.
//!
//! [`RequireAdmin`]: crate::middleware::rbac::RequireAdmin

use axum::routing::{delete, get, patch, post, put};
use axum::Router;

use crate::handlers::{categories, features, messages, projects, settings, team, uploads};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST   /projects                -> projects::create
/// PUT    /projects/{id}           -> projects::update
/// DELETE /projects/{id}           -> projects::delete
/// POST   /categories              -> categories::create
/// PUT    /categories/{id}         -> categories::rename
/// DELETE /categories/{id}         -> categories::delete
/// POST   /features                -> features::create
/// PUT    /features/{id}           -> features::update
/// DELETE /features/{id}           -> features::delete
/// POST   /team                    -> team::create
/// PUT    /team/{id}               -> team::update
/// DELETE /team/{id}               -> team::delete
/// GET    /messages                -> messages::list
/// PATCH  /messages/{id}/read      -> messages::mark_read
/// DELETE /messages/{id}           -> messages::delete
/// PUT    /settings/{key}          -> settings::upsert
/// POST   /uploads/{bucket}        -> uploads::upload
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", post(projects::create))
        .route("/projects/{id}", put(projects::update).delete(projects::delete))
        .route("/categories", post(categories::create))
        .route(
            "/categories/{id}",
            put(categories::rename).delete(categories::delete),
        )
        .route("/features", post(features::create))
        .route("/features/{id}", put(features::update).delete(features::delete))
        .route("/team", post(team::create))
        .route("/team/{id}", put(team::update).delete(team::delete))
        .route("/messages", get(messages::list))
        .route("/messages/{id}/read", patch(messages::mark_read))
        .route("/messages/{id}", delete(messages::delete))
        .route("/settings/{key}", put(settings::upsert))
        .route("/uploads/{bucket}", post(uploads::upload))
}
