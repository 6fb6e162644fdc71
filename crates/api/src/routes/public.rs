//! Read-only routes for the public site, plus the contact form.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{categories, features, messages, projects, settings, team};
use crate::state::AppState;

/// Public routes mounted at the `/api/v1` root.
///
/// ```text
/// GET  /projects        -> projects::list
/// GET  /projects/{id}   -> projects::get_by_id
/// GET  /team            -> team::list
/// GET  /categories      -> categories::list
/// GET  /features        -> features::list
/// GET  /settings        -> settings::list
/// POST /contact         -> messages::submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(projects::list))
        .route("/projects/{id}", get(projects::get_by_id))
        .route("/team", get(team::list))
        .route("/categories", get(categories::list))
        .route("/features", get(features::list))
        .route("/settings", get(settings::list))
        .route("/contact", post(messages::submit))
}
