//! Route definitions for `/auth` and `/gate`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, gate};
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /login    -> login (requires gate cookie)
/// POST /logout   -> logout
/// GET  /session  -> session (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/session", get(auth::session))
}

/// Routes mounted at `/gate`.
///
/// ```text
/// GET  /   -> status
/// POST /   -> submit
/// ```
pub fn gate_router() -> Router<AppState> {
    Router::new().route("/", get(gate::status).post(gate::submit))
}
