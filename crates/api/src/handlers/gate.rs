//! Handlers for the admin gate code.
//!
//! The gate only decides whether the login form may be used. It grants no
//! access on its own.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::CookieJar;
use reel_core::error::CoreError;
use reel_core::gate::{code_matches, issue_token, validate_code_format};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::auth::session::{build_cookie, GATE_COOKIE};
use crate::error::{AppError, AppResult};
use crate::middleware::gate::has_valid_gate;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /gate`.
#[derive(Debug, Deserialize, Validate)]
pub struct GateRequest {
    #[validate(custom(function = "numeric_code"))]
    pub code: String,
}

fn numeric_code(code: &str) -> Result<(), ValidationError> {
    validate_code_format(code).map_err(|_| {
        let mut err = ValidationError::new("numeric");
        err.message = Some("Access code must be a number".into());
        err
    })
}

/// Gate status returned by both endpoints.
#[derive(Debug, Serialize)]
pub struct GateStatus {
    pub granted: bool,
    /// Unix seconds at which a freshly issued gate cookie stops working.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

/// GET /api/v1/gate
pub async fn status(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Json<DataResponse<GateStatus>> {
    Json(DataResponse {
        data: GateStatus {
            granted: has_valid_gate(&jar, &state),
            expires_at: None,
        },
    })
}

/// POST /api/v1/gate
///
/// 400 for a non-numeric code, 401 for a wrong one. On success sets the
/// `reel_gate` cookie.
pub async fn submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<GateRequest>,
) -> AppResult<(CookieJar, Json<DataResponse<GateStatus>>)> {
    let code = input.code.trim().to_string();
    GateRequest { code: code.clone() }.validate()?;

    if !code_matches(&state.config.session.secret, &state.config.gate.code, &code) {
        tracing::warn!("Wrong admin gate code submitted");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Incorrect access code".into(),
        )));
    }

    let now = chrono::Utc::now().timestamp();
    let ttl = state.config.gate.ttl_minutes;
    let token = issue_token(&state.config.session.secret, now, ttl);
    let jar = jar.add(build_cookie(
        GATE_COOKIE,
        token,
        state.config.session.cookie_secure,
    ));
    tracing::info!("Admin gate opened");

    Ok((
        jar,
        Json(DataResponse {
            data: GateStatus {
                granted: true,
                expires_at: Some(now + ttl * 60),
            },
        }),
    ))
}
