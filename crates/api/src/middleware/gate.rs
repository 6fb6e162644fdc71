//! Admin gate cookie extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use reel_core::error::CoreError;
use reel_core::gate::verify_token;

use crate::auth::session::GATE_COOKIE;
use crate::error::AppError;
use crate::state::AppState;

/// Returns `true` if the request carries an unexpired, correctly signed
/// gate cookie.
pub fn has_valid_gate(jar: &CookieJar, state: &AppState) -> bool {
    jar.get(GATE_COOKIE).is_some_and(|cookie| {
        verify_token(
            &state.config.session.secret,
            cookie.value(),
            chrono::Utc::now().timestamp(),
        )
    })
}

/// Proof that the caller passed the admin gate. Rejects with 403 otherwise.
pub struct GatePass;

impl FromRequestParts<AppState> for GatePass {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        if has_valid_gate(&jar, state) {
            Ok(GatePass)
        } else {
            Err(AppError::Core(CoreError::Forbidden(
                "Enter the access code first".into(),
            )))
        }
    }
}
