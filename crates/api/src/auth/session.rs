//! Opaque session tokens and cookie construction.
//!
//! The browser holds a random token in the `reel_session` cookie; the
//! database only ever sees its SHA-256 digest. The short-lived `reel_gate`
//! cookie carries a signed gate token and is unrelated to the session.

use axum_extra::extract::cookie::{Cookie, SameSite};
use reel_core::hashing::sha256_hex;
use uuid::Uuid;

/// Name of the login session cookie.
pub const SESSION_COOKIE: &str = "reel_session";

/// Name of the admin gate cookie.
pub const GATE_COOKIE: &str = "reel_gate";

/// Generate a new session token. Returns `(plaintext, sha256_hex)`.
///
/// The plaintext is two v4 UUIDs in simple form (244 random bits).
pub fn generate_session_token() -> (String, String) {
    let plaintext = format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    );
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Digest used to look a presented token up in `user_sessions`.
pub fn hash_session_token(token: &str) -> String {
    sha256_hex(token.as_bytes())
}

/// `HttpOnly`, `SameSite=Lax` cookie scoped to the whole site.
pub fn build_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// A cookie that, when added to a jar via `remove`, clears `name`.
pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build(name).path("/").build()
}
