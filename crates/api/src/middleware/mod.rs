//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- resolves the session cookie to a user.
//! - [`rbac::RequireAdmin`] -- additionally requires an `admin` profile.
//! - [`gate::GatePass`] -- requires a valid admin gate cookie.

pub mod auth;
pub mod gate;
pub mod rbac;
