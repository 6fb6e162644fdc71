//! Well-known profile role constants.
//!
//! These must match the `ck_profiles_role` check constraint in
//! `20260301000002_create_users_and_profiles.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_VIEWER: &str = "viewer";
