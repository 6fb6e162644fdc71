//! Contact message model and DTOs.

use reel_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// Insert DTO. Built by the contact handler after validation.
#[derive(Debug, Clone)]
pub struct CreateMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}
