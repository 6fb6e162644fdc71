//! Site setting model.

use reel_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Setting {
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: Timestamp,
}

/// Request body for upserting a setting.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveSetting {
    pub value: serde_json::Value,
}
