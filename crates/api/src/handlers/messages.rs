//! Contact form submissions and the admin inbox.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reel_core::contact::{MAX_BODY_LEN, MIN_BODY_LEN};
use reel_core::error::CoreError;
use reel_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use reel_core::types::{DbId, Timestamp};
use reel_db::models::message::{CreateMessage, Message};
use reel_db::repositories::MessageRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /contact`.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(custom(function = "reel_core::contact::validate_subject"))]
    pub subject: String,
    #[validate(length(
        min = MIN_BODY_LEN,
        max = MAX_BODY_LEN,
        message = "Message must be between 10 and 5000 characters"
    ))]
    pub body: String,
}

/// Acknowledgement returned to the visitor.
#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub id: DbId,
    pub created_at: Timestamp,
}

/// One page of the admin inbox.
#[derive(Debug, Serialize)]
pub struct MessagePage {
    pub items: Vec<Message>,
    pub total: i64,
    pub unread: i64,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Message",
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/contact
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<ContactRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ContactReceipt>>)> {
    let input = ContactRequest {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        subject: input.subject.trim().to_string(),
        body: input.body.trim().to_string(),
    };
    input.validate()?;

    let message = MessageRepo::create(
        &state.pool,
        &CreateMessage {
            name: input.name,
            email: input.email,
            subject: input.subject,
            body: input.body,
        },
    )
    .await?;
    tracing::info!(message_id = message.id, subject = %message.subject, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ContactReceipt {
                id: message.id,
                created_at: message.created_at,
            },
        }),
    ))
}

/// GET /api/v1/admin/messages
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<MessagePage>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let items = MessageRepo::list(&state.pool, limit, offset).await?;
    let (total, unread) = MessageRepo::counts(&state.pool).await?;

    Ok(Json(DataResponse {
        data: MessagePage {
            items,
            total,
            unread,
        },
    }))
}

/// PATCH /api/v1/admin/messages/{id}/read
pub async fn mark_read(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Message>>> {
    let message = MessageRepo::mark_read(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: message }))
}

/// DELETE /api/v1/admin/messages/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !MessageRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(message_id = id, user_id = admin.user_id, "Message deleted");
    Ok(StatusCode::NO_CONTENT)
}
