//! Image uploads into the portfolio and team buckets.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use reel_core::storage::{content_type_for, generate_object_path, image_extension, validate_bucket};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Where an uploaded object landed.
#[derive(Debug, Serialize)]
pub struct UploadedObject {
    pub bucket: String,
    /// Path to store on the record (`cover_image`, `gallery`, `photo_path`, ...).
    pub path: String,
    pub url: String,
    pub size_bytes: usize,
}

/// POST /api/v1/admin/uploads/{bucket}
///
/// Accepts a multipart form with a required `file` field. The object is
/// stored under a random `<uuid>.<ext>` path; the original file name is not
/// kept.
pub async fn upload(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(bucket): Path<String>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadedObject>>)> {
    validate_bucket(&bucket)?;

    let mut file_data: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        file_data = Some((filename, data.to_vec()));
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let ext = image_extension(&filename)?;
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    let max = state.config.max_upload_bytes;
    if data.len() > max {
        return Err(AppError::BadRequest(format!(
            "File is {} bytes; the limit is {max} bytes",
            data.len()
        )));
    }

    let path = generate_object_path(&ext);
    let size_bytes = data.len();
    state
        .storage
        .upload(&bucket, &path, data, content_type_for(&ext))
        .await?;
    tracing::info!(
        bucket = %bucket,
        path = %path,
        size_bytes,
        user_id = admin.user_id,
        "Image uploaded"
    );

    let url = state.storage.public_url(&bucket, &path);
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadedObject {
                bucket,
                path,
                url,
                size_bytes,
            },
        }),
    ))
}
