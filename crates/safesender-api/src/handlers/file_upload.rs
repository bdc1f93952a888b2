use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use safesender_core::models::UploadFile;
use safesender_core::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadFileResponse {
    /// Opaque token referencing the stored file in all later requests.
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/api/v0/files",
    tag = "files",
    responses(
        (status = 200, description = "File uploaded successfully", body = UploadFileResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_file"))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadFileResponse>, HttpAppError> {
    let mut file_name: Option<String> = None;
    let mut file_data: Option<Vec<u8>> = None;
    let mut password_hash: Option<String> = None;
    let mut original_file_size: Option<i64> = None;

    while let Some(field) = multipart.next_field().await.map_err(HttpAppError::from)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                file_name = field.file_name().map(str::to_string);
                let data = field.bytes().await.map_err(HttpAppError::from)?;
                file_data = Some(data.to_vec());
            }
            Some("password_hash") => {
                password_hash = Some(field.text().await.map_err(HttpAppError::from)?);
            }
            Some("original_file_size") => {
                let text = field.text().await.map_err(HttpAppError::from)?;
                let size = text.trim().parse::<i64>().map_err(|_| {
                    AppError::InvalidInput("original_file_size must be an integer".to_string())
                })?;
                original_file_size = Some(size);
            }
            _ => {}
        }
    }

    let file_name = file_name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("Missing file part with a filename".to_string()))?;
    let file_data = file_data
        .ok_or_else(|| AppError::InvalidInput("Missing file part".to_string()))?;
    let password_hash = password_hash
        .ok_or_else(|| AppError::InvalidInput("Missing password_hash field".to_string()))?;

    let max = state.config.max_file_size_bytes();
    if file_data.len() > max {
        return Err(AppError::PayloadTooLarge(format!(
            "File exceeds the maximum upload size of {} bytes",
            max
        ))
        .into());
    }

    let request = UploadFile {
        original_file_size: original_file_size.unwrap_or(file_data.len() as i64),
        file_name,
        password_hash,
        file_data,
    };

    let token = state.files.upload(request, &state.shutdown).await?;

    Ok(Json(UploadFileResponse { token }))
}
