use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use safesender_core::models::DownloadedFile;

#[utoipa::path(
    get,
    path = "/api/v0/files/{token}",
    tag = "files",
    params(
        ("token" = String, Path, description = "File token returned by upload")
    ),
    responses(
        (status = 200, description = "File content and metadata", body = DownloadedFile),
        (status = 404, description = "No file for the given token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(token = %token, operation = "download_file"))]
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<Json<DownloadedFile>, HttpAppError> {
    let downloaded = state.files.download(&token, &state.shutdown).await?;
    Ok(Json(downloaded))
}
