//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::handlers::file_upload::UploadFileResponse;
use safesender_core::models::DownloadedFile;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SafeSender Storage API",
        version = "0.1.0",
        description = "File storage API: uploads content plus metadata, returns an opaque token, and resolves that token back to the file later. All endpoints are versioned under /api/v0/."
    ),
    paths(
        handlers::file_upload::upload_file,
        handlers::file_download::download_file,
    ),
    components(schemas(UploadFileResponse, DownloadedFile, ErrorResponse)),
    tags(
        (name = "files", description = "File upload and download")
    )
)]
pub struct ApiDoc;
