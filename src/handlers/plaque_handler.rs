use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::io::Write;

use crate::config::AppState;
use crate::models::plaque_model::{ImageKind, UploadedImage};
use crate::services::plaque_service::PlaqueService;
use crate::utils::error_log::ErrorLog;

/// Declared-type and temp-file checks shared between the HTTP handler
/// and the tests. The MIME type is trusted as declared; only its
/// subtype is inspected.
pub fn validate_upload(
    upload: &UploadedImage,
    error_log: &dyn ErrorLog,
) -> Result<ImageKind, (StatusCode, &'static str)> {
    let extension = upload.extension();

    let kind = match extension.as_deref().and_then(ImageKind::from_extension) {
        Some(kind) => kind,
        None => {
            error_log.record(&format!(
                "Unsupported image type: {}",
                extension.unwrap_or_else(|| upload.mime_type.clone())
            ));
            return Err((StatusCode::BAD_REQUEST, "Unsupported image type"));
        }
    };

    if !upload.temp_path.exists() {
        error_log.record(&format!(
            "Uploaded file not found: {}",
            upload.temp_path.display()
        ));
        return Err((StatusCode::INTERNAL_SERVER_ERROR, "Uploaded file not found"));
    }

    Ok(kind)
}

pub async fn generate_plaque_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    // 1. Parse Multipart
    // We expect a single field "image"
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();

        if name == "image" {
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();

            // Read Bytes
            let data = match field.bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        format!("File upload error: {}", e),
                    )
                        .into_response()
                }
            };

            // Spool to temp storage; the guard deletes the file when the
            // request scope ends.
            let mut temp = match tempfile::NamedTempFile::new() {
                Ok(temp) => temp,
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        format!("File upload error: {}", e),
                    )
                        .into_response()
                }
            };
            if let Err(e) = temp.write_all(&data) {
                return (
                    StatusCode::BAD_REQUEST,
                    format!("File upload error: {}", e),
                )
                    .into_response();
            }

            let upload = UploadedImage {
                mime_type: content_type,
                temp_path: temp.path().to_path_buf(),
                size: data.len(),
            };
            tracing::debug!(mime_type = %upload.mime_type, size = upload.size, "received plaque upload");

            // 2. Validate
            let kind = match validate_upload(&upload, state.error_log.as_ref()) {
                Ok(kind) => kind,
                Err((status, body)) => return (status, body).into_response(),
            };

            // 3. Generate (CPU-bound, off the async runtime)
            let image_path = upload.temp_path.clone();
            let result = tokio::task::spawn_blocking(move || {
                PlaqueService::generate_preview(&image_path, kind)
            })
            .await;

            return match result {
                Ok(Ok(pdf_bytes)) => (
                    StatusCode::OK,
                    [
                        (header::CONTENT_TYPE, "application/pdf"),
                        (
                            header::CONTENT_DISPOSITION,
                            "attachment; filename=\"generated.pdf\"",
                        ),
                    ],
                    pdf_bytes,
                )
                    .into_response(),
                Ok(Err(e)) => {
                    state
                        .error_log
                        .record(&format!("Error generating PDF: {}", e));
                    if let Some(cause) = std::error::Error::source(&e) {
                        state.error_log.record(&format!("Caused by: {}", cause));
                    }
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
                Err(e) => {
                    state
                        .error_log
                        .record(&format!("Error generating PDF: {}", e));
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            };
        }
    }

    (
        StatusCode::BAD_REQUEST,
        "File upload error: missing field 'image'",
    )
        .into_response()
}
