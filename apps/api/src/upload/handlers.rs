//! Axum route handlers for resume uploads.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::upload::{UploadResponse, UploadedDocument};
use crate::state::AppState;
use crate::upload::pipeline::process_upload;

/// Multipart field carrying the document.
pub const RESUME_FIELD: &str = "resume";

/// POST /upload-resume
///
/// Accepts exactly one file in the `resume` field and returns the text snippet,
/// extracted keywords and matching jobs.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let document = read_document(multipart).await?;

    let upload_id = Uuid::new_v4();
    let span = info_span!("upload", %upload_id, file_name = %document.file_name);
    let response = process_upload(&state, document).instrument(span).await?;

    Ok(Json(response))
}

/// Pulls the single file part out of the form. Plain text fields are ignored;
/// a file under any other field name, or a second file, is rejected.
async fn read_document(mut multipart: Multipart) -> Result<UploadedDocument, AppError> {
    let mut document: Option<UploadedDocument> = None;

    while let Some(field) = multipart.next_field().await? {
        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            // Non-file field, or a file input submitted without a selection
            _ => continue,
        };

        let field_name = field.name().unwrap_or_default().to_string();
        if field_name != RESUME_FIELD {
            return Err(AppError::Validation(format!(
                "Unexpected file field '{field_name}', expected '{RESUME_FIELD}'"
            )));
        }
        if document.is_some() {
            return Err(AppError::Validation(
                "Only one file may be uploaded per request".to_string(),
            ));
        }

        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        document = Some(UploadedDocument {
            file_name,
            content_type,
            bytes,
        });
    }

    document.ok_or(AppError::NoFileProvided)
}
