//! Upload pipeline: runs one uploaded document through the whole flow.
//!
//! Flow: persist → read back → extract text → extract keywords → job search →
//!       delete temp file → build response.
//!
//! The temp file is removed on every exit path once written. Job search
//! failures never fail the request.

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::extract::{DocumentKind, ExtractError};
use crate::models::upload::{snippet, UploadResponse, UploadedDocument, SNIPPET_CHARS};
use crate::state::AppState;
use crate::upload::storage::TempUpload;

pub const SUCCESS_MESSAGE: &str = "File uploaded, parsed, and jobs fetched successfully!";

pub async fn process_upload(
    state: &AppState,
    document: UploadedDocument,
) -> Result<UploadResponse, AppError> {
    let UploadedDocument {
        file_name,
        content_type,
        bytes,
    } = document;

    // 1. Persist. Dropping `upload` deletes the file, so `?` below is safe.
    let upload = TempUpload::persist(&state.config.upload_dir, &file_name, &bytes).await?;
    drop(bytes);

    // 2. Read back
    let bytes = upload.read().await?;

    // 3. Extract text
    let kind = DocumentKind::detect(&file_name, content_type.as_deref(), &bytes);
    debug!("Extracting {:?} document ({} bytes)", kind, bytes.len());
    let text = state.text_extractor.extract(bytes, kind).await?;
    let text_snippet = snippet(&text, SNIPPET_CHARS);
    info!("Extracted text: {text_snippet}");

    // 4. Keywords (CPU-bound, off the runtime like PDF parsing)
    let extractor = state.keywords.clone();
    let keywords = tokio::task::spawn_blocking(move || extractor.extract(&text))
        .await
        .map_err(|e| ExtractError::Task(e.to_string()))?;
    info!("Extracted keywords: {keywords:?}");

    // 5. Job search (best effort)
    let search = state.job_search.search_outcome(&keywords).await;

    // 6. Cleanup
    if let Err(e) = upload.remove().await {
        warn!("Failed to remove upload after processing: {e}");
    }

    // 7. Respond
    Ok(UploadResponse {
        message: SUCCESS_MESSAGE.to_string(),
        extracted_text_snippet: text_snippet,
        keywords,
        jobs: search.jobs,
        job_search_status: search.status,
    })
}
