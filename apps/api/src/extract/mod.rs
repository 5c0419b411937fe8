//! Text extraction: turns an uploaded document buffer into plain text.
//!
//! PDFs go through `pdf-extract` on the blocking pool. Plain-text documents are
//! decoded as lossy UTF-8. Anything unrecognised is treated as a PDF, so junk
//! bytes surface as an extraction failure rather than as garbage text.

use async_trait::async_trait;
use thiserror::Error;

const PDF_MAGIC: &[u8] = b"%PDF-";
const PLAIN_TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md", "markdown"];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("Extraction task aborted: {0}")]
    Task(String),
}

/// Document formats the extractor knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Sniffs the format from the leading bytes first, then the filename and
    /// declared content type.
    pub fn detect(file_name: &str, content_type: Option<&str>, bytes: &[u8]) -> Self {
        if bytes.starts_with(PDF_MAGIC) {
            return DocumentKind::Pdf;
        }

        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some(ext) if PLAIN_TEXT_EXTENSIONS.contains(&ext) => DocumentKind::PlainText,
            _ if content_type.is_some_and(|ct| ct.starts_with("text/")) => DocumentKind::PlainText,
            _ => DocumentKind::Pdf,
        }
    }
}

/// Extraction backend. Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: Vec<u8>, kind: DocumentKind) -> Result<String, ExtractError>;
}

/// Default extractor: dispatches on `DocumentKind`.
#[derive(Debug, Clone, Default)]
pub struct DocumentExtractor;

#[async_trait]
impl TextExtractor for DocumentExtractor {
    async fn extract(&self, bytes: Vec<u8>, kind: DocumentKind) -> Result<String, ExtractError> {
        match kind {
            DocumentKind::Pdf => extract_pdf(bytes).await,
            DocumentKind::PlainText => Ok(extract_plain_text(&bytes)),
        }
    }
}

/// pdf-extract is synchronous and CPU-bound, and it can panic on some malformed
/// inputs. Both cases come back as `ExtractError`.
async fn extract_pdf(bytes: Vec<u8>) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| ExtractError::Task(e.to_string()))?
        .map_err(|e| ExtractError::Pdf(e.to_string()))
}

fn extract_plain_text(bytes: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(bytes);
    let text: &str = &decoded;
    text.strip_prefix('\u{feff}').unwrap_or(text).to_string()
}
