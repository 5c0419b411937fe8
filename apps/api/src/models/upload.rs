use bytes::Bytes;
use serde::Serialize;

use crate::job_search::{JobResult, SearchStatus};

/// Characters of extracted text echoed back to the caller.
pub const SNIPPET_CHARS: usize = 300;

/// A document received from the client, held in memory until it is persisted.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Body of a successful `POST /upload-resume`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    pub extracted_text_snippet: String,
    pub keywords: Vec<String>,
    pub jobs: Vec<JobResult>,
    /// `unavailable` when the search service could not be reached; `jobs` is
    /// empty in that case.
    pub job_search_status: SearchStatus,
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn snippet(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snippet_truncates_by_characters() {
        let text = "é".repeat(400);
        let cut = snippet(&text, SNIPPET_CHARS);
        assert_eq!(cut.chars().count(), 300);
        assert_eq!(cut.len(), 600);
    }

    #[test]
    fn test_snippet_keeps_short_text() {
        assert_eq!(snippet("short", SNIPPET_CHARS), "short");
    }

    #[test]
    fn test_response_uses_camel_case_fields() {
        let response = UploadResponse {
            message: "ok".to_string(),
            extracted_text_snippet: "text".to_string(),
            keywords: vec!["rust".to_string()],
            jobs: vec![json!({"title": "Engineer"})],
            job_search_status: SearchStatus::Ok,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["extractedTextSnippet"], "text");
        assert_eq!(value["jobSearchStatus"], "ok");
        assert_eq!(value["jobs"][0]["title"], "Engineer");
    }
}
