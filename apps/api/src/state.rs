use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::extract::{DocumentExtractor, TextExtractor};
use crate::job_search::JobSearchClient;
use crate::keywords::KeywordExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extraction backend. Default: DocumentExtractor (PDF + plain text).
    pub text_extractor: Arc<dyn TextExtractor>,
    pub keywords: KeywordExtractor,
    pub job_search: JobSearchClient,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self> {
        let job_search = JobSearchClient::new(&config)?;
        Ok(Self {
            config,
            text_extractor: Arc::new(DocumentExtractor),
            keywords: KeywordExtractor::default(),
            job_search,
        })
    }
}
