//! Job Search Client: the single point of entry for Adzuna job-search calls.
//!
//! One GET per upload, first page only, no retries. Failures never leave this
//! module: callers get an empty result list and a `SearchStatus` telling them
//! whether the service answered.

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

/// An Adzuna job listing, passed through untouched.
pub type JobResult = serde_json::Value;

#[derive(Debug, Error)]
enum JobSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Whether the search service produced an answer. `jobs` is empty both when
/// nothing matched and when the service could not be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Ok,
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub jobs: Vec<JobResult>,
    pub status: SearchStatus,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    /// Absent or `null` both mean an answered search with no listings.
    #[serde(default)]
    results: Option<Vec<JobResult>>,
}

#[derive(Clone)]
pub struct JobSearchClient {
    client: Client,
    endpoint: Url,
    app_id: String,
    app_key: String,
    location: String,
    results_per_page: u32,
}

impl JobSearchClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut endpoint = Url::parse(&config.adzuna_base_url)
            .with_context(|| format!("Invalid ADZUNA_BASE_URL '{}'", config.adzuna_base_url))?;
        // Appended, so a base URL with a path prefix keeps it.
        endpoint
            .path_segments_mut()
            .map_err(|_| {
                anyhow!("ADZUNA_BASE_URL '{}' cannot carry a path", config.adzuna_base_url)
            })?
            .pop_if_empty()
            .extend(["v1", "api", "jobs", config.adzuna_country.as_str(), "search", "1"]);

        Ok(Self {
            client: Client::new(),
            endpoint,
            app_id: config.adzuna_app_id.clone(),
            app_key: config.adzuna_app_key.clone(),
            location: config.job_location.clone(),
            results_per_page: config.results_per_page,
        })
    }

    /// Builds the search URL: keywords joined with a single space go into `what`.
    pub fn search_url(&self, keywords: &[String]) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("app_id", &self.app_id)
            .append_pair("app_key", &self.app_key)
            .append_pair("results_per_page", &self.results_per_page.to_string())
            .append_pair("what", &keywords.join(" "))
            .append_pair("where", &self.location)
            .append_pair("content-type", "application/json");
        url
    }

    /// Returns the listings for `keywords`, or an empty list on any failure.
    #[cfg(test)]
    pub async fn search(&self, keywords: &[String]) -> Vec<JobResult> {
        self.search_outcome(keywords).await.jobs
    }

    pub async fn search_outcome(&self, keywords: &[String]) -> SearchOutcome {
        match self.fetch(keywords).await {
            Ok(jobs) => {
                debug!("Job search returned {} results", jobs.len());
                SearchOutcome {
                    jobs,
                    status: SearchStatus::Ok,
                }
            }
            Err(e) => {
                warn!("Job search failed, continuing without results: {e}");
                SearchOutcome {
                    jobs: Vec::new(),
                    status: SearchStatus::Unavailable,
                }
            }
        }
    }

    async fn fetch(&self, keywords: &[String]) -> Result<Vec<JobResult>, JobSearchError> {
        // without_url(): the request URL carries the app key.
        let response = self
            .client
            .get(self.search_url(keywords))
            .send()
            .await
            .map_err(|e| e.without_url())?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JobSearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await.map_err(|e| e.without_url())?;
        Ok(body.results.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const SEARCH_PATH: &str = "/v1/api/jobs/in/search/1";

    fn client_for(base_url: &str) -> JobSearchClient {
        JobSearchClient::new(&Config::for_tests("uploads", base_url)).unwrap()
    }

    fn keywords(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_search_url_encodes_joined_keywords() {
        let client = client_for("https://api.adzuna.com");
        let url = client.search_url(&keywords(&["supply chains", "Mumbai"]));

        assert_eq!(url.path(), SEARCH_PATH);
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("what".to_string(), "supply chains Mumbai".to_string())));
        assert!(pairs.contains(&("where".to_string(), "India".to_string())));
        assert!(pairs.contains(&("results_per_page".to_string(), "5".to_string())));
        assert!(pairs.contains(&("app_id".to_string(), "test-app-id".to_string())));
        assert!(pairs.contains(&("app_key".to_string(), "test-app-key".to_string())));
        assert!(!url.as_str().contains("supply chains"));
    }

    #[test]
    fn test_base_url_path_prefix_is_kept() {
        for base in ["http://proxy.local/adzuna", "http://proxy.local/adzuna/"] {
            let url = client_for(base).search_url(&keywords(&["rust"]));
            assert_eq!(url.path(), "/adzuna/v1/api/jobs/in/search/1", "base {base}");
        }
    }

    #[test]
    fn test_non_hierarchical_base_url_is_rejected() {
        let config = Config::for_tests("uploads", "mailto:jobs@example.com");
        assert!(JobSearchClient::new(&config).is_err());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = Config::for_tests("uploads", "not a url");
        assert!(JobSearchClient::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_search_returns_results_field() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(SEARCH_PATH)
                    .query_param("what", "rust")
                    .query_param("where", "India")
                    .query_param("results_per_page", "5");
                then.status(200).json_body(json!({
                    "count": 2,
                    "results": [
                        {"title": "Rust Developer", "location": {"display_name": "Pune"}},
                        {"title": "Systems Engineer", "location": {"display_name": "Mumbai"}}
                    ]
                }));
            })
            .await;

        let client = client_for(&server.base_url());
        let outcome = client.search_outcome(&keywords(&["rust"])).await;

        mock.assert_async().await;
        assert_eq!(outcome.status, SearchStatus::Ok);
        assert_eq!(outcome.jobs.len(), 2);
        assert_eq!(outcome.jobs[0]["title"], "Rust Developer");
    }

    #[tokio::test]
    async fn test_missing_results_field_is_empty_but_ok() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(SEARCH_PATH);
                then.status(200).json_body(json!({"count": 0}));
            })
            .await;

        let outcome = client_for(&server.base_url())
            .search_outcome(&keywords(&["astronaut"]))
            .await;
        assert!(outcome.jobs.is_empty());
        assert_eq!(outcome.status, SearchStatus::Ok);
    }

    #[tokio::test]
    async fn test_null_results_field_is_empty_but_ok() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(SEARCH_PATH);
                then.status(200).json_body(json!({"count": 0, "results": null}));
            })
            .await;

        let outcome = client_for(&server.base_url())
            .search_outcome(&keywords(&["astronaut"]))
            .await;
        assert!(outcome.jobs.is_empty());
        assert_eq!(outcome.status, SearchStatus::Ok);
    }

    #[tokio::test]
    async fn test_non_success_status_yields_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(SEARCH_PATH);
                then.status(401).body("unauthorised");
            })
            .await;

        let outcome = client_for(&server.base_url())
            .search_outcome(&keywords(&["rust"]))
            .await;
        assert!(outcome.jobs.is_empty());
        assert_eq!(outcome.status, SearchStatus::Unavailable);
    }

    #[tokio::test]
    async fn test_malformed_body_yields_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(SEARCH_PATH);
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let jobs = client_for(&server.base_url())
            .search(&keywords(&["rust"]))
            .await;
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn test_network_error_yields_empty() {
        // Nothing listens on port 1.
        let outcome = client_for("http://127.0.0.1:1")
            .search_outcome(&keywords(&["rust"]))
            .await;
        assert!(outcome.jobs.is_empty());
        assert_eq!(outcome.status, SearchStatus::Unavailable);
    }
}
