use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_ADZUNA_BASE_URL: &str = "https://api.adzuna.com";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if the Adzuna credentials are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub adzuna_app_id: String,
    pub adzuna_app_key: String,
    pub adzuna_base_url: String,
    /// Adzuna country segment of the search path, e.g. `in` for India.
    pub adzuna_country: String,
    /// Fixed `where` value sent with every search.
    pub job_location: String,
    pub results_per_page: u32,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            adzuna_app_id: require_env("ADZUNA_APP_ID")?,
            adzuna_app_key: require_env("ADZUNA_APP_KEY")?,
            adzuna_base_url: env_or("ADZUNA_BASE_URL", DEFAULT_ADZUNA_BASE_URL),
            adzuna_country: env_or("ADZUNA_COUNTRY", "in"),
            job_location: env_or("JOB_LOCATION", "India"),
            results_per_page: env_or("RESULTS_PER_PAGE", "5")
                .parse::<u32>()
                .context("RESULTS_PER_PAGE must be a positive integer")?,
            port: env_or("PORT", "4000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "uploads")),
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Config pointing at a scratch upload directory and a mock search endpoint.
    pub fn for_tests(upload_dir: impl Into<PathBuf>, adzuna_base_url: &str) -> Self {
        Config {
            adzuna_app_id: "test-app-id".to_string(),
            adzuna_app_key: "test-app-key".to_string(),
            adzuna_base_url: adzuna_base_url.to_string(),
            adzuna_country: "in".to_string(),
            job_location: "India".to_string(),
            results_per_page: 5,
            port: 0,
            upload_dir: upload_dir.into(),
            static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            rust_log: "info".to_string(),
        }
    }
}
