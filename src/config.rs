//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export GITHUB_TOKEN="ghp_..."
//! export LISTEN="0.0.0.0:3000"
//! ```
//!
//! ## Required Variables
//!
//! - `GITHUB_TOKEN` - Token sent as `Authorization: Bearer` to the GitHub API
//!
//! ## Optional Variables
//!
//! - `GITHUB_API_URL` - API base URL (default: `https://api.github.com`)
//! - `TARGET_DOMAIN` - Host substring that marks a link as relevant (default: `github.com`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ENRICH_CONCURRENCY` - Repositories enriched at once per profile (default: 8, 1-64)
//! - `GITHUB_TIMEOUT_SECONDS` - Outbound request timeout (default: 30)
//! - `MAX_UPLOAD_BYTES` - Largest accepted PDF upload (default: 10 MiB)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers for rate limiting

use anyhow::{Context, Result};
use std::env;

use crate::application::services::enrichment_service::DEFAULT_CONCURRENCY;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub github_api_url: String,
    pub target_domain: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of repositories enriched concurrently for one profile.
    pub enrich_concurrency: usize,
    /// Timeout applied to every GitHub API request, in seconds.
    pub github_timeout_seconds: u64,
    /// Upper bound on the multipart request body for PDF uploads.
    pub max_upload_bytes: usize,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `GITHUB_TOKEN` is missing.
    pub fn from_env() -> Result<Self> {
        let github_token = env::var("GITHUB_TOKEN").context("GITHUB_TOKEN must be set")?;

        let github_api_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| "https://api.github.com".to_string());
        let target_domain = env::var("TARGET_DOMAIN").unwrap_or_else(|_| "github.com".to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let enrich_concurrency = env::var("ENRICH_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CONCURRENCY);

        let github_timeout_seconds = env::var("GITHUB_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10 * 1024 * 1024);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            github_token,
            github_api_url,
            target_domain,
            listen_addr,
            log_level,
            log_format,
            enrich_concurrency,
            github_timeout_seconds,
            max_upload_bytes,
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `github_token` or `target_domain` is empty
    /// - `github_api_url` is not an HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - a numeric setting is out of range
    pub fn validate(&self) -> Result<()> {
        if self.github_token.trim().is_empty() {
            anyhow::bail!("GITHUB_TOKEN must not be empty");
        }

        if !self.github_api_url.starts_with("http://") && !self.github_api_url.starts_with("https://")
        {
            anyhow::bail!(
                "GITHUB_API_URL must start with 'http://' or 'https://', got '{}'",
                self.github_api_url
            );
        }

        if self.target_domain.trim().is_empty() {
            anyhow::bail!("TARGET_DOMAIN must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.enrich_concurrency == 0 || self.enrich_concurrency > 64 {
            anyhow::bail!(
                "ENRICH_CONCURRENCY must be between 1 and 64, got {}",
                self.enrich_concurrency
            );
        }

        if self.github_timeout_seconds == 0 {
            anyhow::bail!("GITHUB_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.max_upload_bytes < 1024 {
            anyhow::bail!(
                "MAX_UPLOAD_BYTES must be at least 1024, got {}",
                self.max_upload_bytes
            );
        }

        Ok(())
    }

    pub fn github_timeout(&self) -> Duration {
        Duration::from_secs(self.github_timeout_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  GitHub API: {}", self.github_api_url);
        tracing::info!("  GitHub token: {}", mask_token(&self.github_token));
        tracing::info!("  Target domain: {}", self.target_domain);
        tracing::info!("  Enrich concurrency: {}", self.enrich_concurrency);
        tracing::info!("  GitHub timeout: {}s", self.github_timeout_seconds);
        tracing::info!("  Max upload: {} bytes", self.max_upload_bytes);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping only its first four characters.
///
/// - `ghp_abcdef123456` → `ghp_***`
/// - `abc` → `***`
fn mask_token(token: &str) -> String {
    if token.chars().count() <= 8 {
        return "***".to_string();
    }

    let prefix: String = token.chars().take(4).collect();
    format!("{}***", prefix)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
