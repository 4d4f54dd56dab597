//! [`GithubGateway`] implementation over `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::domain::entities::{
    GithubContributor, GithubRepo, GithubUser, RateLimitStatus, ReadmeContent, SocialAccount,
};
use crate::domain::fetch::{Fetch, FetchError};
use crate::domain::gateways::GithubGateway;

/// Page size used when listing a user's repositories.
pub const REPOS_PER_PAGE: u32 = 100;

const API_VERSION: &str = "2022-11-28";

/// Authenticated GitHub REST API client.
///
/// Holds a single connection-pooled [`Client`], so one instance is shared by
/// all requests.
///
/// # Outcome mapping
///
/// - 2xx with a decodable body → [`Fetch::Found`]
/// - 404 → [`Fetch::Absent`]
/// - any other status → [`Fetch::Failed`] with the status and body text
/// - transport failure (DNS, connect, timeout) → logged, [`Fetch::Absent`]
#[derive(Debug, Clone)]
pub struct HttpGithubGateway {
    client: Client,
    base_url: String,
}

impl HttpGithubGateway {
    /// Creates a client for the API at `base_url` (e.g. `https://api.github.com`).
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the TLS
    /// backend cannot be initialised.
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("link-lens/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issues an authenticated GET for `path` and decodes the JSON body.
    ///
    /// Transport errors, 404 and 204 come back as [`Fetch::Absent`]; other
    /// non-success statuses and bodies that fail to decode as [`Fetch::Failed`].
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Fetch<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!(endpoint = path, error = %e, "GitHub request failed");
                return Fetch::Absent;
            }
        };

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            warn!(endpoint = path, "GitHub resource not found");
            return Fetch::Absent;
        }

        // GitHub answers 204 for empty repositories' contributor lists.
        if status == StatusCode::NO_CONTENT {
            debug!(endpoint = path, "GitHub resource has no content");
            return Fetch::Absent;
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(endpoint = path, status = status.as_u16(), "GitHub API error");
            return Fetch::Failed(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        match response.json::<T>().await {
            Ok(value) => {
                debug!(endpoint = path, "GitHub resource fetched");
                Fetch::Found(value)
            }
            Err(e) => {
                warn!(endpoint = path, error = %e, "GitHub response did not decode");
                Fetch::Failed(FetchError::Decode(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl GithubGateway for HttpGithubGateway {
    async fn get_user(&self, username: &str) -> Fetch<GithubUser> {
        self.fetch_json(&format!("/users/{}", username)).await
    }

    async fn get_social_accounts(&self, username: &str) -> Fetch<Vec<SocialAccount>> {
        self.fetch_json(&format!("/users/{}/social_accounts", username))
            .await
    }

    async fn list_user_repos(&self, username: &str) -> Fetch<Vec<GithubRepo>> {
        self.fetch_json(&format!(
            "/users/{}/repos?type=all&sort=updated&per_page={}",
            username, REPOS_PER_PAGE
        ))
        .await
    }

    async fn get_repo(&self, owner: &str, repo: &str) -> Fetch<GithubRepo> {
        self.fetch_json(&format!("/repos/{}/{}", owner, repo)).await
    }

    async fn list_contributors(&self, owner: &str, repo: &str) -> Fetch<Vec<GithubContributor>> {
        self.fetch_json(&format!("/repos/{}/{}/contributors", owner, repo))
            .await
    }

    async fn get_readme(&self, owner: &str, repo: &str) -> Fetch<String> {
        self.fetch_json::<ReadmeContent>(&format!("/repos/{}/{}/readme", owner, repo))
            .await
            .and_then(|readme| match decode_readme(&readme) {
                Some(text) => Fetch::Found(text),
                None => {
                    warn!(owner, repo, "README content could not be decoded");
                    Fetch::Absent
                }
            })
    }

    async fn get_rate_limit(&self) -> Fetch<RateLimitStatus> {
        self.fetch_json("/rate_limit").await
    }
}

/// Decodes the base64 README payload. GitHub wraps the content at 60 columns.
fn decode_readme(readme: &ReadmeContent) -> Option<String> {
    if readme.content.is_empty() {
        return None;
    }

    let compact: String = readme
        .content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD.decode(compact).ok()?;
    String::from_utf8(bytes).ok()
}
