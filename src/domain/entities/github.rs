//! Raw GitHub REST API payloads.
//!
//! Only the fields the enrichment pipeline reads are declared; serde ignores
//! the rest of each response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /users/{username}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GithubUser {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub html_url: String,
    pub avatar_url: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_repos: u64,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Entry of `GET /users/{username}/social_accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SocialAccount {
    pub provider: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoOwner {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoLicense {
    pub name: String,
}

/// `GET /repos/{owner}/{repo}` and entries of `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    pub full_name: String,
    pub owner: RepoOwner,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub license: Option<RepoLicense>,
    pub created_at: DateTime<Utc>,
}

/// Entry of `GET /repos/{owner}/{repo}/contributors`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GithubContributor {
    pub login: String,
    pub contributions: u64,
    pub html_url: String,
}

/// `GET /repos/{owner}/{repo}/readme`. `content` is base64 with embedded newlines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReadmeContent {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub encoding: String,
}

/// `GET /rate_limit`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateLimitStatus {
    pub rate: RateLimitWindow,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateLimitWindow {
    pub limit: u64,
    pub remaining: u64,
    /// Unix timestamp at which the window resets.
    pub reset: i64,
}
