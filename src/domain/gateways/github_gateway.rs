//! Gateway trait for GitHub REST API lookups.

use crate::domain::entities::{
    GithubContributor, GithubRepo, GithubUser, RateLimitStatus, SocialAccount,
};
use crate::domain::fetch::Fetch;
use async_trait::async_trait;

/// Read-only access to the GitHub resources the enrichment pipeline needs.
///
/// Every method resolves to a [`Fetch`]: a missing resource is
/// [`Fetch::Absent`], never an error. Implementations must not panic on
/// network or decoding failures.
///
/// # Implementations
///
/// - [`crate::infrastructure::github::HttpGithubGateway`] - reqwest client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GithubGateway: Send + Sync {
    /// `GET /users/{username}`
    async fn get_user(&self, username: &str) -> Fetch<GithubUser>;

    /// `GET /users/{username}/social_accounts`
    async fn get_social_accounts(&self, username: &str) -> Fetch<Vec<SocialAccount>>;

    /// Repositories owned by the user, most recently updated first.
    ///
    /// Limited to a single page of results.
    async fn list_user_repos(&self, username: &str) -> Fetch<Vec<GithubRepo>>;

    /// `GET /repos/{owner}/{repo}`
    async fn get_repo(&self, owner: &str, repo: &str) -> Fetch<GithubRepo>;

    /// `GET /repos/{owner}/{repo}/contributors`, in the order GitHub returns them.
    async fn list_contributors(&self, owner: &str, repo: &str) -> Fetch<Vec<GithubContributor>>;

    /// README of a repository as decoded markdown source.
    ///
    /// Returns [`Fetch::Absent`] when the repository has no README or the
    /// content cannot be decoded as UTF-8.
    async fn get_readme(&self, owner: &str, repo: &str) -> Fetch<String>;

    /// `GET /rate_limit`. Does not count against the quota.
    async fn get_rate_limit(&self) -> Fetch<RateLimitStatus>;
}
