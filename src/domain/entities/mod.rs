//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`GithubReference`] - A GitHub link classified as a profile or repository
//! - [`github`] - Raw payloads returned by the GitHub REST API
//! - [`records`] - Shaped records handed to the presentation layer
//!
//! Raw payloads and shaped records are kept apart: the API types mirror what
//! GitHub sends, the records mirror what the front end renders.

pub mod github;
pub mod records;
pub mod reference;

pub use github::{
    GithubContributor, GithubRepo, GithubUser, RateLimitStatus, RateLimitWindow, ReadmeContent,
    RepoLicense, RepoOwner, SocialAccount,
};
pub use records::{
    ContributorSummary, EnrichedRecord, PROFILE_REPO_LIMIT, ProfileRecord, RepoSummary,
    RepositoryRecord, TOP_CONTRIBUTOR_LIMIT, rank_repos,
};
pub use reference::GithubReference;
