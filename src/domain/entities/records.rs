//! Shaped records returned to the presentation layer.
//!
//! Field names on the wire follow the contract the front end already consumes,
//! which mixes snake_case and camelCase keys.

use serde::{Deserialize, Serialize};

use super::github::SocialAccount;

/// Maximum number of repositories attached to a profile.
pub const PROFILE_REPO_LIMIT: usize = 6;

/// Maximum number of contributors attached to a repository.
pub const TOP_CONTRIBUTOR_LIMIT: usize = 5;

/// A resolved reference, discriminated by `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EnrichedRecord {
    Profile(ProfileRecord),
    Repository(RepositoryRecord),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub username: String,
    pub bio: Option<String>,
    pub url: String,
    pub avatar_url: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub twitter: Option<String>,
    pub socials: Vec<SocialAccount>,
    pub created_at: String,
    /// Rendered profile README (sanitized HTML).
    #[serde(rename = "profileReadme")]
    pub profile_readme: Option<String>,
    pub repos: Vec<RepoSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub url: String,
    pub description: String,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    /// Contributions by the profile owner.
    pub commits: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub description: String,
    /// Rendered README (sanitized HTML).
    pub readme: Option<String>,
    pub url: String,
    pub owner: String,
    pub stars: u64,
    pub forks: u64,
    pub language: Option<String>,
    pub license: String,
    pub created_at: String,
    #[serde(rename = "topContributors")]
    pub top_contributors: Vec<ContributorSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorSummary {
    pub login: String,
    pub commits: u64,
    pub url: String,
}

/// Orders repositories by owner contributions, then stars, both descending.
///
/// The sort is stable, so repositories that tie on both keys keep the order
/// the API listed them in.
pub fn rank_repos(repos: &mut [RepoSummary]) {
    repos.sort_by(|a, b| b.commits.cmp(&a.commits).then(b.stars.cmp(&a.stars)));
}
