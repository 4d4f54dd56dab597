//! Reference entity: a classified GitHub link.

use std::fmt;

/// A GitHub link resolved to what it points at.
///
/// Built by [`crate::utils::link_classifier::classify`] from an extracted URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GithubReference {
    /// `github.com/{owner}`
    Profile { owner: String },
    /// `github.com/{owner}/{repo}`
    Repository { owner: String, repo: String },
}

impl GithubReference {
    pub fn profile(owner: impl Into<String>) -> Self {
        Self::Profile {
            owner: owner.into(),
        }
    }

    pub fn repository(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self::Repository {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Handle of the account the reference belongs to.
    pub fn owner(&self) -> &str {
        match self {
            Self::Profile { owner } | Self::Repository { owner, .. } => owner,
        }
    }
}

impl fmt::Display for GithubReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile { owner } => write!(f, "{}", owner),
            Self::Repository { owner, repo } => write!(f, "{}/{}", owner, repo),
        }
    }
}
