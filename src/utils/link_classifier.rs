//! Classification of platform URLs into profile and repository references.

use regex::Regex;

use crate::domain::entities::GithubReference;

/// Splits platform URLs into `(owner, repo)` path segments.
///
/// The host match is case-insensitive; path segments keep their case. A
/// segment ends at `/`, `?`, `#` or whitespace.
#[derive(Debug, Clone)]
pub struct LinkClassifier {
    domain: String,
    pattern: Regex,
}

impl LinkClassifier {
    /// Builds a classifier for `domain` (e.g. `github.com`).
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting pattern fails to compile.
    pub fn new(domain: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"(?i:{})/([^/?#\s]+)(?:/([^/?#\s]+))?",
            regex::escape(domain)
        ))?;

        Ok(Self {
            domain: domain.to_ascii_lowercase(),
            pattern,
        })
    }

    /// Returns true if `url` mentions the target domain, ignoring case.
    pub fn matches_domain(&self, url: &str) -> bool {
        url.to_ascii_lowercase().contains(&self.domain)
    }

    /// Classifies a URL.
    ///
    /// # Returns
    ///
    /// - `Some(Profile)` for `https://{domain}/{owner}`
    /// - `Some(Repository)` for `https://{domain}/{owner}/{repo}[/...]`
    /// - `None` when the URL does not match, or when `owner` and `repo` are the
    ///   same name ignoring case (the profile README repository, which the
    ///   profile lookup already covers)
    pub fn classify(&self, url: &str) -> Option<GithubReference> {
        let captures = self.pattern.captures(url)?;
        let owner = captures.get(1)?.as_str();

        let repo = captures
            .get(2)
            .map(|m| m.as_str().trim_end_matches(".git"))
            .filter(|repo| !repo.is_empty());

        match repo {
            Some(repo) if repo.eq_ignore_ascii_case(owner) => None,
            Some(repo) => Some(GithubReference::repository(owner, repo)),
            None => Some(GithubReference::profile(owner)),
        }
    }
}
