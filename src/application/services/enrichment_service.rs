//! Resolution of GitHub links into profile and repository records.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::domain::entities::{
    ContributorSummary, EnrichedRecord, GithubContributor, GithubReference, GithubRepo,
    PROFILE_REPO_LIMIT, ProfileRecord, RepoSummary, RepositoryRecord, TOP_CONTRIBUTOR_LIMIT,
    rank_repos,
};
use crate::domain::fetch::Fetch;
use crate::domain::gateways::{GithubGateway, MarkdownRenderer};
use crate::error::AppError;
use crate::utils::display_date::display_date;
use crate::utils::link_classifier::LinkClassifier;
use crate::utils::summary::derive_summary;

/// Default number of repositories enriched at once for a single profile.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Service that classifies links and shapes GitHub data into records.
///
/// References are resolved one after another in input order. Within a
/// profile, per-repository lookups fan out with at most `concurrency`
/// repositories in flight.
pub struct EnrichmentService {
    gateway: Arc<dyn GithubGateway>,
    renderer: Arc<dyn MarkdownRenderer>,
    classifier: Arc<LinkClassifier>,
    concurrency: usize,
}

impl EnrichmentService {
    /// Creates a new enrichment service. A `concurrency` of 0 is treated as 1.
    pub fn new(
        gateway: Arc<dyn GithubGateway>,
        renderer: Arc<dyn MarkdownRenderer>,
        classifier: Arc<LinkClassifier>,
        concurrency: usize,
    ) -> Self {
        Self {
            gateway,
            renderer,
            classifier,
            concurrency: concurrency.max(1),
        }
    }

    /// Resolves every link, keeping input order and dropping failures.
    ///
    /// Links that do not classify (wrong host, self-named repository) are
    /// skipped silently. A reference that fails to resolve is logged and
    /// omitted; it never aborts the rest of the batch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if no link resolved to a record.
    pub async fn enrich(&self, links: &[String]) -> Result<Vec<EnrichedRecord>, AppError> {
        let mut records = Vec::with_capacity(links.len());
        let mut skipped = 0;
        let mut failed = 0;

        for url in links {
            let Some(reference) = self.classifier.classify(url) else {
                debug!(url = %url, "Skipping link that does not name a profile or repository");
                skipped += 1;
                continue;
            };

            match self.resolve(&reference).await {
                Some(record) => records.push(record),
                None => {
                    warn!(reference = %reference, url = %url, "Reference could not be resolved");
                    failed += 1;
                }
            }
        }

        info!(
            links = links.len(),
            resolved = records.len(),
            skipped,
            failed,
            "Enrichment batch finished"
        );

        if records.is_empty() {
            return Err(AppError::upstream(
                "Could not fetch data for any valid links.",
                json!({ "links": links.len(), "skipped": skipped, "failed": failed }),
            ));
        }

        Ok(records)
    }

    /// Resolves a single reference. `None` means the core resource is missing
    /// or its lookup failed.
    pub async fn resolve(&self, reference: &GithubReference) -> Option<EnrichedRecord> {
        match reference {
            GithubReference::Profile { owner } => self
                .resolve_profile(owner)
                .await
                .map(EnrichedRecord::Profile),
            GithubReference::Repository { owner, repo } => self
                .resolve_repository(owner, repo)
                .await
                .map(EnrichedRecord::Repository),
        }
    }

    /// Builds a profile record with its top repositories.
    pub async fn resolve_profile(&self, username: &str) -> Option<ProfileRecord> {
        let user = required(self.gateway.get_user(username).await, "user", username)?;

        let (socials, readme, repos) = tokio::join!(
            self.gateway.get_social_accounts(username),
            self.gateway.get_readme(username, username),
            self.gateway.list_user_repos(username),
        );

        let socials = optional(socials, "social accounts", username);
        let readme = optional(readme, "profile README", username);
        let repos: Vec<GithubRepo> = optional(repos, "repositories", username)
            .into_iter()
            .filter(|repo| !repo.name.eq_ignore_ascii_case(username))
            .collect();

        debug!(username, repos = repos.len(), "Enriching repositories");

        let mut summaries: Vec<RepoSummary> = stream::iter(repos)
            .map(|repo| self.summarize_repo(username, repo))
            .buffered(self.concurrency)
            .collect()
            .await;

        rank_repos(&mut summaries);
        summaries.truncate(PROFILE_REPO_LIMIT);

        let name = user
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| user.login.clone());

        Some(ProfileRecord {
            name,
            username: user.login,
            bio: user.bio,
            url: user.html_url,
            avatar_url: user.avatar_url,
            followers: user.followers,
            following: user.following,
            public_repos: user.public_repos,
            company: user.company,
            blog: user.blog,
            twitter: user.twitter_username,
            socials,
            created_at: display_date(user.created_at),
            profile_readme: non_empty(readme).map(|md| self.renderer.to_html(&md)),
            repos: summaries,
        })
    }

    /// Builds a repository record with its top contributors.
    pub async fn resolve_repository(&self, owner: &str, repo: &str) -> Option<RepositoryRecord> {
        let reference = format!("{}/{}", owner, repo);
        let data = required(self.gateway.get_repo(owner, repo).await, "repository", &reference)?;

        let (contributors, readme) = tokio::join!(
            self.gateway.list_contributors(owner, repo),
            self.gateway.get_readme(owner, repo),
        );

        let contributors = optional(contributors, "contributors", &reference);
        let readme = non_empty(optional(readme, "README", &reference));

        let top_contributors = contributors
            .into_iter()
            .take(TOP_CONTRIBUTOR_LIMIT)
            .map(|c| ContributorSummary {
                login: c.login,
                commits: c.contributions,
                url: c.html_url,
            })
            .collect();

        Some(RepositoryRecord {
            description: derive_summary(
                self.renderer.as_ref(),
                data.description.as_deref(),
                readme.as_deref(),
            ),
            readme: readme.as_deref().map(|md| self.renderer.to_html(md)),
            name: data.name,
            full_name: data.full_name,
            url: data.html_url,
            owner: data.owner.login,
            stars: data.stargazers_count,
            forks: data.forks_count,
            language: data.language,
            license: data
                .license
                .map(|l| l.name)
                .unwrap_or_else(|| "N/A".to_string()),
            created_at: display_date(data.created_at),
            top_contributors,
        })
    }

    /// Summarises one of `username`'s repositories.
    ///
    /// Contributors and README are fetched together; either may be missing.
    async fn summarize_repo(&self, username: &str, repo: GithubRepo) -> RepoSummary {
        let (contributors, readme) = tokio::join!(
            self.gateway.list_contributors(&repo.owner.login, &repo.name),
            self.gateway.get_readme(&repo.owner.login, &repo.name),
        );

        let commits = contribution_count(
            &optional(contributors, "contributors", &repo.full_name),
            username,
        );
        let readme = optional(readme, "README", &repo.full_name);

        RepoSummary {
            description: derive_summary(
                self.renderer.as_ref(),
                repo.description.as_deref(),
                Some(readme.as_str()),
            ),
            name: repo.name,
            url: repo.html_url,
            language: repo.language,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            commits,
        }
    }
}

/// Contributions of `username` (case-insensitive), or 0 if not listed.
pub fn contribution_count(contributors: &[GithubContributor], username: &str) -> u64 {
    contributors
        .iter()
        .find(|c| c.login.eq_ignore_ascii_case(username))
        .map(|c| c.contributions)
        .unwrap_or(0)
}

/// Unwraps a lookup whose absence makes the whole reference unresolvable.
fn required<T>(fetch: Fetch<T>, what: &str, reference: &str) -> Option<T> {
    match fetch {
        Fetch::Found(value) => Some(value),
        Fetch::Absent => {
            warn!(reference, what, "Required GitHub resource not found");
            None
        }
        Fetch::Failed(e) => {
            error!(reference, what, error = %e, "Required GitHub lookup failed");
            None
        }
    }
}

/// Unwraps a best-effort lookup, falling back to the default.
fn optional<T: Default>(fetch: Fetch<T>, what: &str, reference: &str) -> T {
    if let Fetch::Failed(e) = &fetch {
        warn!(reference, what, error = %e, "Optional GitHub lookup failed, using default");
    }
    fetch.or_default()
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}
