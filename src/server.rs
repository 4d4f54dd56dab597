//! HTTP server initialization and runtime setup.
//!
//! Wires the GitHub client, PDF reader and markdown renderer into the
//! services, then runs the Axum server until Ctrl-C.

use crate::application::services::{EnrichmentService, ExtractionService};
use crate::config::Config;
use crate::domain::gateways::{GithubGateway, MarkdownRenderer, PdfLinkReader};
use crate::infrastructure::github::HttpGithubGateway;
use crate::infrastructure::markdown::PulldownRenderer;
use crate::infrastructure::pdf::LopdfLinkReader;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::link_classifier::LinkClassifier;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared state from configuration.
///
/// # Errors
///
/// Returns an error if the target domain cannot form a link pattern or the
/// HTTP client cannot be constructed.
pub fn build_state(config: &Config) -> Result<AppState> {
    let classifier = Arc::new(
        LinkClassifier::new(&config.target_domain)
            .context("Failed to build link pattern from TARGET_DOMAIN")?,
    );

    let github: Arc<dyn GithubGateway> = Arc::new(HttpGithubGateway::new(
        &config.github_api_url,
        &config.github_token,
        config.github_timeout(),
    )?);
    let reader: Arc<dyn PdfLinkReader> = Arc::new(LopdfLinkReader::new());
    let renderer: Arc<dyn MarkdownRenderer> = Arc::new(PulldownRenderer::new());

    let extraction_service = Arc::new(ExtractionService::new(reader, classifier.clone()));
    let enrichment_service = Arc::new(EnrichmentService::new(
        github.clone(),
        renderer,
        classifier,
        config.enrich_concurrency,
    ));

    Ok(AppState::new(extraction_service, enrichment_service, github))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - State construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    tracing::info!("GitHub client ready ({})", config.github_api_url);

    let app = app_router(state, config.behind_proxy, config.max_upload_bytes);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
