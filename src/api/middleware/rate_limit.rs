//! Rate limiting middleware using token bucket algorithm.

use std::net::IpAddr;
use std::sync::Arc;

use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Picks the client IP from the socket peer, or from forwarding headers
/// when the service runs behind a trusted reverse proxy.
#[derive(Debug, Clone, Copy)]
pub struct ClientIpKeyExtractor {
    trust_proxy_headers: bool,
}

impl ClientIpKeyExtractor {
    pub fn new(trust_proxy_headers: bool) -> Self {
        Self {
            trust_proxy_headers,
        }
    }
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.trust_proxy_headers {
            SmartIpKeyExtractor.extract(req)
        } else {
            PeerIpKeyExtractor.extract(req)
        }
    }
}

/// Creates the rate limiter for the API endpoints.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// Both endpoints are expensive: extraction parses a whole PDF and a single
/// enrichment request can fan out into hundreds of GitHub API calls.
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// With `behind_proxy` set, the client IP comes from `X-Forwarded-For`,
/// `X-Real-IP` or `Forwarded`, falling back to the peer address. Otherwise
/// only the socket peer address is used.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/github-data", post(enrich_handler))
///     .layer(rate_limit::layer(false));
/// ```
pub fn layer(
    behind_proxy: bool,
) -> GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(ClientIpKeyExtractor::new(behind_proxy))
            .per_second(1)
            .burst_size(10)
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
