//! DTOs for the enrichment endpoint.

use serde::Deserialize;
use validator::Validate;

/// Upper bound on links per request; each profile link can fan out into
/// hundreds of API calls.
pub const MAX_LINKS: u64 = 50;

/// Links to resolve, typically the `urls` returned by the extraction endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct EnrichRequest {
    #[validate(length(
        min = 1,
        max = "MAX_LINKS",
        message = "links must contain between 1 and 50 URLs"
    ))]
    pub links: Vec<String>,
}
