//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod enrich;
pub mod extract;
pub mod health;
pub mod method_not_allowed;

pub use enrich::enrich_handler;
pub use extract::extract_handler;
pub use health::health_handler;
pub use method_not_allowed::method_not_allowed_handler;
