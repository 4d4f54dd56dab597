//! GitHub REST API client.

pub mod http_gateway;

pub use http_gateway::HttpGithubGateway;
