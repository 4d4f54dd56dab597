//! Request and response bodies for the HTTP API.

pub mod enrich;
pub mod extract;
pub mod health;
