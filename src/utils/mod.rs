//! Utility functions shared by the services.
//!
//! - [`link_classifier`] - Profile/repository classification of platform URLs
//! - [`summary`] - Short description derivation from descriptions and READMEs
//! - [`display_date`] - Timestamp formatting for shaped records

pub mod display_date;
pub mod link_classifier;
pub mod summary;
