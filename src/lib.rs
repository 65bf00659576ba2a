//! release-gen - ApplicationSet plugin generator library
//!
//! This library provides the pieces behind the getparams webhook:
//! - Fetching repository tags from GitHub
//! - Selecting releases by semantic version (minimum, dedup, retention)
//! - Serving the authenticated plugin endpoint

pub mod api;
pub mod config;
pub mod release;
