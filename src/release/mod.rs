//! Release curation layer for repository tags
//!
//! This module provides the core functionality for fetching repository tags
//! and narrowing them down to the curated, version-ordered release list the
//! endpoint returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  TagSource  │────▶│   Selector  │────▶│   Releases  │
//! │  (fetch)    │     │  (filter)   │     │  (ordered)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   Sources   │     │   Semver    │
//! │  (github)   │     │ (parse/cmp) │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`selector`]: Filtering pipeline (minimum version, dedup, retention cap)
//! - [`semver`]: Version parsing with partial-version normalization
//! - [`source`]: Source trait for fetching tags from a hosting provider
//! - [`sources`]: Concrete source implementations (GitHub)
//! - [`error`]: Error types for version parsing and tag fetching
//! - [`types`]: Common types like `Release` and `SelectionParameters`

pub mod error;
pub mod selector;
pub mod semver;
pub mod source;
pub mod sources;
pub mod types;
