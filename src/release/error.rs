use thiserror::Error;

/// A tag name or minimum-version parameter that does not parse as a
/// semantic version. Always fatal to the whole request: one bad entry
/// must never silently shrink the result set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid semantic version: {version}")]
pub struct InvalidVersionError {
    pub version: String,
}

impl InvalidVersionError {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
