//! GitHub Tags API source implementation

use tracing::warn;

use crate::release::error::FetchError;
use crate::release::source::TagSource;
use crate::release::types::Release;

/// Default base URL for the GitHub API
const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Tag source backed by the GitHub Tags API
pub struct GitHubTags {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubTags {
    /// Creates a new GitHubTags source with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("release-gen")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            token: None,
        }
    }

    /// Attaches a personal access token, raising the API rate limit and
    /// granting access to private repositories
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl Default for GitHubTags {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl TagSource for GitHubTags {
    async fn fetch_tags(&self, repository: &str) -> Result<Vec<Release>, FetchError> {
        let url = format!("{}/repos/{}/tags", self.base_url, repository);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request.send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(repository.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(FetchError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let releases: Vec<Release> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub tags response: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        Ok(releases)
    }
}
