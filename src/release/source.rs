//! Source trait for fetching repository tags from a hosting provider

#[cfg(test)]
use mockall::automock;

use crate::release::error::FetchError;
use crate::release::types::Release;

/// Trait for fetching the tag list of a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TagSource: Send + Sync {
    /// Fetches every tag of a repository as an unfiltered release list
    ///
    /// # Arguments
    /// * `repository` - Owner-qualified repository name (e.g., "argoproj/argo-cd")
    ///
    /// # Returns
    /// * `Ok(Vec<Release>)` - All tags in the order the provider reports them
    /// * `Err(FetchError)` - If the fetch fails
    async fn fetch_tags(&self, repository: &str) -> Result<Vec<Release>, FetchError>;
}
