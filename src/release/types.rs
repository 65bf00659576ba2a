//! Domain types shared by the selection pipeline and the API surface

use serde::{Deserialize, Serialize};

/// One published release tag of a repository.
///
/// `name_slug` and `tag_slug` are derived during selection and never
/// supplied by the caller; both stay empty until the release is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Raw tag name, e.g. "v1.2.3"
    pub name: String,
    #[serde(default)]
    pub name_slug: String,
    #[serde(default)]
    pub tag_slug: String,
    pub commit: Commit,
    pub node_id: String,
}

/// Commit a tag points at, as reported by the hosting API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub url: String,
}

/// Filter parameters of one generator invocation.
///
/// Every field is optional on the wire and takes its zero value when
/// absent; note that an absent `min_release` is the empty string, which
/// is not a valid semantic version and rejects the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectionParameters {
    /// "owner/name" identifier of the repository to list tags from
    pub repository: String,
    /// Minimum release to return, inclusive. Older releases are filtered out.
    pub min_release: String,
    /// Number of releases to keep. 0 keeps all of them.
    pub keep_releases: usize,
    /// Only return the newest release of each major line
    pub only_latest_minor: bool,
    /// Only return the newest patch of each major.minor line. Ignored when
    /// `only_latest_minor` is set.
    pub only_latest_patch: bool,
    /// Append one extra entry aliasing the newest selected release under
    /// the slug "latest"
    pub with_latest: bool,
}
