//! Semantic-version parsing and ordering helpers for release tags

use semver::Version;

use crate::release::error::InvalidVersionError;

/// Parse a tag name into a `semver::Version`, normalizing the shapes
/// hosting providers publish.
///
/// Strips an optional leading 'v' and pads partial versions with zeros,
/// keeping any pre-release/build suffix attached to the last component.
///
/// Examples:
/// - "v1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "v1.2.3" -> Version(1, 2, 3)
/// - "v1.2.3-rc.1" -> Version(1, 2, 3) with pre-release "rc.1"
///
/// Ordering of parsed versions follows [`Version::cmp_precedence`]:
/// numeric major/minor/patch, pre-releases before the corresponding
/// release, build metadata ignored.
pub fn parse_version(input: &str) -> Result<Version, InvalidVersionError> {
    let bare = input.strip_prefix('v').unwrap_or(input);
    let core_end = bare.find(['-', '+']).unwrap_or(bare.len());
    let (core, suffix) = bare.split_at(core_end);

    let normalized = match core.split('.').count() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        _ => bare.to_string(),
    };

    Version::parse(&normalized).map_err(|_| InvalidVersionError::new(input))
}

/// Bucket key for "one release per major line": the numeric major
/// prefix as a map key ("1")
pub fn major_key(version: &Version) -> String {
    version.major.to_string()
}

/// Bucket key for "one release per major.minor line" ("1.2")
pub fn major_minor_key(version: &Version) -> String {
    format!("{}.{}", version.major, version.minor)
}
