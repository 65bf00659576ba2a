//! Release filtering pipeline
//!
//! Selection walks the tag list in version-descending order so that the
//! first release encountered in any major or major.minor bucket is the
//! newest of that bucket; the accepted set is then re-sorted ascending
//! because callers expect oldest-first output. That ordering dependency
//! is load-bearing: sort first, dedup second, re-sort third.

use std::cmp::Ordering;
use std::collections::HashMap;

use semver::Version;

use crate::release::error::InvalidVersionError;
use crate::release::semver::{major_key, major_minor_key, parse_version};
use crate::release::types::{Release, SelectionParameters};

/// Apply the configured filters to a raw tag list.
///
/// The input order does not matter. `params.min_release` is validated
/// before anything else, and every tag name must parse as a semantic
/// version; a single malformed name fails the whole selection so that a
/// bad tag can never silently shrink the result set.
pub fn select(
    releases: Vec<Release>,
    params: &SelectionParameters,
) -> Result<Vec<Release>, InvalidVersionError> {
    let min = parse_version(&params.min_release)?;

    let mut ranked: Vec<(Version, Release)> = releases
        .into_iter()
        .map(|release| parse_version(&release.name).map(|version| (version, release)))
        .collect::<Result<_, _>>()?;

    // Descending; stable, so equal-precedence versions keep input order.
    ranked.sort_by(|(a, _), (b, _)| b.cmp_precedence(a));

    let mut chosen: HashMap<String, String> = HashMap::new();
    let mut accepted: Vec<(Version, Release)> = Vec::new();

    for (version, mut release) in ranked {
        if version.cmp_precedence(&min) == Ordering::Less {
            continue;
        }

        // The retention cap counts accepted releases only and is checked
        // before any bucket bookkeeping for this release.
        if params.keep_releases != 0 && accepted.len() == params.keep_releases {
            break;
        }

        if params.only_latest_minor {
            let key = major_key(&version);
            if chosen.contains_key(&key) {
                continue;
            }
            chosen.insert(key, release.name.clone());
        } else if params.only_latest_patch {
            let key = major_minor_key(&version);
            if chosen.contains_key(&key) {
                continue;
            }
            chosen.insert(key, release.name.clone());
        }

        let slugged = slug(&release.name);
        release.name_slug = slugged.clone();
        release.tag_slug = slugged;
        accepted.push((version, release));
    }

    accepted.sort_by(|(a, _), (b, _)| a.cmp_precedence(b));

    Ok(accepted.into_iter().map(|(_, release)| release).collect())
}

/// Identifier-safe rendering of a tag name: dots become hyphens, nothing
/// else changes ("v1.2.3" -> "v1-2-3")
pub fn slug(version: &str) -> String {
    version.replace('.', "-")
}

/// Append a copy of the newest selected release aliased as "latest".
///
/// The clone gets `name_slug = "latest"` and "-latest" appended to its
/// `tag_slug`; the original entry stays present and unmodified. An empty
/// selection is returned unchanged, since there is nothing to alias.
pub fn append_latest(mut selected: Vec<Release>) -> Vec<Release> {
    let Some(newest) = selected.last() else {
        return selected;
    };

    let mut latest = newest.clone();
    latest.name_slug = "latest".to_string();
    latest.tag_slug = format!("{}-latest", latest.tag_slug);
    selected.push(latest);

    selected
}
