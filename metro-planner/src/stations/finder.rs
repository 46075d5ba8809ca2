//! Substring search over station names.

use crate::domain::{MetroError, Station, name_key};

use super::StationRegistry;

/// Find the first station in line order whose name contains `fragment`.
///
/// Matching is case-insensitive. When several stations match, the earliest
/// one on the line wins; there is no ranking.
pub fn find_by_name_contains<'a>(
    registry: &'a StationRegistry,
    fragment: &str,
) -> Result<&'a Station, MetroError> {
    let needle = name_key(fragment);
    registry
        .stations()
        .iter()
        .find(|s| s.key().contains(&needle))
        .ok_or_else(|| MetroError::NotFound(fragment.to_string()))
}
