use crate::config::ReleaseOrder;
use crate::domain::{ReleaseId, SentimentCounts};

/// Sort class used by [`ReleaseOrder::Version`]: parsed versions first,
/// then identifiers without digits, then the unknown group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum VersionKey {
    Parsed(semver::Version),
    Unparsed,
    Unknown,
}

impl VersionKey {
    fn of(release: &ReleaseId) -> Self {
        if release.is_unknown() {
            return VersionKey::Unknown;
        }
        release
            .numeric_version()
            .map(VersionKey::Parsed)
            .unwrap_or(VersionKey::Unparsed)
    }
}

/// Reorder groups (given in first-appearance order) by the chosen policy.
///
/// The sort is stable, so equal keys keep their first-appearance order.
pub fn order_groups(
    mut groups: Vec<(ReleaseId, SentimentCounts)>,
    order: ReleaseOrder,
) -> Vec<(ReleaseId, SentimentCounts)> {
    match order {
        ReleaseOrder::FirstAppearance => {}
        ReleaseOrder::Version => {
            groups.sort_by_cached_key(|(release, _)| VersionKey::of(release));
        }
    }
    groups
}
