//! Aggregation of classified reviews into per-release branches
//!
//! The builder is deterministic: the same records always produce the same
//! counts, positions, directions, and highlights. Leaf jitter is left to
//! [`crate::scene`].

pub mod order;

use std::collections::HashMap;

use tracing::debug;

use crate::classifier::SentimentClassifier;
use crate::config::{Config, LayoutConfig};
use crate::domain::{
    BranchDirection, BranchGeometry, Highlight, Point, ReleaseAggregate, ReleaseId, ReviewRecord,
    SentimentCounts,
};

/// Classifies reviews and places one branch per release
#[derive(Debug, Clone)]
pub struct LayoutBuilder {
    classifier: SentimentClassifier,
    config: LayoutConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder
    pub fn new(classifier: SentimentClassifier, config: LayoutConfig) -> Self {
        LayoutBuilder { classifier, config }
    }

    pub fn from_config(config: &Config) -> Self {
        LayoutBuilder::new(
            SentimentClassifier::new(&config.classifier),
            config.layout.clone(),
        )
    }

    /// Build the ordered release aggregates for a set of reviews.
    ///
    /// Every record lands in exactly one bucket of exactly one aggregate;
    /// records without a release form their own [`ReleaseId::Unknown`] group.
    pub fn build_layout(&self, records: &[ReviewRecord]) -> Vec<ReleaseAggregate> {
        let groups = self.group(records);
        let groups = order::order_groups(groups, self.config.order);

        let aggregates: Vec<ReleaseAggregate> = groups
            .into_iter()
            .enumerate()
            .map(|(index, (release, counts))| self.place(index, release, counts))
            .collect();

        debug!(
            records = records.len(),
            releases = aggregates.len(),
            "built release layout"
        );
        aggregates
    }

    /// Count labels per release, in first-appearance order
    fn group(&self, records: &[ReviewRecord]) -> Vec<(ReleaseId, SentimentCounts)> {
        let mut groups: Vec<(ReleaseId, SentimentCounts)> = Vec::new();
        let mut index_of: HashMap<ReleaseId, usize> = HashMap::new();

        for record in records {
            let label = self.classifier.classify_record(record);
            let index = *index_of.entry(record.release.clone()).or_insert_with(|| {
                groups.push((record.release.clone(), SentimentCounts::default()));
                groups.len() - 1
            });
            groups[index].1.record(label);
        }

        groups
    }

    fn place(&self, index: usize, release: ReleaseId, counts: SentimentCounts) -> ReleaseAggregate {
        let vertical_position = self.config.base + index as f64 * self.config.step;
        let direction = BranchDirection::for_index(index);

        ReleaseAggregate {
            release,
            counts,
            vertical_position,
            direction,
            highlight: Highlight::from_counts(&counts),
            branch: self.branch_geometry(vertical_position, direction),
        }
    }

    /// Branch from the trunk at height `y` out to its leaf cluster
    pub fn branch_geometry(&self, y: f64, direction: BranchDirection) -> BranchGeometry {
        BranchGeometry {
            start: Point::new(0.0, y),
            end: Point::new(
                f64::from(direction.sign()) * self.config.horizontal_reach,
                y + self.config.branch_rise,
            ),
        }
    }
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        LayoutBuilder::new(SentimentClassifier::default(), LayoutConfig::default())
    }
}

/// Build a layout with the default rules and constants
pub fn build_layout(records: &[ReviewRecord]) -> Vec<ReleaseAggregate> {
    LayoutBuilder::default().build_layout(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReleaseOrder;

    fn review(content: &str, score: f64, release: &str) -> ReviewRecord {
        ReviewRecord::new(content, score, release)
    }

    #[test]
    fn test_empty_input() {
        assert!(build_layout(&[]).is_empty());
    }

    #[test]
    fn test_two_releases_all_positive() {
        let records = vec![
            review("great", 5.0, "42.0"),
            review("love it", 5.0, "42.0"),
            review("excellent", 4.0, "43.0"),
        ];

        let layout = build_layout(&records);
        assert_eq!(layout.len(), 2);

        assert_eq!(layout[0].release, ReleaseId::new("42.0"));
        assert_eq!(layout[0].vertical_position, 2.5);
        assert_eq!(layout[0].direction, BranchDirection::Left);
        assert_eq!(layout[0].highlight, Highlight::Positive);
        assert_eq!(layout[0].counts, SentimentCounts::new(2, 0, 0));

        assert_eq!(layout[1].release, ReleaseId::new("43.0"));
        assert_eq!(layout[1].vertical_position, 4.5);
        assert_eq!(layout[1].direction, BranchDirection::Right);
    }

    #[test]
    fn test_first_appearance_order() {
        let records = vec![
            review("", 3.0, "44.0"),
            review("", 3.0, "42.0"),
            review("", 3.0, "44.0"),
            review("", 3.0, "43.0"),
        ];

        let releases: Vec<String> = build_layout(&records)
            .iter()
            .map(|a| a.release.to_string())
            .collect();
        assert_eq!(releases, vec!["44.0", "42.0", "43.0"]);
    }

    #[test]
    fn test_counts_sum_to_records() {
        let records = vec![
            review("great", 5.0, "1"),
            review("meh", 3.0, "1"),
            review("bad", 1.0, "2"),
            review("", 2.0, "3"),
            review("", 3.0, "2"),
        ];

        let layout = build_layout(&records);
        let total: usize = layout.iter().map(|a| a.total()).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_unknown_release_is_own_group() {
        let records = vec![
            review("great", 5.0, "42.0"),
            ReviewRecord {
                content: None,
                score: None,
                release: ReleaseId::Unknown,
            },
            review("bad", 1.0, ""),
        ];

        let layout = build_layout(&records);
        assert_eq!(layout.len(), 2);
        assert_eq!(layout[1].release, ReleaseId::Unknown);
        assert_eq!(layout[1].counts, SentimentCounts::new(0, 1, 1));
    }

    #[test]
    fn test_branch_geometry() {
        let mut config = LayoutConfig::default();
        config.horizontal_reach = 4.5;
        config.branch_rise = 1.0;
        let builder = LayoutBuilder::new(SentimentClassifier::default(), config);

        let layout = builder.build_layout(&[review("", 3.0, "a"), review("", 3.0, "b")]);
        assert_eq!(layout[0].branch.start, Point::new(0.0, 2.5));
        assert_eq!(layout[0].branch.end, Point::new(-4.5, 3.5));
        assert_eq!(layout[1].branch.end, Point::new(4.5, 5.5));
    }

    #[test]
    fn test_version_order() {
        let mut config = LayoutConfig::default();
        config.order = ReleaseOrder::Version;
        let builder = LayoutBuilder::new(SentimentClassifier::default(), config);

        let records = vec![
            review("", 3.0, "44.0"),
            review("", 3.0, "42.10"),
            review("", 3.0, "42.5"),
        ];
        let layout = builder.build_layout(&records);
        let releases: Vec<String> = layout.iter().map(|a| a.release.to_string()).collect();
        assert_eq!(releases, vec!["42.5", "42.10", "44.0"]);
        assert_eq!(layout[0].direction, BranchDirection::Left);
        assert_eq!(layout[0].vertical_position, 2.5);
    }

    #[test]
    fn test_build_layout_is_repeatable() {
        let records = vec![
            review("good", 4.0, "42.0"),
            review("bug", 1.0, "42.5"),
            review("fine", 3.0, "42.5"),
        ];
        let builder = LayoutBuilder::default();
        assert_eq!(builder.build_layout(&records), builder.build_layout(&records));
    }
}
