use serde::{Deserialize, Serialize};

use super::geometry::BranchGeometry;
use super::release::ReleaseId;
use super::sentiment::{Highlight, SentimentCounts};

/// Side of the trunk a branch grows towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchDirection {
    Left,
    Right,
}

impl BranchDirection {
    /// The first branch grows to the left
    pub const FIRST: BranchDirection = BranchDirection::Left;

    /// -1 for left, +1 for right
    pub fn sign(&self) -> i8 {
        match self {
            BranchDirection::Left => -1,
            BranchDirection::Right => 1,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            BranchDirection::Left => BranchDirection::Right,
            BranchDirection::Right => BranchDirection::Left,
        }
    }

    /// Direction of the branch at `index` in processing order
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::FIRST
        } else {
            Self::FIRST.flipped()
        }
    }
}

/// Per-release rollup of review sentiment plus the derived placement of its
/// branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseAggregate {
    pub release: ReleaseId,
    #[serde(flatten)]
    pub counts: SentimentCounts,
    pub vertical_position: f64,
    pub direction: BranchDirection,
    pub highlight: Highlight,
    pub branch: BranchGeometry,
}

impl ReleaseAggregate {
    pub fn positive(&self) -> usize {
        self.counts.positive
    }

    pub fn neutral(&self) -> usize {
        self.counts.neutral
    }

    pub fn negative(&self) -> usize {
        self.counts.negative
    }

    /// Number of reviews (and therefore leaves) on this branch
    pub fn total(&self) -> usize {
        self.counts.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_alternates_from_left() {
        assert_eq!(BranchDirection::for_index(0), BranchDirection::Left);
        assert_eq!(BranchDirection::for_index(1), BranchDirection::Right);
        assert_eq!(BranchDirection::for_index(2), BranchDirection::Left);
        assert_eq!(BranchDirection::for_index(0).sign(), -1);
        assert_eq!(BranchDirection::for_index(1).sign(), 1);
    }

    #[test]
    fn test_flipped() {
        assert_eq!(BranchDirection::Left.flipped(), BranchDirection::Right);
        assert_eq!(BranchDirection::Right.flipped(), BranchDirection::Left);
    }
}
