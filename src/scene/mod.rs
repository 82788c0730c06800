//! Scene description consumed by a renderer
//!
//! A [`Scene`] lists every shape needed to draw the release tree. All of it is
//! derived from the aggregates except leaf centres, which are jittered around
//! the branch end with the RNG handed to [`SceneBuilder::build`].

pub mod legend;

pub use legend::{legend, LegendEntry, LegendSymbol};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::f64::consts::TAU;
use tracing::debug;

use crate::config::{SceneConfig, TimelineMark};
use crate::domain::{BranchDirection, Highlight, Point, ReleaseAggregate, ReleaseId, SentimentLabel};

const TRUNK_COLOR: &str = "saddlebrown";
const BRANCH_COLOR: &str = "peru";
const X_EXTENT: f64 = 10.0;
const MIN_HEIGHT: f64 = 15.0;

/// Drawing area in tree coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trunk {
    /// Lower-left corner
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub anchor: Point,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Branch {
    pub release: ReleaseId,
    pub start: Point,
    pub end: Point,
    pub color: &'static str,
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaf {
    pub release: ReleaseId,
    pub sentiment: SentimentLabel,
    pub center: Point,
    pub radius: f64,
    pub color: &'static str,
}

/// Blossom for a praised release, wilt for a criticised one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Blossom,
    Wilt,
}

impl MarkerKind {
    pub fn for_highlight(highlight: Highlight) -> Option<Self> {
        match highlight {
            Highlight::Positive => Some(MarkerKind::Blossom),
            Highlight::Negative => Some(MarkerKind::Wilt),
            Highlight::None => None,
        }
    }

    pub fn symbol(&self) -> LegendSymbol {
        match self {
            MarkerKind::Blossom => LegendSymbol::Star,
            MarkerKind::Wilt => LegendSymbol::Cross,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MarkerKind::Blossom => "pink",
            MarkerKind::Wilt => "brown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub release: ReleaseId,
    pub kind: MarkerKind,
    pub symbol: LegendSymbol,
    pub position: Point,
    pub color: &'static str,
}

/// Everything a renderer needs to draw the tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub title: String,
    pub caption: String,
    pub bounds: Bounds,
    pub trunk: Trunk,
    pub branches: Vec<Branch>,
    pub leaves: Vec<Leaf>,
    pub markers: Vec<Marker>,
    pub timeline: Vec<Label>,
    pub legend: Vec<LegendEntry>,
}

impl Scene {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Leaves of one release, in drawing order
    pub fn leaves_for<'a>(&'a self, release: &'a ReleaseId) -> impl Iterator<Item = &'a Leaf> {
        self.leaves.iter().filter(move |leaf| &leaf.release == release)
    }
}

/// Turns release aggregates into a [`Scene`]
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    config: SceneConfig,
}

impl SceneBuilder {
    pub fn new(config: SceneConfig) -> Self {
        SceneBuilder { config }
    }

    /// Build a scene with reproducible leaf jitter
    pub fn build_seeded(&self, aggregates: &[ReleaseAggregate], seed: u64) -> Scene {
        let mut rng = StdRng::seed_from_u64(seed);
        self.build(aggregates, &mut rng)
    }

    /// Build a scene with leaf jitter from the thread RNG
    pub fn build_random(&self, aggregates: &[ReleaseAggregate]) -> Scene {
        let mut rng = rand::rng();
        self.build(aggregates, &mut rng)
    }

    pub fn build<R: Rng>(&self, aggregates: &[ReleaseAggregate], rng: &mut R) -> Scene {
        let tree_top = aggregates
            .iter()
            .map(|a| a.branch.end.y.max(a.branch.start.y))
            .fold(f64::NEG_INFINITY, f64::max);
        let trunk_top = self.config.trunk_top.max(tree_top + 1.0);

        let trunk = Trunk {
            origin: Point::new(-self.config.trunk_width / 2.0, self.config.trunk_bottom),
            width: self.config.trunk_width,
            height: trunk_top - self.config.trunk_bottom,
            color: TRUNK_COLOR,
        };

        let mut branches = Vec::with_capacity(aggregates.len());
        let mut leaves = Vec::new();
        let mut markers = Vec::new();

        for aggregate in aggregates {
            branches.push(self.branch(aggregate));
            self.push_leaves(aggregate, rng, &mut leaves);

            if let Some(kind) = MarkerKind::for_highlight(aggregate.highlight) {
                let end = aggregate.branch.end;
                markers.push(Marker {
                    release: aggregate.release.clone(),
                    kind,
                    symbol: kind.symbol(),
                    position: Point::new(end.x, end.y + self.config.marker_offset),
                    color: kind.color(),
                });
            }
        }

        let timeline = self
            .config
            .timeline
            .iter()
            .map(|TimelineMark { label, y }| Label {
                text: label.clone(),
                anchor: Point::new(0.0, *y),
                align: Align::Center,
            })
            .collect();

        debug!(
            branches = branches.len(),
            leaves = leaves.len(),
            markers = markers.len(),
            "built scene"
        );

        Scene {
            title: self.config.title.clone(),
            caption: self.config.caption.clone(),
            bounds: Bounds {
                x_min: -X_EXTENT,
                x_max: X_EXTENT,
                y_min: 0.0,
                y_max: MIN_HEIGHT.max(trunk_top + 1.0),
            },
            trunk,
            branches,
            leaves,
            markers,
            timeline,
            legend: legend(),
        }
    }

    fn branch(&self, aggregate: &ReleaseAggregate) -> Branch {
        let end = aggregate.branch.end;
        let sign = f64::from(aggregate.direction.sign());
        let align = match aggregate.direction {
            BranchDirection::Right => Align::Left,
            BranchDirection::Left => Align::Right,
        };

        Branch {
            release: aggregate.release.clone(),
            start: aggregate.branch.start,
            end,
            color: BRANCH_COLOR,
            label: Label {
                text: aggregate.release.label(),
                anchor: Point::new(end.x + self.config.label_offset * sign, end.y),
                align,
            },
        }
    }

    fn push_leaves<R: Rng>(
        &self,
        aggregate: &ReleaseAggregate,
        rng: &mut R,
        leaves: &mut Vec<Leaf>,
    ) {
        let spread = self.config.leaf_spread.abs();

        for label in SentimentLabel::ALL {
            for _ in 0..aggregate.counts.get(label) {
                // Uniform over the disc around the branch end
                let angle = rng.random_range(0.0..TAU);
                let distance = spread * rng.random::<f64>().sqrt();
                let end = aggregate.branch.end;

                leaves.push(Leaf {
                    release: aggregate.release.clone(),
                    sentiment: label,
                    center: Point::new(
                        end.x + distance * angle.cos(),
                        end.y + distance * angle.sin(),
                    ),
                    radius: self.config.leaf_radius,
                    color: label.color(),
                });
            }
        }
    }
}
