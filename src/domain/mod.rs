//! Domain types - pure values independent of ingestion and output

pub mod aggregate;
pub mod geometry;
pub mod release;
pub mod review;
pub mod sentiment;

pub use aggregate::{BranchDirection, ReleaseAggregate};
pub use geometry::{BranchGeometry, Point};
pub use release::ReleaseId;
pub use review::ReviewRecord;
pub use sentiment::{Highlight, SentimentCounts, SentimentLabel};
