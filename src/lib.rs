pub mod boundary;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod layout;
pub mod logging;
pub mod scene;
pub mod ui;

pub use classifier::{classify, SentimentClassifier};
pub use error::{ReleaseTreeError, Result};
pub use layout::{build_layout, LayoutBuilder};
pub use scene::{Scene, SceneBuilder};
